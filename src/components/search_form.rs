//! Search Form
//!
//! `form.form` with the query field and a submit button. Submitting hands
//! the raw text to the parent; trimming and validation happen in the
//! controller.

use dioxus::prelude::*;
use pixseek_ui::{Button, ButtonVariant, SearchInput};

#[component]
pub fn SearchForm(
    /// Current text of the query field
    value: Signal<String>,
    /// Called with the untrimmed query text
    on_search: EventHandler<String>,
) -> Element {
    let mut value = value;

    rsx! {
        form {
            class: "form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_search.call(value());
            },

            SearchInput {
                value: value(),
                oninput: move |text| value.set(text),
            }

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                "Search"
            }
        }
    }
}
