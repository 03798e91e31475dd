//! Search Field Component
//!
//! Text input for the search form. Controlled: the parent owns the value
//! and clears it after each submission.

use dioxus::prelude::*;

/// `name` attribute of the query field
pub const SEARCH_FIELD_NAME: &str = "search-text";

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when the text changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search images...".to_string())]
    pub placeholder: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Search text input
///
/// # Example
///
/// ```rust,ignore
/// let mut query = use_signal(String::new);
///
/// rsx! {
///     SearchInput {
///         value: query(),
///         oninput: move |s| query.set(s),
///     }
/// }
/// ```
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "text",
                name: SEARCH_FIELD_NAME,
                autocomplete: "off",
                autofocus: true,
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
