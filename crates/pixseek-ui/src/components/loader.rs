//! Loading Indicator
//!
//! CSS spinner shown while a page request is in flight. Visibility is a
//! `hidden` class toggle so the element stays mounted.

use dioxus::prelude::*;

/// Class list for the loader in the given state
pub fn loader_class(visible: bool) -> &'static str {
    if visible {
        "loader"
    } else {
        "loader hidden"
    }
}

/// Properties for the Loader component
#[derive(Clone, PartialEq, Props)]
pub struct LoaderProps {
    /// Whether the spinner is shown
    pub visible: bool,
    /// Screen-reader text
    #[props(default = "Loading images, please wait...".to_string())]
    pub label: String,
}

#[component]
pub fn Loader(props: LoaderProps) -> Element {
    rsx! {
        div {
            class: loader_class(props.visible),
            role: "status",
            "aria-live": "polite",
            span { class: "loader__spinner" }
            span { class: "loader__label", "{props.label}" }
        }
    }
}
