use dioxus::prelude::*;
use pixseek_core::Lightbox;

use crate::components::{LightboxView, Toast, ToastStack};
use crate::pages::Search;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the app-wide toast and lightbox state.
#[component]
pub fn App() -> Element {
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);
    let lightbox: Signal<Lightbox> = use_signal(Lightbox::default);

    use_context_provider(|| toasts);
    use_context_provider(|| lightbox);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            Search {}
        }
        LightboxView {}
        ToastStack {}
    }
}
