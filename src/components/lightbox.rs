//! Lightbox Overlay
//!
//! Full-size view of a gallery image with caption, counter and
//! previous/next controls. Escape closes, arrow keys step, a click on the
//! backdrop closes.

use dioxus::prelude::*;
use pixseek_core::overlay::CAPTION_DELAY_MS;
use pixseek_ui::{CloseButton, IconButton};

use crate::context::use_lightbox;

#[component]
pub fn LightboxView() -> Element {
    let mut lightbox = use_lightbox();

    let state = lightbox.read();
    let Some(slide) = state.current().cloned() else {
        return rsx! {};
    };
    let (position, count) = state.position().unwrap_or((1, 1));
    let has_prev = state.has_prev();
    let has_next = state.has_next();
    drop(state);

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => lightbox.write().close(),
        Key::ArrowLeft => lightbox.write().prev(),
        Key::ArrowRight => lightbox.write().next(),
        _ => {}
    };

    rsx! {
        div {
            class: "sl-overlay",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                // Focus so keyboard navigation works without a click first
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_keydown,
            onclick: move |_| lightbox.write().close(),

            CloseButton { onclick: move |_| lightbox.write().close() }

            IconButton {
                class: "sl-prev".to_string(),
                aria_label: "Previous image".to_string(),
                disabled: !has_prev,
                onclick: move |_| lightbox.write().prev(),
                "\u{2039}"
            }

            figure {
                class: "sl-figure",
                onclick: move |evt| evt.stop_propagation(),

                img { class: "sl-image", src: "{slide.src}", alt: "{slide.caption}" }
                figcaption {
                    class: "sl-caption",
                    style: "animation-delay: {CAPTION_DELAY_MS}ms;",
                    "{slide.caption}"
                }
            }

            IconButton {
                class: "sl-next".to_string(),
                aria_label: "Next image".to_string(),
                disabled: !has_next,
                onclick: move |_| lightbox.write().next(),
                "\u{203A}"
            }

            div { class: "sl-counter", "{position} / {count}" }
        }
    }
}
