//! Toast Stack
//!
//! Top-right notifications for warnings, empty results, end of results and
//! request failures. Toasts expire on their own; a click dismisses early.

use dioxus::prelude::*;
use pixseek_core::{Notice, ToastPosition};
use ulid::Ulid;

use crate::context::use_toasts;

/// One visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Ulid,
    pub notice: Notice,
}

#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();
    let position = ToastPosition::default();

    rsx! {
        div { class: "toasts {position.class()}",
            for toast in toasts.read().iter() {
                {
                    let id = toast.id;
                    let style = toast.notice.kind.style();
                    rsx! {
                        div {
                            key: "{toast.id}",
                            class: "toast {toast.notice.kind.class()}",
                            style: "{style.inline_css()}",
                            role: "alert",
                            onclick: move |_| toasts.write().retain(|t| t.id != id),

                            if let Some(title) = &toast.notice.title {
                                strong { class: "toast__title", "{title}" }
                            }
                            div { class: "toast__message",
                                for line in toast.notice.lines() {
                                    p { "{line}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
