//! Search page: form, gallery, loader and "load more".
//!
//! UI events are queued into one coroutine that owns the
//! [`SearchController`], so each event runs to completion before the next
//! one starts.

use dioxus::prelude::*;
use futures::StreamExt;
use pixseek_core::notice::ERROR_TITLE;
use pixseek_core::{Notice, Notifier, PixabayClient, SearchController};
use pixseek_ui::{Button, ButtonVariant, Loader};

use crate::components::{Gallery, SearchForm};
use crate::context::{get_search_config, use_lightbox, use_toasts};
use crate::surface::{DomSurface, LightboxHandle, ToastNotifier};

/// User actions handled by the search coroutine
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Form submitted with this raw text
    Submit(String),
    /// "Load more" clicked
    LoadMore,
}

#[component]
pub fn Search() -> Element {
    let toasts = use_toasts();
    let lightbox = use_lightbox();

    let surface = DomSurface {
        items: use_signal(Vec::new),
        gallery_mounted: use_signal(|| false),
        item_height: use_signal(|| None),
        loader_visible: use_signal(|| false),
        load_more_visible: use_signal(|| false),
        query_text: use_signal(String::new),
        overlay: LightboxHandle(lightbox),
    };

    let events = use_coroutine(move |mut rx: UnboundedReceiver<SearchEvent>| async move {
        let notifier = ToastNotifier::new(toasts);
        let config = get_search_config();
        let per_page = config.per_page;

        let client = match PixabayClient::new(config) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("Failed to create image client: {}", e);
                notifier.notify(Notice::error(e.to_string()).with_title(ERROR_TITLE));
                return;
            }
        };

        let mut controller = SearchController::new(client, surface, notifier, per_page);

        while let Some(event) = rx.next().await {
            let outcome = match event {
                SearchEvent::Submit(query) => controller.submit(&query).await,
                SearchEvent::LoadMore => controller.load_more().await,
            };
            tracing::debug!("Search event handled: {:?}", outcome);
        }
    });

    rsx! {
        header { class: "page-header",
            h1 { class: "page-title", "pixseek" }
            SearchForm {
                value: surface.query_text,
                on_search: move |query: String| events.send(SearchEvent::Submit(query)),
            }
        }

        main { class: "page-content",
            Gallery { surface }

            Loader { visible: (surface.loader_visible)() }

            Button {
                variant: ButtonVariant::LoadMore,
                hidden: !(surface.load_more_visible)(),
                onclick: move |_| events.send(SearchEvent::LoadMore),
                "Load more"
            }
        }
    }
}
