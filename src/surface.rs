//! DOM-backed implementations of the core capability traits.
//!
//! Each handle is a bundle of `Signal`s, so it is `Copy` and can be moved
//! into the search coroutine while components keep reading the same state.
//! Reads use `peek()` because they happen outside of rendering.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use pixseek_core::{
    GallerySurface, ImageHit, Lightbox, Notice, Notifier, Overlay, SearchError, SearchResult,
    Slide,
};
use ulid::Ulid;

use crate::components::Toast;

/// Gallery, loader, "load more" and search field state for one page.
#[derive(Clone, Copy, PartialEq)]
pub struct DomSurface {
    pub items: Signal<Vec<ImageHit>>,
    /// Set by the gallery container while it is mounted
    pub gallery_mounted: Signal<bool>,
    /// Measured height of the first gallery item
    pub item_height: Signal<Option<f64>>,
    pub loader_visible: Signal<bool>,
    pub load_more_visible: Signal<bool>,
    pub query_text: Signal<String>,
    pub overlay: LightboxHandle,
}

impl GallerySurface for DomSurface {
    fn append(&self, hits: &[ImageHit]) -> SearchResult<()> {
        if !*self.gallery_mounted.peek() {
            tracing::error!("Gallery container not found");
            return Err(SearchError::MissingElement("gallery"));
        }

        let mut items = self.items;
        items.write().extend_from_slice(hits);

        let slides = items.peek().iter().map(Slide::from).collect();
        self.overlay.refresh(slides);
        Ok(())
    }

    fn clear(&self) {
        let mut items = self.items;
        let mut item_height = self.item_height;
        items.write().clear();
        item_height.set(None);
        self.overlay.refresh(Vec::new());
    }

    fn set_loader_visible(&self, visible: bool) {
        let mut loader = self.loader_visible;
        if *loader.peek() != visible {
            loader.set(visible);
        }
    }

    fn set_load_more_visible(&self, visible: bool) {
        let mut load_more = self.load_more_visible;
        if *load_more.peek() != visible {
            load_more.set(visible);
        }
    }

    fn item_height(&self) -> Option<f64> {
        *self.item_height.peek()
    }

    fn scroll_by(&self, dy: f64) {
        // Two frames later the appended rows have been laid out.
        let script = format!(
            "requestAnimationFrame(() => requestAnimationFrame(() => \
             window.scrollBy({{ top: {dy}, behavior: 'smooth' }})));"
        );
        let eval = document::eval(&script);
        spawn(async move {
            if let Err(e) = eval.await {
                tracing::debug!("Smooth scroll failed: {:?}", e);
            }
        });
    }

    fn reset_query_input(&self) {
        let mut query = self.query_text;
        query.set(String::new());
    }
}

/// Lightbox rebinding for the gallery.
#[derive(Clone, Copy, PartialEq)]
pub struct LightboxHandle(pub Signal<Lightbox>);

impl Overlay for LightboxHandle {
    fn refresh(&self, slides: Vec<Slide>) {
        let mut lightbox = self.0;
        lightbox.write().refresh(slides);
    }
}

/// Pushes notices onto the toast stack and expires them.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastNotifier {
    toasts: Signal<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<Vec<Toast>>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let id = Ulid::new();
        let timeout = Duration::from_millis(notice.kind.style().timeout_ms);
        tracing::debug!("Toast {:?}: {}", notice.kind, notice.message);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, notice });

        spawn(async move {
            tokio::time::sleep(timeout).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}
