//! Capability traits between the controller and the page it drives.
//!
//! The controller never touches a widget directly; it asks a
//! [`GallerySurface`] to clear, append, toggle and scroll, and a
//! [`Notifier`] to show toasts. Renderers implement these on top of their
//! own widgets, tests implement them with recorders.

use crate::error::SearchResult;
use crate::notice::Notice;
use crate::overlay::Slide;
use crate::types::ImageHit;

/// How many gallery rows to scroll after appending a page
pub const SCROLL_ROWS: f64 = 2.0;

/// The rendered gallery plus the controls around it.
///
/// Visibility toggles are idempotent and silently do nothing when the
/// element is not present.
pub trait GallerySurface {
    /// Add `hits` after the existing gallery content and rebind the lightbox.
    ///
    /// Fails with [`crate::SearchError::MissingElement`] when there is no
    /// gallery container to append to.
    fn append(&self, hits: &[ImageHit]) -> SearchResult<()>;

    /// Remove every gallery item.
    fn clear(&self);

    fn set_loader_visible(&self, visible: bool);

    fn set_load_more_visible(&self, visible: bool);

    /// Rendered height of one gallery item, `None` if there is none yet.
    fn item_height(&self) -> Option<f64>;

    /// Smoothly scroll the viewport down by `dy` pixels.
    fn scroll_by(&self, dy: f64);

    /// Empty the search form's text field.
    fn reset_query_input(&self);

    fn show_loader(&self) {
        self.set_loader_visible(true);
    }

    fn hide_loader(&self) {
        self.set_loader_visible(false);
    }

    fn show_load_more(&self) {
        self.set_load_more_visible(true);
    }

    fn hide_load_more(&self) {
        self.set_load_more_visible(false);
    }

    /// Bring freshly appended items into view.
    fn scroll_to_next_group(&self) {
        if let Some(height) = self.item_height() {
            self.scroll_by(height * SCROLL_ROWS);
        }
    }
}

/// Toast/alert display.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Zoom overlay bound to the gallery's anchors.
pub trait Overlay {
    /// Rebind to the gallery's current images.
    fn refresh(&self, slides: Vec<Slide>);
}

impl<T: GallerySurface + ?Sized> GallerySurface for &T {
    fn append(&self, hits: &[ImageHit]) -> SearchResult<()> {
        (**self).append(hits)
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn set_loader_visible(&self, visible: bool) {
        (**self).set_loader_visible(visible)
    }

    fn set_load_more_visible(&self, visible: bool) {
        (**self).set_load_more_visible(visible)
    }

    fn item_height(&self) -> Option<f64> {
        (**self).item_height()
    }

    fn scroll_by(&self, dy: f64) {
        (**self).scroll_by(dy)
    }

    fn reset_query_input(&self) {
        (**self).reset_query_input()
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

impl<T: Overlay + ?Sized> Overlay for &T {
    fn refresh(&self, slides: Vec<Slide>) {
        (**self).refresh(slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorder {
        height: Cell<Option<f64>>,
        scrolled: RefCell<Vec<f64>>,
        loader: Cell<bool>,
    }

    impl GallerySurface for Recorder {
        fn append(&self, _hits: &[ImageHit]) -> SearchResult<()> {
            Ok(())
        }
        fn clear(&self) {}
        fn set_loader_visible(&self, visible: bool) {
            self.loader.set(visible);
        }
        fn set_load_more_visible(&self, _visible: bool) {}
        fn item_height(&self) -> Option<f64> {
            self.height.get()
        }
        fn scroll_by(&self, dy: f64) {
            self.scrolled.borrow_mut().push(dy);
        }
        fn reset_query_input(&self) {}
    }

    #[test]
    fn scroll_is_noop_without_items() {
        let surface = Recorder::default();
        surface.scroll_to_next_group();
        assert!(surface.scrolled.borrow().is_empty());
    }

    #[test]
    fn scroll_moves_two_item_heights() {
        let surface = Recorder::default();
        surface.height.set(Some(152.5));
        surface.scroll_to_next_group();
        assert_eq!(*surface.scrolled.borrow(), vec![305.0]);
    }

    #[test]
    fn loader_toggle_is_idempotent() {
        let surface = Recorder::default();
        let by_ref = &surface;
        by_ref.show_loader();
        by_ref.show_loader();
        assert!(surface.loader.get());
        by_ref.hide_loader();
        by_ref.hide_loader();
        assert!(!surface.loader.get());
    }
}
