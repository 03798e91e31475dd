//! Lightbox model: which gallery image is enlarged, if any.
//!
//! Framework-free so the navigation rules can be tested without a window.
//! Renderers keep one [`Lightbox`] per gallery and call
//! [`Lightbox::refresh`] after every append.

use crate::types::ImageHit;

/// Delay before the caption fades in
pub const CAPTION_DELAY_MS: u64 = 250;

/// One enlarged image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Full-size image URL
    pub src: String,
    /// Caption text, taken from the thumbnail's alt text
    pub caption: String,
}

impl From<&ImageHit> for Slide {
    fn from(hit: &ImageHit) -> Self {
        Self {
            src: hit.large_image_url.clone(),
            caption: hit.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    slides: Vec<Slide>,
    current: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind to the gallery's current slides.
    ///
    /// An open slide stays open when its index still exists; otherwise the
    /// lightbox closes (the gallery was cleared).
    pub fn refresh(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        if matches!(self.current, Some(index) if index >= self.slides.len()) {
            self.current = None;
        }
    }

    /// Open the slide at `index`. Returns false if there is no such slide.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Step forward, stopping at the last slide.
    pub fn next(&mut self) {
        if let Some(index) = self.current {
            if index + 1 < self.slides.len() {
                self.current = Some(index + 1);
            }
        }
    }

    /// Step back, stopping at the first slide.
    pub fn prev(&mut self) {
        if let Some(index) = self.current {
            self.current = Some(index.saturating_sub(1));
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.current.and_then(|index| self.slides.get(index))
    }

    /// 1-based position and slide count, for an "n / total" counter
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|index| (index + 1, self.slides.len()))
    }

    pub fn has_next(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.slides.len())
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                src: format!("https://cdn.example/{}.jpg", i),
                caption: format!("tag{}", i),
            })
            .collect()
    }

    #[test]
    fn test_open_out_of_range() {
        let mut lb = Lightbox::new();
        lb.refresh(slides(2));
        assert!(!lb.open(2));
        assert!(!lb.is_open());
        assert!(lb.open(1));
        assert_eq!(lb.current().map(|s| s.caption.as_str()), Some("tag1"));
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let mut lb = Lightbox::new();
        lb.refresh(slides(3));
        lb.open(0);
        lb.prev();
        assert_eq!(lb.position(), Some((1, 3)));
        assert!(!lb.has_prev());
        lb.next();
        lb.next();
        lb.next();
        assert_eq!(lb.position(), Some((3, 3)));
        assert!(!lb.has_next());
    }

    #[test]
    fn test_refresh_keeps_open_slide_after_append() {
        let mut lb = Lightbox::new();
        lb.refresh(slides(15));
        lb.open(14);
        assert!(!lb.has_next());

        lb.refresh(slides(30));
        assert_eq!(lb.position(), Some((15, 30)));
        assert!(lb.has_next());
    }

    #[test]
    fn test_refresh_closes_when_cleared() {
        let mut lb = Lightbox::new();
        lb.refresh(slides(5));
        lb.open(3);
        lb.refresh(Vec::new());
        assert!(!lb.is_open());
        assert!(lb.is_empty());
    }

    #[test]
    fn test_slide_from_hit_uses_large_url_and_tags() {
        let hit = ImageHit {
            id: 7,
            large_image_url: "large.jpg".into(),
            webformat_url: "web.jpg".into(),
            tags: "cat, kitten".into(),
            likes: 0,
            views: 0,
            comments: 0,
            downloads: 0,
        };
        let slide = Slide::from(&hit);
        assert_eq!(slide.src, "large.jpg");
        assert_eq!(slide.caption, "cat, kitten");
    }
}
