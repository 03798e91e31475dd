//! Core types for pixseek
//!
//! Everything here is plain data exchanged between the API client, the
//! controller and whatever surface renders the gallery.

pub mod image;
pub mod page;

pub use image::ImageHit;
pub use page::{PageRequest, PageResponse};
