//! UI components for the pixseek desktop app.

mod gallery;
mod lightbox;
mod search_form;
mod toasts;

pub use gallery::Gallery;
pub use lightbox::LightboxView;
pub use search_form::SearchForm;
pub use toasts::{Toast, ToastStack};
