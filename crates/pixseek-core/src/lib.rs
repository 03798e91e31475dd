//! pixseek core library
//!
//! Paginated image search against the Pixabay API, independent of any UI
//! toolkit.
//!
//! ## Overview
//!
//! - [`api`]: the HTTP client and the [`ImageSource`] trait it implements
//! - [`pagination`]: page cursor and end-of-results arithmetic
//! - [`surface`]: capability traits the controller drives ([`GallerySurface`],
//!   [`Notifier`], [`Overlay`])
//! - [`controller`]: the submit / load-more state machine
//! - [`overlay`]: lightbox navigation model
//!
//! ## Quick Start
//!
//! ```ignore
//! use pixseek_core::{PixabayClient, SearchConfig, SearchController};
//!
//! let config = SearchConfig::new(std::env::var("PIXABAY_API_KEY")?);
//! let per_page = config.per_page;
//! let client = PixabayClient::new(config)?;
//! let mut controller = SearchController::new(client, my_surface, my_toasts, per_page);
//!
//! controller.submit("cats").await;
//! controller.load_more().await;
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod notice;
pub mod overlay;
pub mod pagination;
pub mod surface;
pub mod types;

// Re-exports
pub use api::{ImageSource, PixabayClient};
pub use config::SearchConfig;
pub use controller::{SearchController, SearchOutcome};
pub use error::{SearchError, SearchResult};
pub use notice::{Notice, NoticeKind, ToastPosition, ToastStyle};
pub use overlay::{Lightbox, Slide};
pub use pagination::Pagination;
pub use surface::{GallerySurface, Notifier, Overlay};
pub use types::*;
