//! Shared UI state for pixseek.
//!
//! The search page owns the gallery signals; toasts and the lightbox are
//! app-wide so overlays can render above everything else.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(Vec::<Toast>::new()));
//!
//! // In child components
//! let toasts = use_toasts();
//! ```

use std::sync::OnceLock;

use dioxus::prelude::*;
use pixseek_core::{Lightbox, SearchConfig};

use crate::components::Toast;

/// Search configuration, set once before the window opens
static SEARCH_CONFIG: OnceLock<SearchConfig> = OnceLock::new();

/// Store the validated configuration. Later calls are ignored.
pub fn set_search_config(config: SearchConfig) {
    if SEARCH_CONFIG.set(config).is_err() {
        tracing::warn!("Search configuration already set");
    }
}

/// Get the search configuration parsed at startup.
///
/// Before startup has stored one, this is a keyless config that the client
/// will refuse.
pub fn get_search_config() -> SearchConfig {
    SEARCH_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| SearchConfig::new(String::new()))
}

/// Hook to access the toast stack.
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

/// Hook to access the lightbox bound to the gallery.
pub fn use_lightbox() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}
