//! pixseek UI Components
//!
//! Small Dioxus building blocks shared by the desktop app: buttons, the
//! search field and the loading spinner. They only emit markup and class
//! names; the look lives in the app's global stylesheet.

pub mod components;

pub use components::*;
