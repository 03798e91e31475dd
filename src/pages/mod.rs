//! Page components for pixseek.

mod search;

pub use search::{Search, SearchEvent};
