//! Reusable UI components
//!
//! Class names match the stylesheet shipped by the desktop app
//! (`.btn-*`, `.search-*`, `.loader`).

mod button;
mod input;
mod loader;

pub use button::*;
pub use input::*;
pub use loader::*;
