//! Theme for pixseek.

mod styles;

pub use styles::GLOBAL_STYLES;
