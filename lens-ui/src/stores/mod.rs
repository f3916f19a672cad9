//! Pure state models for the image search widget
//!
//! These hold no Dioxus state of their own. Hooks wrap them in signals, and
//! the unit tests drive them directly.

pub mod dialog;
pub mod image_search;
pub mod selection;

pub use dialog::*;
pub use image_search::*;
pub use selection::*;
