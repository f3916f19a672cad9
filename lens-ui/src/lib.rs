//! lens-ui - Search bar with a "search by image" dialog
//!
//! Contains the pure state models, Dioxus hooks, and view components for the
//! image search widget. Hosts mount [`SearchInputBar`] and optionally listen
//! for staged images through its callbacks.

pub mod components;
pub mod config;
pub mod display_types;
pub mod error;
pub mod hooks;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use config::ImageSearchConfig;
pub use display_types::*;
pub use error::InteropError;
