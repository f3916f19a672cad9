//! Dioxus hooks over the widget's state models

mod use_dialog;
mod use_window_listener;

pub use use_dialog::{use_dialog, use_dialog_with, DialogController};
pub use use_window_listener::use_window_listener;
