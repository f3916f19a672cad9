//! Errors from browser interop

use thiserror::Error;

/// Failure talking to the browser (window, blobs, file reads)
#[derive(Debug, Error)]
pub enum InteropError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Failed to attach {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("Failed to create blob: {0}")]
    Blob(String),
    #[error("Failed to create object URL: {0}")]
    ObjectUrl(String),
    #[error("Failed to read file {name}: {reason}")]
    FileRead { name: String, reason: String },
}
