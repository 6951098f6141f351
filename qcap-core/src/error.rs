//! Errors that abort a capture.
//!
//! Title lookups have their own error type in [`crate::title`]; those never
//! reach this enum because link formatting falls back to the raw URL.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CaptureError>;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// No text argument and nothing usable on the clipboard.
    #[error("no input provided and clipboard is empty")]
    InputUnavailable,

    #[error("could not determine knowledge base path from {}: {reason}", path.display())]
    ConfigUnavailable { path: PathBuf, reason: String },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CaptureError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
