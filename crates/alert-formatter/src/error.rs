//! Error types for alert handling.

use alarm_notice::NoticeError;
use thiserror::Error;

/// Errors that fault a handler invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The invocation input could not be unpacked.
    #[error("malformed input: {0}")]
    Notice(#[from] NoticeError),
}

impl HandlerError {
    /// Whether the fault was caused by malformed input.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Self::Notice(e) => e.is_malformed_input(),
        }
    }
}
