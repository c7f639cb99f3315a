//! Error types for alarm-notice.

use thiserror::Error;

/// Errors that can occur while unpacking an alarm notification.
///
/// Every variant describes malformed input. None of them is recovered
/// locally; the invoking runtime decides whether to retry.
#[derive(Debug, Error)]
pub enum NoticeError {
    /// The envelope itself is not valid JSON or has the wrong shape.
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// The envelope has no records.
    #[error("Envelope contains no records")]
    NoRecords,

    /// The record's message payload is not a valid state-change notice.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}

impl NoticeError {
    /// Whether the error was caused by malformed input.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidEnvelope(_) | Self::NoRecords | Self::MalformedPayload(_)
        )
    }
}
