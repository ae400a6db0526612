//! Error types for aggregate decoding and binding.

use thiserror::Error;
use tristate_core::ValueError;

/// Result type for wire operations
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors raised while decoding or binding a JSON payload.
#[derive(Debug, Error)]
pub enum WireError {
    /// Malformed JSON, or a field-level error surfaced through the decoder
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scalar codec or factory error outside the decoder
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The payload had no bytes
    #[error("request body is empty")]
    EmptyBody,

    /// The payload exceeded the configured limit
    #[error("request body is {actual} bytes, limit is {limit}")]
    BodyTooLarge {
        /// Configured maximum
        limit: usize,
        /// Received size
        actual: usize,
    },

    /// A binding hook refused the payload
    #[error("rejected: {reason}")]
    Rejected {
        /// Hook-supplied explanation
        reason: String,
    },
}

impl WireError {
    /// Create a hook rejection
    pub fn rejected(reason: impl Into<String>) -> Self {
        WireError::Rejected {
            reason: reason.into(),
        }
    }
}
