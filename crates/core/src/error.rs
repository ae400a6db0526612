//! Error types for tri-state value decoding, encoding and construction.

use thiserror::Error;

use crate::kind::Kind;

/// Result type for value operations
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors raised by scalar codecs, the codec registry and the dynamic factory.
///
/// Decode errors are reported for a single field and never recovered from
/// inside the codec layer; callers decide whether to abort the whole payload.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// Malformed boolean or string literal
    #[error("invalid {kind} literal {literal}: {reason}")]
    Validation {
        /// Domain the literal was decoded into
        kind: Kind,
        /// The offending literal, as received
        literal: String,
        /// What was wrong with it
        reason: String,
    },

    /// Malformed integer or float literal
    #[error("invalid {kind} number {literal}: {reason}")]
    NumericFormat {
        /// Int64 or Float64
        kind: Kind,
        /// The offending literal, as received
        literal: String,
        /// Underlying parse failure
        reason: String,
    },

    /// No accepted timestamp layout matched.
    ///
    /// Carries the failure of the first layout in priority order.
    #[error("cannot parse {input:?} as timestamp (layout {layout:?}): {reason}")]
    TimeFormat {
        /// The unquoted input text
        input: String,
        /// First layout tried
        layout: &'static str,
        /// Why that layout rejected the input
        reason: String,
    },

    /// Malformed calendar date
    #[error("cannot parse {input:?} as date: {reason}")]
    DateFormat {
        /// The unquoted input text
        input: String,
        /// Underlying parse failure
        reason: String,
    },

    /// The descriptor has no registered codec
    #[error("unsupported value type: {name}")]
    UnsupportedDescriptor {
        /// Descriptor name as requested
        name: String,
    },

    /// Raw value's domain does not match the requested descriptor
    #[error("wrong type of input value, expected: {expected}, actual: {actual}")]
    DomainMismatch {
        /// Requested descriptor
        expected: Kind,
        /// Description of the value actually supplied
        actual: String,
    },

    /// The value cannot be represented in JSON
    #[error("cannot encode {kind} value: {reason}")]
    Encode {
        /// Domain being encoded
        kind: Kind,
        /// Why encoding failed
        reason: String,
    },
}

impl ValueError {
    pub(crate) fn validation(kind: Kind, literal: &[u8], reason: impl Into<String>) -> Self {
        ValueError::Validation {
            kind,
            literal: String::from_utf8_lossy(literal).into_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn numeric(kind: Kind, literal: &[u8], reason: impl ToString) -> Self {
        ValueError::NumericFormat {
            kind,
            literal: String::from_utf8_lossy(literal).into_owned(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encode(kind: Kind, reason: impl ToString) -> Self {
        ValueError::Encode {
            kind,
            reason: reason.to_string(),
        }
    }

    /// Create an unsupported-descriptor error
    pub fn unsupported(name: impl Into<String>) -> Self {
        ValueError::UnsupportedDescriptor { name: name.into() }
    }

    /// Create a domain-mismatch error
    pub fn mismatch(expected: Kind, actual: impl Into<String>) -> Self {
        ValueError::DomainMismatch {
            expected,
            actual: actual.into(),
        }
    }

    /// The domain this error concerns, when it concerns exactly one
    pub fn kind(&self) -> Option<Kind> {
        match self {
            ValueError::Validation { kind, .. }
            | ValueError::NumericFormat { kind, .. }
            | ValueError::Encode { kind, .. } => Some(*kind),
            ValueError::TimeFormat { .. } => Some(Kind::Timestamp),
            ValueError::DateFormat { .. } => Some(Kind::Date),
            ValueError::DomainMismatch { expected, .. } => Some(*expected),
            ValueError::UnsupportedDescriptor { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_includes_literal() {
        let err = ValueError::validation(Kind::Bool, b"1", "expected true or false");
        assert_eq!(
            err.to_string(),
            "invalid Bool literal 1: expected true or false"
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = ValueError::mismatch(Kind::Float64, "Bool(true)");
        assert_eq!(
            err.to_string(),
            "wrong type of input value, expected: Float64, actual: Bool(true)"
        );
        assert_eq!(err.kind(), Some(Kind::Float64));
    }

    #[test]
    fn test_unsupported_has_no_kind() {
        assert_eq!(ValueError::unsupported("Uuid").kind(), None);
    }
}
