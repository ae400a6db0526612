//! Logical-type descriptors for the seven scalar domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Identifies which scalar domain a tri-state value belongs to.
///
/// Used as the codec registry key and by the dynamic factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// UTF-8 text
    Text,
    /// Signed 64-bit integer
    Int64,
    /// 64-bit float
    Float64,
    /// Boolean
    Bool,
    /// Raw byte sequence
    Bytes,
    /// Instant with a fixed UTC offset
    Timestamp,
    /// Calendar date without time or zone
    Date,
}

impl Kind {
    /// All descriptors, in registration order
    pub const ALL: [Kind; 7] = [
        Kind::Text,
        Kind::Int64,
        Kind::Float64,
        Kind::Bool,
        Kind::Bytes,
        Kind::Timestamp,
        Kind::Date,
    ];

    /// Descriptor name
    pub fn name(self) -> &'static str {
        match self {
            Kind::Text => "Text",
            Kind::Int64 => "Int64",
            Kind::Float64 => "Float64",
            Kind::Bool => "Bool",
            Kind::Bytes => "Bytes",
            Kind::Timestamp => "Timestamp",
            Kind::Date => "Date",
        }
    }

    /// Name of the native Rust type holding the domain value
    pub fn native_type(self) -> &'static str {
        match self {
            Kind::Text => "String",
            Kind::Int64 => "i64",
            Kind::Float64 => "f64",
            Kind::Bool => "bool",
            Kind::Bytes => "Vec<u8>",
            Kind::Timestamp => "DateTime<FixedOffset>",
            Kind::Date => "NaiveDate",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ValueError::unsupported(s))
    }
}
