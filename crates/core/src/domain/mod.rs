//! The closed set of scalar domains a tri-state value can hold.
//!
//! Each domain owns its literal-level codec: decoding receives the raw bytes
//! of one JSON value (never `null`, never empty), encoding produces the JSON
//! literal for a present value.

mod boolean;
mod bytes;
mod date;
mod float64;
mod int64;
mod text;
mod timestamp;

use std::fmt;

use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::Result;
use crate::kind::Kind;
use crate::value::Nullable;

pub use timestamp::{parse_timestamp, Layout, TIMESTAMP_FORMAT, TIMESTAMP_LAYOUTS};

mod sealed {
    pub trait Sealed {}
}

/// A native type usable as the domain of a [`Nullable`] value.
///
/// Sealed: implemented for `String`, `i64`, `f64`, `bool`, `Vec<u8>`,
/// `DateTime<FixedOffset>` and `NaiveDate` only.
pub trait Domain: Clone + PartialEq + fmt::Debug + Send + Sync + 'static + sealed::Sealed {
    /// Logical-type descriptor of this domain
    const KIND: Kind;

    /// The domain zero value, held while unassigned or null
    fn zero() -> Self;

    /// JSON literal emitted for an unassigned value
    fn zero_literal() -> &'static str;

    /// Decode a non-null literal.
    ///
    /// `Ok(None)` means the literal counts as absent.
    fn decode(literal: &[u8]) -> Result<Option<Self>>;

    /// Encode a present value as a JSON literal
    fn encode(&self) -> Result<String>;

    /// Human-readable form used by `Display`
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Generic value access
    fn to_datum(&self) -> Datum;

    /// Coerce a raw value into this domain, handing it back on mismatch
    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum>;

    /// Box a typed value into the dynamic enum
    fn into_any(value: Nullable<Self>) -> AnyNullable;

    /// Borrow the typed value out of the dynamic enum
    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>>;
}
