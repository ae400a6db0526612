//! Entry points for decoding and encoding whole payloads.

use serde::Serialize;
use tristate_core::TriState;

use crate::error::Result;
use crate::intercept::Intercept;
use crate::shape::Shape;

/// Decode a destination from JSON bytes.
///
/// A top-level `null` is intercepted like any nested one.
pub fn from_slice<T: Shape>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice::<Intercept<T>>(bytes)?.into_inner())
}

/// Decode a destination from JSON text
pub fn from_str<T: Shape>(text: &str) -> Result<T> {
    from_slice(text.as_bytes())
}

/// Encode as JSON bytes
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Encode as JSON text
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Omission predicate for `#[serde(skip_serializing_if = "is_omitted")]`:
/// true when the value was absent from the payload.
pub fn is_omitted<T: TriState + ?Sized>(value: &T) -> bool {
    !value.is_assigned()
}
