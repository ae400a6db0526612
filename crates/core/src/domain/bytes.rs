//! Byte sequences keep the raw literal on decode (quotes and escapes
//! included) but encode as a quoted string. The two directions are
//! deliberately not inverses.

use std::fmt;

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::literal;
use crate::value::Nullable;

impl sealed::Sealed for Vec<u8> {}

impl Domain for Vec<u8> {
    const KIND: Kind = Kind::Bytes;

    fn zero() -> Self {
        Vec::new()
    }

    fn zero_literal() -> &'static str {
        "\"\""
    }

    fn decode(literal: &[u8]) -> Result<Option<Self>> {
        Ok(Some(literal.to_vec()))
    }

    fn encode(&self) -> Result<String> {
        literal::quote_bytes(self).map_err(|e| ValueError::encode(Kind::Bytes, e))
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self))
    }

    fn to_datum(&self) -> Datum {
        Datum::Bytes(self.clone())
    }

    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::Bytes(v) => Ok(v),
            Datum::Text(s) => Ok(s.into_bytes()),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Bytes(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Bytes(v) => Some(v),
            _ => None,
        }
    }
}

impl Nullable<Vec<u8>> {
    /// The held bytes; empty unless present
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }
}
