use std::fmt;

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::value::Nullable;

impl sealed::Sealed for i64 {}

impl Domain for i64 {
    const KIND: Kind = Kind::Int64;

    fn zero() -> Self {
        0
    }

    fn zero_literal() -> &'static str {
        "0"
    }

    fn decode(literal: &[u8]) -> Result<Option<Self>> {
        let text = std::str::from_utf8(literal)
            .map_err(|e| ValueError::numeric(Kind::Int64, literal, e))?;
        text.parse::<i64>()
            .map(Some)
            .map_err(|e| ValueError::numeric(Kind::Int64, literal, e))
    }

    fn encode(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn to_datum(&self) -> Datum {
        Datum::I64(*self)
    }

    // Every integer width widens; unsigned values above i64::MAX wrap.
    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::I8(v) => Ok(v as i64),
            Datum::I16(v) => Ok(v as i64),
            Datum::I32(v) => Ok(v as i64),
            Datum::I64(v) => Ok(v),
            Datum::Isize(v) => Ok(v as i64),
            Datum::U8(v) => Ok(v as i64),
            Datum::U16(v) => Ok(v as i64),
            Datum::U32(v) => Ok(v as i64),
            Datum::U64(v) => Ok(v as i64),
            Datum::Usize(v) => Ok(v as i64),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Int64(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Int64(v) => Some(v),
            _ => None,
        }
    }
}
