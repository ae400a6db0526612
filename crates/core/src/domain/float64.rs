use std::fmt;

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::literal;
use crate::value::Nullable;

impl sealed::Sealed for f64 {}

impl Domain for f64 {
    const KIND: Kind = Kind::Float64;

    fn zero() -> Self {
        0.0
    }

    fn zero_literal() -> &'static str {
        "0"
    }

    fn decode(lit: &[u8]) -> Result<Option<Self>> {
        let text =
            std::str::from_utf8(lit).map_err(|e| ValueError::numeric(Kind::Float64, lit, e))?;
        let v = text
            .parse::<f64>()
            .map_err(|e| ValueError::numeric(Kind::Float64, lit, e))?;
        if v.is_infinite() && !spells_infinity(text) {
            return Err(ValueError::numeric(Kind::Float64, lit, "value out of range"));
        }
        Ok(Some(v))
    }

    fn encode(&self) -> Result<String> {
        literal::format_float(*self).ok_or_else(|| ValueError::Encode {
            kind: Kind::Float64,
            reason: format!("unsupported value {}", self),
        })
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn to_datum(&self) -> Datum {
        Datum::F64(*self)
    }

    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::F64(v) => Ok(v),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Float64(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Float64(v) => Some(v),
            _ => None,
        }
    }
}

fn spells_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
