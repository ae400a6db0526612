use std::fmt;

use chrono::NaiveDate;

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::literal;
use crate::value::Nullable;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl sealed::Sealed for NaiveDate {}

impl Domain for NaiveDate {
    const KIND: Kind = Kind::Date;

    fn zero() -> Self {
        NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    fn zero_literal() -> &'static str {
        "\"\""
    }

    fn decode(lit: &[u8]) -> Result<Option<Self>> {
        let text = literal::unquote(lit)
            .map_err(|e| ValueError::validation(Kind::Date, lit, e.to_string()))?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map(Some)
            .map_err(|e| ValueError::DateFormat {
                input: text,
                reason: e.to_string(),
            })
    }

    fn encode(&self) -> Result<String> {
        literal::quote(&self.format(DATE_FORMAT).to_string())
            .map_err(|e| ValueError::encode(Kind::Date, e))
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DATE_FORMAT))
    }

    fn to_datum(&self) -> Datum {
        Datum::Date(*self)
    }

    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::Date(v) => Ok(v),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Date(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Date(v) => Some(v),
            _ => None,
        }
    }
}
