use std::fmt;

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::literal;
use crate::value::Nullable;

impl sealed::Sealed for String {}

impl Domain for String {
    const KIND: Kind = Kind::Text;

    fn zero() -> Self {
        String::new()
    }

    fn zero_literal() -> &'static str {
        "\"\""
    }

    fn decode(lit: &[u8]) -> Result<Option<Self>> {
        match literal::unquote(lit) {
            Ok(s) => Ok(Some(s)),
            Err(_) => {
                // Retry once with escaped solidus folded, as older writers emitted it
                let folded = String::from_utf8_lossy(lit).replace("\\/", "/");
                literal::unquote(folded.as_bytes())
                    .map(Some)
                    .map_err(|e| ValueError::validation(Kind::Text, lit, e.to_string()))
            }
        }
    }

    fn encode(&self) -> Result<String> {
        literal::quote(self).map_err(|e| ValueError::encode(Kind::Text, e))
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn to_datum(&self) -> Datum {
        Datum::Text(self.clone())
    }

    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::Text(s) => Ok(s),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Text(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl Nullable<String> {
    /// The held text; empty unless present
    pub fn as_str(&self) -> &str {
        &self.value
    }
}
