use std::fmt;

use super::{sealed, Domain};
use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::literal;
use crate::value::Nullable;

impl sealed::Sealed for bool {}

impl Domain for bool {
    const KIND: Kind = Kind::Bool;

    fn zero() -> Self {
        false
    }

    fn zero_literal() -> &'static str {
        "false"
    }

    fn decode(lit: &[u8]) -> Result<Option<Self>> {
        if lit == literal::TRUE {
            Ok(Some(true))
        } else if lit == literal::FALSE {
            Ok(Some(false))
        } else {
            Err(ValueError::validation(Kind::Bool, lit, "expected true or false"))
        }
    }

    fn encode(&self) -> Result<String> {
        Ok(if *self { "true" } else { "false" }.to_string())
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn to_datum(&self) -> Datum {
        Datum::Bool(*self)
    }

    fn from_datum(datum: Datum) -> std::result::Result<Self, Datum> {
        match datum {
            Datum::Bool(v) => Ok(v),
            other => Err(other),
        }
    }

    fn into_any(value: Nullable<Self>) -> AnyNullable {
        AnyNullable::Bool(value)
    }

    fn from_any(any: &AnyNullable) -> Option<&Nullable<Self>> {
        match any {
            AnyNullable::Bool(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ValueError;
    use crate::Bool;

    #[test]
    fn test_decode_tokens() {
        assert_eq!(Bool::decode_literal(b"true").unwrap(), Bool::new(true));
        assert_eq!(Bool::decode_literal(b"false").unwrap(), Bool::new(false));
    }

    #[test]
    fn test_decode_rejects_everything_else() {
        for bad in [&b"1"[..], b"0", b"\"true\"", b"True", b"yes"] {
            let err = Bool::decode_literal(bad).unwrap_err();
            assert!(matches!(err, ValueError::Validation { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_present_false_differs_from_unassigned() {
        let decoded = Bool::decode_literal(b"false").unwrap();
        assert!(decoded.is_present());
        assert_ne!(decoded, Bool::unassigned());
        assert_eq!(Bool::unassigned().encode_literal().unwrap(), "false");
    }
}
