//! A tri-state value of any domain.

use serde::{Serialize, Serializer};

use crate::contract::TriState;
use crate::datum::Datum;
use crate::domain::Domain;
use crate::error::Result;
use crate::kind::Kind;
use crate::value::{Bool, Bytes, Date, Float64, Int64, Nullable, Text, Timestamp};

/// Dynamically typed tri-state value, as produced by the factory and the
/// codec registry.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyNullable {
    /// Text value
    Text(Text),
    /// Integer value
    Int64(Int64),
    /// Float value
    Float64(Float64),
    /// Boolean value
    Bool(Bool),
    /// Byte-sequence value
    Bytes(Bytes),
    /// Timestamp value
    Timestamp(Timestamp),
    /// Date value
    Date(Date),
}

macro_rules! each_variant {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            AnyNullable::Text($v) => $body,
            AnyNullable::Int64($v) => $body,
            AnyNullable::Float64($v) => $body,
            AnyNullable::Bool($v) => $body,
            AnyNullable::Bytes($v) => $body,
            AnyNullable::Timestamp($v) => $body,
            AnyNullable::Date($v) => $body,
        }
    };
}

impl AnyNullable {
    /// Borrow through the capability contract
    pub fn as_tri_state(&self) -> &dyn TriState {
        each_variant!(self, v => v as &dyn TriState)
    }

    /// Borrow as a typed value, if the domain matches
    pub fn downcast_ref<D: Domain>(&self) -> Option<&Nullable<D>> {
        D::from_any(self)
    }

    /// Encode as one JSON literal
    pub fn encode_literal(&self) -> Result<String> {
        each_variant!(self, v => v.encode_literal())
    }

    /// Whether the value carries a meaningful value
    pub fn is_present(&self) -> bool {
        each_variant!(self, v => v.is_present())
    }
}

impl<D: Domain> From<Nullable<D>> for AnyNullable {
    fn from(value: Nullable<D>) -> Self {
        D::into_any(value)
    }
}

impl TriState for AnyNullable {
    fn datum(&self) -> Datum {
        each_variant!(self, v => TriState::datum(v))
    }

    fn is_assigned(&self) -> bool {
        each_variant!(self, v => v.is_assigned())
    }

    fn is_null(&self) -> bool {
        each_variant!(self, v => v.is_null())
    }

    fn kind(&self) -> Kind {
        each_variant!(self, v => TriState::kind(v))
    }
}

impl Serialize for AnyNullable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        each_variant!(self, v => v.serialize(serializer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_typed_and_back() {
        let any = AnyNullable::from(Int64::new(5));
        assert_eq!(any.kind(), Kind::Int64);
        assert_eq!(any.downcast_ref::<i64>(), Some(&Int64::new(5)));
        assert_eq!(any.downcast_ref::<bool>(), None);
    }

    #[test]
    fn test_contract_through_dyn() {
        let any = AnyNullable::from(Text::null());
        let tri = any.as_tri_state();
        assert!(tri.is_assigned());
        assert!(tri.is_null());
        assert_eq!(tri.native_type(), "String");
        assert_eq!(tri.datum(), Datum::Text(String::new()));
    }

    #[test]
    fn test_serialize_matches_typed() {
        let any = AnyNullable::from(Bool::new(true));
        assert_eq!(serde_json::to_string(&any).unwrap(), "true");
        assert_eq!(any.encode_literal().unwrap(), "true");
    }
}
