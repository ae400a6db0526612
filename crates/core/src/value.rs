//! The tri-state scalar value.
//!
//! A [`Nullable`] is always in exactly one of three states:
//!
//! | State | `assigned` | `null` | value |
//! |-------|-----------|--------|-------|
//! | unassigned | false | false | domain zero |
//! | present-null | true | true | domain zero |
//! | present-value | true | false | meaningful |
//!
//! "Unassigned and null" is unreachable: every constructor funnels through
//! [`Nullable::with_status`].

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

use crate::contract::TriState;
use crate::datum::Datum;
use crate::domain::Domain;
use crate::error::Result;
use crate::kind::Kind;
use crate::literal;
use crate::status::Status;

/// A scalar field that is unassigned, present-and-null, or present-with-value.
///
/// # Examples
///
/// ```
/// use tristate_core::{Nullable, Text};
///
/// let name = Text::new("Ada".to_string());
/// assert!(name.is_assigned() && !name.is_null());
///
/// let cleared = Text::null();
/// assert!(cleared.is_assigned() && cleared.is_null());
///
/// let absent = Text::default();
/// assert!(!absent.is_assigned());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Nullable<D: Domain> {
    pub(crate) value: D,
    pub(crate) assigned: bool,
    pub(crate) null: bool,
}

/// Nullable text
pub type Text = Nullable<String>;
/// Nullable signed 64-bit integer
pub type Int64 = Nullable<i64>;
/// Nullable 64-bit float
pub type Float64 = Nullable<f64>;
/// Nullable boolean
pub type Bool = Nullable<bool>;
/// Nullable byte sequence
pub type Bytes = Nullable<Vec<u8>>;
/// Nullable instant with a fixed UTC offset
pub type Timestamp = Nullable<DateTime<FixedOffset>>;
/// Nullable calendar date
pub type Date = Nullable<NaiveDate>;

impl<D: Domain> Nullable<D> {
    /// Present value
    pub fn new(value: D) -> Self {
        Self::with_status(value, Status::PRESENT)
    }

    /// Present value, or unassigned when `assigned` is false
    pub fn new_assigned(value: D, assigned: bool) -> Self {
        Self::with_status(value, Status::assigned(assigned))
    }

    /// Full constructor.
    ///
    /// `assigned == false` wins over everything and yields unassigned;
    /// otherwise `null == true` yields present-null. The value argument is
    /// ignored in both cases.
    pub fn new_with(value: D, assigned: bool, null: bool) -> Self {
        Self::with_status(value, Status::new(assigned, null))
    }

    /// Construct from a status flag pair
    pub fn with_status(value: D, status: Status) -> Self {
        if !status.assigned {
            return Self::unassigned();
        }
        if status.null {
            return Self::null();
        }
        Nullable {
            value,
            assigned: true,
            null: false,
        }
    }

    /// Present-null
    pub fn null() -> Self {
        Nullable {
            value: D::zero(),
            assigned: true,
            null: true,
        }
    }

    /// Unassigned
    pub fn unassigned() -> Self {
        Nullable {
            value: D::zero(),
            assigned: false,
            null: false,
        }
    }

    /// The held value; the domain zero unless present
    pub fn value(&self) -> &D {
        &self.value
    }

    /// Consume into the held value
    pub fn into_value(self) -> D {
        self.value
    }

    /// The value, only when present
    pub fn get(&self) -> Option<&D> {
        self.is_present().then_some(&self.value)
    }

    /// Consume into the value, only when present
    pub fn into_option(self) -> Option<D> {
        if self.is_present() {
            Some(self.value)
        } else {
            None
        }
    }

    /// Whether the field was present in the payload
    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// Whether the field was explicitly null
    pub fn is_null(&self) -> bool {
        self.null
    }

    /// Whether the field was absent.
    ///
    /// This is the emptiness predicate used for field omission.
    pub fn is_unassigned(&self) -> bool {
        !self.assigned
    }

    /// Whether the field carries a meaningful value
    pub fn is_present(&self) -> bool {
        self.assigned && !self.null
    }

    /// Current state as a flag pair
    pub fn status(&self) -> Status {
        Status::new(self.assigned, self.null)
    }

    /// Whether the held value equals the domain zero
    pub fn is_zero(&self) -> bool {
        self.value == D::zero()
    }

    /// Replace the whole state with a copy of `from`
    pub fn copy_from(&mut self, from: &Self) {
        self.clone_from(from);
    }

    /// Decode one JSON literal.
    ///
    /// `null` yields present-null; an empty literal leaves the value
    /// unassigned; anything else goes to the domain decoder.
    pub fn decode_literal(literal: &[u8]) -> Result<Self> {
        if literal == literal::NULL {
            return Ok(Self::null());
        }
        if literal.is_empty() {
            return Ok(Self::unassigned());
        }
        Ok(match D::decode(literal)? {
            Some(value) => Self::new(value),
            None => Self::unassigned(),
        })
    }

    /// Encode as one JSON literal.
    ///
    /// Unassigned values encode to the domain zero literal, so decoding the
    /// output yields a present value, not an unassigned one.
    pub fn encode_literal(&self) -> Result<String> {
        if !self.assigned {
            return Ok(D::zero_literal().to_string());
        }
        if self.null {
            return Ok("null".to_string());
        }
        self.value.encode()
    }
}

impl<D: Domain> Default for Nullable<D> {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl<D: Domain> From<D> for Nullable<D> {
    fn from(value: D) -> Self {
        Self::new(value)
    }
}

impl<D: Domain> TriState for Nullable<D> {
    fn datum(&self) -> Datum {
        self.value.to_datum()
    }

    fn is_assigned(&self) -> bool {
        self.assigned
    }

    fn is_null(&self) -> bool {
        self.null
    }

    fn kind(&self) -> Kind {
        D::KIND
    }
}

impl<D: Domain> fmt::Display for Nullable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.assigned, self.null) {
            (false, _) => Ok(()),
            (true, true) => f.write_str("null"),
            (true, false) => self.value.fmt_value(f),
        }
    }
}

// The literal is pre-formatted so the wire form is byte-exact; only
// serde_json serializers understand RawValue.
impl<D: Domain> Serialize for Nullable<D> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let literal = self.encode_literal().map_err(ser::Error::custom)?;
        let raw = RawValue::from_string(literal).map_err(ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de, D: Domain> Deserialize<'de> for Nullable<D> {
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::decode_literal(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}
