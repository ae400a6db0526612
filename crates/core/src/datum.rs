//! Raw, untyped scalar values fed to the dynamic factory.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// A raw native value.
///
/// The factory coerces a datum into a domain: every integer width widens to
/// `i64`, and text is accepted where bytes are expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    /// Text
    Text(String),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// Pointer-sized signed integer
    Isize(isize),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// Pointer-sized unsigned integer
    Usize(usize),
    /// 64-bit float
    F64(f64),
    /// Boolean
    Bool(bool),
    /// Byte sequence
    Bytes(Vec<u8>),
    /// Instant with offset
    Timestamp(DateTime<FixedOffset>),
    /// Calendar date
    Date(NaiveDate),
}

impl Datum {
    /// Name of the native type carried
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Text(_) => "String",
            Datum::I8(_) => "i8",
            Datum::I16(_) => "i16",
            Datum::I32(_) => "i32",
            Datum::I64(_) => "i64",
            Datum::Isize(_) => "isize",
            Datum::U8(_) => "u8",
            Datum::U16(_) => "u16",
            Datum::U32(_) => "u32",
            Datum::U64(_) => "u64",
            Datum::Usize(_) => "usize",
            Datum::F64(_) => "f64",
            Datum::Bool(_) => "bool",
            Datum::Bytes(_) => "Vec<u8>",
            Datum::Timestamp(_) => "DateTime<FixedOffset>",
            Datum::Date(_) => "NaiveDate",
        }
    }
}

macro_rules! datum_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Datum {
                fn from(v: $ty) -> Self {
                    Datum::$variant(v)
                }
            }
        )*
    };
}

datum_from! {
    String => Text,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f64 => F64,
    bool => Bool,
    Vec<u8> => Bytes,
    DateTime<FixedOffset> => Timestamp,
    NaiveDate => Date,
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Datum::Text(v.to_string())
    }
}

impl From<&[u8]> for Datum {
    fn from(v: &[u8]) -> Self {
        Datum::Bytes(v.to_vec())
    }
}

impl From<DateTime<Utc>> for Datum {
    fn from(v: DateTime<Utc>) -> Self {
        Datum::Timestamp(v.into())
    }
}
