//! Tri-state nullable scalar values.
//!
//! Every value is unassigned (absent from the payload), present-null
//! (explicit `null`), or present-with-value. This crate provides:
//!
//! - [`Nullable`] and its seven domain aliases ([`Text`], [`Int64`],
//!   [`Float64`], [`Bool`], [`Bytes`], [`Timestamp`], [`Date`])
//! - The [`TriState`] capability contract
//! - [`codec::CodecRegistry`] and the dynamic [`factory`]
//!
//! Aggregate decoding with null propagation lives in `tristate-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod any;
pub mod codec;
pub mod contract;
pub mod datum;
pub mod domain;
pub mod error;
pub mod factory;
pub mod kind;
pub mod literal;
pub mod status;
pub mod value;

pub use any::AnyNullable;
pub use codec::{install, installed, Codec, CodecRegistry};
pub use contract::TriState;
pub use datum::Datum;
pub use domain::{parse_timestamp, Domain, TIMESTAMP_FORMAT};
pub use error::{Result, ValueError};
pub use kind::Kind;
pub use status::Status;
pub use value::{Bool, Bytes, Date, Float64, Int64, Nullable, Text, Timestamp};
