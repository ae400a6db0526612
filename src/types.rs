//! Public types for the tristate API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Scalar values
pub use tristate_core::{Bool, Bytes, Date, Float64, Int64, Nullable, Text, Timestamp};

// Capability contract and dynamic construction
pub use tristate_core::{AnyNullable, Datum, Kind, Status, TriState};

// Codec registry
pub use tristate_core::{Codec, CodecRegistry};

// Aggregate decoding
pub use tristate_wire::{
    Bind, BindOptions, FieldPath, Intercept, Leaf, PathSegment, Plain, Shape,
};

// Errors
pub use tristate_core::ValueError;
pub use tristate_wire::WireError;
