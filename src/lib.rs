//! Tri-state nullable values for PATCH-style JSON payloads.
//!
//! Every scalar field distinguishes "absent", "explicitly null" and "has a
//! value", and a `null` aimed at a nested record clears every field beneath
//! it. See [`tristate_core`] for the scalar layer and [`tristate_wire`] for
//! aggregate decoding.
//!
//! ```
//! use tristate::types::{Bind, Text};
//!
//! tristate::record! {
//!     #[derive(Debug)]
//!     pub struct Patch { pub title: Text, pub note: Text }
//! }
//! impl Bind for Patch {}
//!
//! tristate::init();
//! let patch: Patch = tristate::bind_json(br#"{"note":null}"#, &Default::default()).unwrap();
//! assert!(patch.title.is_unassigned());
//! assert!(patch.note.is_null());
//! ```

#![warn(missing_docs)]

pub mod types;

pub use tristate_core::{codec, Result as ValueResult};
pub use tristate_wire::{
    assigned_leaves, bind_json, from_slice, from_str, is_omitted, leaves, record,
    shape_via_deserialize, to_string, to_vec, Result,
};

/// Install the process-wide codec registry.
///
/// Call once at startup; repeated or concurrent calls are harmless.
pub fn init() -> &'static tristate_core::CodecRegistry {
    tristate_core::install()
}
