//! Null-propagating JSON decoding for records of tri-state values.
//!
//! A `null` aimed at a record does not fail and does not leave the record
//! untouched: every tri-state leaf beneath it becomes present-null, so a
//! PATCH-style payload can clear a whole sub-document in one token.
//!
//! ```
//! use tristate_core::Text;
//!
//! tristate_wire::record! {
//!     pub struct Address { pub city: Text, pub street: Text }
//! }
//! tristate_wire::record! {
//!     pub struct Profile { pub name: Text, pub address: Address }
//! }
//!
//! let p: Profile = tristate_wire::from_str(r#"{"name":"Ada","address":null}"#).unwrap();
//! assert_eq!(p.name.as_str(), "Ada");
//! assert!(p.address.city.is_null() && p.address.street.is_null());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bind;
pub mod decode;
pub mod error;
pub mod intercept;
pub mod leaves;
pub mod path;
mod record;
pub mod shape;

pub use bind::{bind_json, Bind, BindOptions};
pub use decode::{from_slice, from_str, is_omitted, to_string, to_vec};
pub use error::{Result, WireError};
pub use intercept::Intercept;
pub use leaves::{assigned_leaves, leaves, visit_leaves, Leaf};
pub use path::{FieldPath, PathParseError, PathSegment};
pub use shape::{LeafVisitor, Plain, Shape};

#[doc(hidden)]
pub mod __private {
    pub fn trace_propagation(record: &'static str) {
        tracing::trace!(target: "tristate::wire", record, "null propagated into record");
    }
}
