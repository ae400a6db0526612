//! The capability contract shared by every tri-state value.

use std::fmt;

use crate::datum::Datum;
use crate::kind::Kind;
use crate::status::Status;

/// Read access to a tri-state value without knowing its domain.
///
/// Object safe: aggregate walkers hand out `&dyn TriState` for each leaf.
pub trait TriState: fmt::Debug + Send + Sync {
    /// The held value as a raw datum; the domain zero unless present
    fn datum(&self) -> Datum;

    /// Whether the field was present in the payload
    fn is_assigned(&self) -> bool;

    /// Whether the field was explicitly null
    fn is_null(&self) -> bool;

    /// Logical-type descriptor
    fn kind(&self) -> Kind;

    /// Name of the native type backing the value
    fn native_type(&self) -> &'static str {
        self.kind().native_type()
    }

    /// Current flags
    fn status(&self) -> Status {
        Status::new(self.is_assigned(), self.is_null())
    }
}
