//! Build tri-state values from raw native values.
//!
//! Used by storage mappings that know a column's descriptor only at runtime.

use crate::any::AnyNullable;
use crate::datum::Datum;
use crate::domain::Domain;
use crate::error::{Result, ValueError};
use crate::kind::Kind;
use crate::status::Status;
use crate::value::Nullable;

/// Build a typed value from a raw datum and a status.
///
/// When `status.null` is set the datum is discarded without a domain check
/// and the result is present-null (or unassigned, if `status.assigned` is
/// false). Otherwise the datum must coerce into `D`.
pub fn build<D: Domain>(datum: Datum, status: Status) -> Result<Nullable<D>> {
    if status.null {
        return Ok(Nullable::with_status(D::zero(), status));
    }
    let value = D::from_datum(datum)
        .map_err(|actual| ValueError::mismatch(D::KIND, format!("{:?}", actual)))?;
    Ok(Nullable::with_status(value, status))
}

/// Build a value of the domain named by `kind`.
pub fn build_any(kind: Kind, datum: Datum, status: Status) -> Result<AnyNullable> {
    match kind {
        Kind::Text => build_into::<String>(datum, status),
        Kind::Int64 => build_into::<i64>(datum, status),
        Kind::Float64 => build_into::<f64>(datum, status),
        Kind::Bool => build_into::<bool>(datum, status),
        Kind::Bytes => build_into::<Vec<u8>>(datum, status),
        Kind::Timestamp => build_into::<chrono::DateTime<chrono::FixedOffset>>(datum, status),
        Kind::Date => build_into::<chrono::NaiveDate>(datum, status),
    }
}

pub(crate) fn build_into<D: Domain>(datum: Datum, status: Status) -> Result<AnyNullable> {
    build::<D>(datum, status).map(D::into_any)
}
