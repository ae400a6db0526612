//! Leaf enumeration for storage mappings.
//!
//! A storage layer maps each assigned leaf to a column mutation: present-null
//! clears the column, present-value writes it, unassigned leaves are skipped.

use tristate_core::{codec, AnyNullable, TriState};

use crate::error::Result;
use crate::path::FieldPath;
use crate::shape::Shape;

/// One tri-state leaf, rebuilt as a standalone value.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    /// Where the leaf sits in the record
    pub path: FieldPath,
    /// The leaf's value and state
    pub value: AnyNullable,
}

/// Call `visit` for every tri-state leaf beneath `record`
pub fn visit_leaves<T, F>(record: &T, mut visit: F)
where
    T: Shape,
    F: FnMut(&FieldPath, &dyn TriState),
{
    let mut path = FieldPath::root();
    record.walk(&mut path, &mut visit);
}

/// Every tri-state leaf beneath `record`, rebuilt through the dynamic factory.
pub fn leaves<T: Shape>(record: &T) -> Result<Vec<Leaf>> {
    let registry = codec::install();
    let mut out = Vec::new();
    let mut failure = None;
    visit_leaves(record, |path, leaf| {
        if failure.is_some() {
            return;
        }
        match registry.build(leaf.kind(), leaf.datum(), leaf.status()) {
            Ok(value) => out.push(Leaf {
                path: path.clone(),
                value,
            }),
            Err(e) => failure = Some(e),
        }
    });
    match failure {
        Some(e) => Err(e.into()),
        None => Ok(out),
    }
}

/// Only the leaves that were present in the payload
pub fn assigned_leaves<T: Shape>(record: &T) -> Result<Vec<Leaf>> {
    let mut all = leaves(record)?;
    all.retain(|leaf| leaf.value.is_assigned());
    Ok(all)
}
