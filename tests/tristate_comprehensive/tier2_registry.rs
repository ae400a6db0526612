//! Codec registry and dynamic factory through the public surface.

use std::thread;

use tristate::types::{AnyNullable, Datum, Int64, Kind, Status, Text, TriState, ValueError};

#[test]
fn test_init_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| tristate::init() as *const _ as usize))
        .collect();
    let first = tristate::init() as *const _ as usize;
    for h in handles {
        assert_eq!(h.join().unwrap(), first);
    }
}

#[test]
fn test_factory_through_registry() {
    let registry = tristate::init();
    let v = registry
        .build(Kind::Int64, Datum::from(12u32), Status::PRESENT)
        .unwrap();
    assert_eq!(v, AnyNullable::Int64(Int64::new(12)));
    assert_eq!(v.native_type(), "i64");
}

#[test]
fn test_factory_null_flag_discards_value() {
    let registry = tristate::init();
    let v = registry
        .build(Kind::Text, Datum::from(3.5), Status::NULL)
        .unwrap();
    assert_eq!(v, AnyNullable::Text(Text::null()));
}

#[test]
fn test_factory_errors() {
    let registry = tristate::init();
    let err = registry
        .build(Kind::Bool, Datum::from("yes"), Status::PRESENT)
        .unwrap_err();
    assert!(matches!(err, ValueError::DomainMismatch { expected: Kind::Bool, .. }));

    let err = registry
        .build_named("Uuid", Datum::from("x"), Status::PRESENT)
        .unwrap_err();
    assert!(matches!(err, ValueError::UnsupportedDescriptor { .. }));
}

#[test]
fn test_registry_decode_by_descriptor() {
    let registry = tristate::init();
    for kind in Kind::ALL {
        let v = registry.decode(kind, b"null").unwrap();
        assert_eq!(v.kind(), kind);
        assert!(v.is_null());
        assert_eq!(registry.encode(&v).unwrap(), "null");
    }
}
