//! Null propagation through indirections and std containers inside records.

use std::collections::HashMap;
use std::thread;

use tristate::types::{Float64, Int64, Text};

tristate::record! {
    #[derive(Debug)]
    pub struct Geo {
        pub lat: Float64,
        pub lng: Float64,
    }
}

tristate::record! {
    #[derive(Debug)]
    pub struct Place {
        pub label: Text,
        pub geo: Box<Geo>,
        pub alias: Option<Geo>,
        pub scores: [Int64; 2],
        pub meta: HashMap<String, Int64>,
        pub count: u32,
    }
}

#[test]
fn test_propagation_through_box_option_array_and_map() {
    let place: Place = tristate::from_str("null").unwrap();
    assert!(place.label.is_null());
    assert!(place.geo.lat.is_null() && place.geo.lng.is_null());
    let alias = place.alias.as_ref().unwrap();
    assert!(alias.lat.is_null());
    assert!(place.scores.iter().all(|s| s.is_unassigned()));
    assert!(place.meta.is_empty());
    assert_eq!(place.count, 0);
}

#[test]
fn test_direct_null_on_option_is_none() {
    let place: Place = tristate::from_str(r#"{"alias": null, "count": 3}"#).unwrap();
    assert!(place.alias.is_none());
    assert_eq!(place.count, 3);
}

#[test]
fn test_direct_null_on_box_propagates() {
    let place: Place = tristate::from_str(r#"{"geo": null, "label": "home"}"#).unwrap();
    assert!(place.geo.lat.is_null());
    assert_eq!(place.label.as_str(), "home");
}

#[test]
fn test_null_on_primitive_resets() {
    let place: Place = tristate::from_str(r#"{"count": null, "scores": [1, null]}"#).unwrap();
    assert_eq!(place.count, 0);
    assert_eq!(place.scores[0], Int64::new(1));
    assert!(place.scores[1].is_null());
}

#[test]
fn test_concurrent_decodes_are_independent() {
    tristate::init();
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            thread::spawn(move || {
                let body = if i % 2 == 0 {
                    format!(r#"{{"label": "p{}", "geo": null, "count": {}}}"#, i, i)
                } else {
                    format!(r#"{{"label": null, "geo": {{"lat": {}}}, "count": {}}}"#, i, i)
                };
                (0..50)
                    .map(|_| tristate::from_str::<Place>(&body).unwrap())
                    .last()
                    .map(|place| (i, place))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let (i, place) = handle.join().unwrap();
        assert_eq!(place.count, i);
        if i % 2 == 0 {
            assert_eq!(place.label.as_str(), format!("p{}", i));
            assert!(place.geo.lat.is_null() && place.geo.lng.is_null());
        } else {
            assert!(place.label.is_null());
            assert_eq!(*place.geo.lat.value(), f64::from(i));
            assert!(place.geo.lng.is_unassigned());
        }
    }
}
