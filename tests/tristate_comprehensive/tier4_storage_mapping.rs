//! Mapping decoded records onto column mutations.

use tristate::types::{AnyNullable, FieldPath, Int64, Text};

tristate::record! {
    #[derive(Debug)]
    pub struct Address {
        pub city: Text,
        pub zip: Int64,
    }
}

tristate::record! {
    #[derive(Debug)]
    pub struct UserPatch {
        pub name: Text,
        pub age: Int64,
        pub address: Address,
    }
}

fn path(s: &str) -> FieldPath {
    s.parse().unwrap()
}

#[test]
fn test_assigned_leaves_are_the_mutations() {
    let patch: UserPatch = tristate::from_str(r#"{"name": "Ada", "address": null}"#).unwrap();
    let leaves = tristate::assigned_leaves(&patch).unwrap();
    let got: Vec<(String, AnyNullable)> = leaves
        .into_iter()
        .map(|l| (l.path.to_string(), l.value))
        .collect();
    assert_eq!(
        got,
        vec![
            ("name".to_string(), AnyNullable::Text(Text::new("Ada".into()))),
            ("address.city".to_string(), AnyNullable::Text(Text::null())),
            ("address.zip".to_string(), AnyNullable::Int64(Int64::null())),
        ]
    );
}

#[test]
fn test_all_leaves_include_unassigned() {
    let patch: UserPatch = tristate::from_str("{}").unwrap();
    let leaves = tristate::leaves(&patch).unwrap();
    assert_eq!(leaves.len(), 4);
    assert_eq!(leaves[1].path, path("age"));
    assert!(leaves.iter().all(|l| !l.value.is_present()));
}

#[test]
fn test_leaf_paths_nest_under_parent() {
    let patch: UserPatch = tristate::from_str(r#"{"address": {"zip": 12345}}"#).unwrap();
    let leaves = tristate::assigned_leaves(&patch).unwrap();
    assert_eq!(leaves.len(), 1);
    assert!(path("address").is_ancestor_of(&leaves[0].path));
    assert_eq!(leaves[0].value, AnyNullable::Int64(Int64::new(12345)));
}
