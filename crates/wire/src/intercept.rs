//! The null interceptor.

use serde::de::{self, Deserialize, Deserializer};

use crate::shape::Shape;

/// Decodes a `T`, routing a `null` token to [`Shape::from_null`] instead of
/// `T`'s own decoder.
///
/// Peeking for `null` consumes exactly that one token, so decoding resumes
/// at the next sibling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intercept<T>(pub T);

impl<T> Intercept<T> {
    /// Unwrap the decoded value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T: Shape> Deserialize<'de> for Intercept<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Present<T>>::deserialize(deserializer)? {
            Some(Present(value)) => Ok(Intercept(value)),
            None => {
                tracing::trace!(
                    target: "tristate::wire",
                    destination = std::any::type_name::<T>(),
                    "null intercepted"
                );
                T::from_null().map(Intercept).map_err(de::Error::custom)
            }
        }
    }
}

/// A non-null value decoded with [`Shape::deserialize_present`].
pub(crate) struct Present<T>(pub(crate) T);

impl<T> Present<T> {
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T: Shape> Deserialize<'de> for Present<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize_present(deserializer).map(Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tristate_core::{Int64, Text};

    #[test]
    fn test_null_routes_to_shape() {
        let v: Intercept<Vec<Int64>> = serde_json::from_str("null").unwrap();
        assert!(v.into_inner().is_empty());
        let v: Intercept<Text> = serde_json::from_str("null").unwrap();
        assert_eq!(v.0, Text::null());
    }

    #[test]
    fn test_non_null_uses_own_decoder() {
        let v: Intercept<Vec<Int64>> = serde_json::from_str("[1,null]").unwrap();
        assert_eq!(v.0, vec![Int64::new(1), Int64::null()]);
    }

    #[test]
    fn test_null_element_inside_nested_sequence() {
        let v: Intercept<Vec<Vec<Int64>>> = serde_json::from_str("[[1], null, [null]]").unwrap();
        assert_eq!(
            v.0,
            vec![vec![Int64::new(1)], vec![], vec![Int64::null()]]
        );
    }

    #[test]
    fn test_null_map_value_empties_inner_sequence() {
        let v: Intercept<HashMap<String, Vec<Int64>>> =
            serde_json::from_str(r#"{"a": null, "b": [2]}"#).unwrap();
        assert!(v.0["a"].is_empty());
        assert_eq!(v.0["b"], vec![Int64::new(2)]);
    }

    #[test]
    fn test_fixed_array_length_is_checked() {
        let v: Intercept<[Int64; 2]> = serde_json::from_str("[1, null]").unwrap();
        assert_eq!(v.0, [Int64::new(1), Int64::null()]);
        assert!(serde_json::from_str::<Intercept<[Int64; 2]>>("[1]").is_err());
    }

    #[test]
    fn test_option_element_null_is_none() {
        let v: Intercept<Vec<Option<Vec<u8>>>> = serde_json::from_str("[null, [1]]").unwrap();
        assert_eq!(v.0, vec![None, Some(vec![1])]);
    }

    #[test]
    fn test_primitive_null_resets() {
        let v: Intercept<String> = serde_json::from_str("null").unwrap();
        assert_eq!(v.0, "");
    }
}
