//! Destinations the null-propagating decoder can fill.
//!
//! When a `null` token meets a destination that is not itself a tri-state
//! leaf, every tri-state leaf reachable beneath it becomes present-null and
//! every other field is reset to its default. [`Shape`] encodes that rule
//! per type: records generated by [`record!`](crate::record) recurse into
//! their fields, sequences and maps empty out, scalars reset, and anything
//! else is handed to its own decoder with a synthetic `null`.
//!
//! Containers decode their elements through [`Intercept`], so a `null`
//! element or map value is absorbed at any nesting depth.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde::{Serialize, Serializer};
use tristate_core::literal;
use tristate_core::{Domain, Nullable, TriState};

use crate::error::Result;
use crate::intercept::{Intercept, Present};
use crate::path::FieldPath;

/// Visitor invoked for each tri-state leaf with its path
pub type LeafVisitor<'a> = dyn FnMut(&FieldPath, &dyn TriState) + 'a;

/// A decode destination that knows how to absorb a `null`.
pub trait Shape: Default {
    /// The value a destination takes when the payload holds `null` for it.
    fn from_null() -> Result<Self> {
        let mut value = Self::default();
        value.propagate_null()?;
        Ok(value)
    }

    /// Apply null propagation to this destination in place.
    fn propagate_null(&mut self) -> Result<()>;

    /// Decode a value whose next token is not `null`.
    ///
    /// Containers override this to decode their elements through
    /// [`Intercept`].
    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>;

    /// Visit every tri-state leaf beneath this destination.
    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        let _ = (path, visit);
    }
}

/// Decode `T` from a synthetic `null` token with its own decoder.
pub fn decode_null<T: DeserializeOwned>() -> Result<T> {
    Ok(T::deserialize(serde_json::Value::Null)?)
}

impl<D: Domain> Shape for Nullable<D> {
    fn propagate_null(&mut self) -> Result<()> {
        *self = Nullable::decode_literal(literal::NULL)?;
        Ok(())
    }

    fn deserialize_present<'de, De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        Nullable::deserialize(deserializer)
    }

    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        visit(path, self);
    }
}

macro_rules! reset_to_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shape for $ty {
                fn propagate_null(&mut self) -> Result<()> {
                    *self = <$ty>::default();
                    Ok(())
                }

                fn deserialize_present<'de, D>(
                    deserializer: D,
                ) -> std::result::Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    <$ty>::deserialize(deserializer)
                }
            }
        )*
    };
}

reset_to_default!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Implement [`Shape`] for local types that have no tri-state leaves.
///
/// A `null` is handed to the type's own `Deserialize` impl as a synthetic
/// token, so a type that rejects `null` still fails the decode. For foreign
/// types use [`Plain`].
///
/// ```
/// #[derive(Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// struct Marker;
///
/// tristate_wire::shape_via_deserialize!(Marker);
///
/// let m: Marker = tristate_wire::from_str("null").unwrap();
/// assert_eq!(m, Marker);
/// ```
#[macro_export]
macro_rules! shape_via_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Shape for $ty {
                fn from_null() -> $crate::Result<Self> {
                    $crate::shape::decode_null::<$ty>()
                }

                fn propagate_null(&mut self) -> $crate::Result<()> {
                    *self = $crate::shape::decode_null::<$ty>()?;
                    ::std::result::Result::Ok(())
                }

                fn deserialize_present<'de, __D>(
                    deserializer: __D,
                ) -> ::std::result::Result<Self, __D::Error>
                where
                    __D: ::serde::Deserializer<'de>,
                {
                    <$ty as ::serde::Deserialize>::deserialize(deserializer)
                }
            }
        )*
    };
}

shape_via_deserialize!((), serde_json::Value);

/// A field decoded entirely by `T`'s own serde impls, including for `null`.
///
/// Use it for types with no tri-state leaves that have no [`Shape`] impl of
/// their own, such as `chrono::NaiveDate` or a tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plain<T>(pub T);

impl<T> Plain<T> {
    /// Unwrap the decoded value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Plain<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Plain<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Serialize> Serialize for Plain<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Plain<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Plain)
    }
}

impl<T: DeserializeOwned + Default> Shape for Plain<T> {
    fn from_null() -> Result<Self> {
        decode_null().map(Plain)
    }

    fn propagate_null(&mut self) -> Result<()> {
        self.0 = decode_null()?;
        Ok(())
    }

    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Plain)
    }
}

fn walk_indexed<'a, T, I>(items: I, path: &mut FieldPath, visit: &mut LeafVisitor<'_>)
where
    T: Shape + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        path.push_index(i);
        item.walk(path, visit);
        path.pop();
    }
}

fn walk_keyed<'a, K, V, I>(entries: I, path: &mut FieldPath, visit: &mut LeafVisitor<'_>)
where
    K: Display + 'a,
    V: Shape + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    for (key, value) in entries {
        path.push_key(key.to_string());
        value.walk(path, visit);
        path.pop();
    }
}

// Sequences collect through a Vec of intercepted elements.
macro_rules! sequence_shape {
    ($($seq:ident < T $(, $param:ident)* > where T: $($bound:path),*;)*) => {
        $(
            impl<T $(, $param)*> Shape for $seq<T $(, $param)*>
            where
                T: Shape $(+ $bound)*,
                $($param: BuildHasher + Default,)*
            {
                fn propagate_null(&mut self) -> Result<()> {
                    self.clear();
                    Ok(())
                }

                fn deserialize_present<'de, D>(
                    deserializer: D,
                ) -> std::result::Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let items = Vec::<Intercept<T>>::deserialize(deserializer)?;
                    Ok(items.into_iter().map(Intercept::into_inner).collect())
                }

                fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
                    walk_indexed(self.iter(), path, visit);
                }
            }
        )*
    };
}

sequence_shape! {
    Vec<T> where T: ;
    VecDeque<T> where T: ;
    HashSet<T, S> where T: Eq, Hash;
    BTreeSet<T> where T: Ord;
}

impl<T: Shape, const N: usize> Shape for [T; N]
where
    [T; N]: Default,
{
    fn propagate_null(&mut self) -> Result<()> {
        for item in self.iter_mut() {
            *item = T::default();
        }
        Ok(())
    }

    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Intercept<T>>::deserialize(deserializer)?;
        let len = items.len();
        let items: Vec<T> = items.into_iter().map(Intercept::into_inner).collect();
        items.try_into().map_err(|_| {
            let expected = format!("an array of length {}", N);
            de::Error::invalid_length(len, &expected.as_str())
        })
    }

    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        walk_indexed(self.iter(), path, visit);
    }
}

impl<K, V, S> Shape for HashMap<K, V, S>
where
    K: Display + Eq + Hash + DeserializeOwned,
    V: Shape,
    S: BuildHasher + Default,
{
    fn propagate_null(&mut self) -> Result<()> {
        self.clear();
        Ok(())
    }

    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = HashMap::<K, Intercept<V>, S>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|(k, v)| (k, v.into_inner())).collect())
    }

    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        walk_keyed(self, path, visit);
    }
}

impl<K, V> Shape for BTreeMap<K, V>
where
    K: Display + Ord + DeserializeOwned,
    V: Shape,
{
    fn propagate_null(&mut self) -> Result<()> {
        self.clear();
        Ok(())
    }

    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<K, Intercept<V>>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|(k, v)| (k, v.into_inner())).collect())
    }

    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        walk_keyed(self, path, visit);
    }
}

impl<T: Shape> Shape for Box<T> {
    fn from_null() -> Result<Self> {
        T::from_null().map(Box::new)
    }

    fn propagate_null(&mut self) -> Result<()> {
        (**self).propagate_null()
    }

    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize_present(deserializer).map(Box::new)
    }

    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        (**self).walk(path, visit);
    }
}

// `null` aimed straight at an Option is the Option's own business: None.
// Reached from an ancestor, the pointee is materialized and propagated into.
impl<T: Shape> Shape for Option<T> {
    fn from_null() -> Result<Self> {
        Ok(None)
    }

    fn propagate_null(&mut self) -> Result<()> {
        self.get_or_insert_with(T::default).propagate_null()
    }

    fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Present<T>>::deserialize(deserializer)?.map(Present::into_inner))
    }

    fn walk(&self, path: &mut FieldPath, visit: &mut LeafVisitor<'_>) {
        if let Some(inner) = self {
            inner.walk(path, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_core::{Int64, Text};

    #[test]
    fn test_leaf_becomes_null() {
        let mut v = Text::new("x".into());
        v.propagate_null().unwrap();
        assert_eq!(v, Text::null());
    }

    #[test]
    fn test_containers_empty_out() {
        let mut v = vec![Int64::new(1)];
        v.propagate_null().unwrap();
        assert!(v.is_empty());

        let mut m: BTreeMap<String, Int64> = BTreeMap::new();
        m.insert("k".into(), Int64::new(1));
        m.propagate_null().unwrap();
        assert!(m.is_empty());

        let mut d: VecDeque<Int64> = VecDeque::from(vec![Int64::new(1)]);
        d.propagate_null().unwrap();
        assert!(d.is_empty());

        let mut s: HashSet<u32> = [1, 2].into_iter().collect();
        s.propagate_null().unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_array_resets_elements() {
        let mut a = [Int64::new(1), Int64::null()];
        a.propagate_null().unwrap();
        assert_eq!(a, [Int64::unassigned(), Int64::unassigned()]);
    }

    #[test]
    fn test_scalars_reset() {
        let mut s = "x".to_string();
        s.propagate_null().unwrap();
        assert!(s.is_empty());
        let mut n = 5u32;
        n.propagate_null().unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_option_from_null_is_none() {
        assert_eq!(<Option<Text>>::from_null().unwrap(), None);
    }

    #[test]
    fn test_option_propagation_materializes() {
        let mut v: Option<Text> = None;
        v.propagate_null().unwrap();
        assert_eq!(v, Some(Text::null()));
    }

    #[test]
    fn test_box_from_null() {
        assert_eq!(*<Box<Int64>>::from_null().unwrap(), Int64::null());
    }

    #[test]
    fn test_json_value_takes_synthetic_null() {
        let mut v = serde_json::json!({"a": 1});
        v.propagate_null().unwrap();
        assert_eq!(v, serde_json::Value::Null);
    }

    #[test]
    fn test_plain_uses_own_decoder_for_null() {
        let v = <Plain<Option<u8>>>::from_null().unwrap();
        assert_eq!(v, Plain(None));

        let mut pair = Plain((1u8, 2u8));
        assert!(pair.propagate_null().is_err());
        assert_eq!(*pair, (1, 2));
    }

    #[test]
    fn test_walk_vec_paths() {
        let v = vec![Int64::new(1), Int64::null()];
        let mut seen = Vec::new();
        v.walk(&mut FieldPath::root().key("xs"), &mut |path, leaf| {
            seen.push((path.to_string(), leaf.is_null()));
        });
        assert_eq!(
            seen,
            vec![("xs[0]".to_string(), false), ("xs[1]".to_string(), true)]
        );
    }

    #[test]
    fn test_walk_map_paths() {
        let mut m: BTreeMap<String, Int64> = BTreeMap::new();
        m.insert("a".into(), Int64::null());
        let mut seen = Vec::new();
        m.walk(&mut FieldPath::root().key("m"), &mut |path, _| {
            seen.push(path.to_string());
        });
        assert_eq!(seen, vec!["m.a".to_string()]);
    }
}
