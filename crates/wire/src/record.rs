//! Code generation for aggregate records.

/// Declare a record whose decoding propagates `null` into its fields.
///
/// Expands to the struct (with `Default` and `serde::Serialize` derived), a
/// [`Shape`](crate::Shape) impl that recurses field by field, and a
/// `Deserialize` impl that wraps every field in an
/// [`Intercept`](crate::Intercept) so that a `null` in the payload is
/// absorbed by the field's `Shape` instead of failing. Fields missing from
/// the payload keep their default (unassigned for tri-state leaves).
///
/// Every field type must implement [`Shape`](crate::Shape); wrap foreign
/// types without one in [`Plain`](crate::Plain).
///
/// Field-level and container-level `#[serde(...)]` attributes apply to both
/// directions. Do not derive `Default` or add a container-level
/// `#[serde(default)]` yourself. Leaf paths reported by
/// [`Shape::walk`](crate::Shape::walk) use the Rust field names. The calling
/// crate must depend on `serde` directly.
///
/// ```
/// use tristate_core::{Int64, Text};
///
/// tristate_wire::record! {
///     #[derive(Debug, Clone, PartialEq)]
///     #[serde(rename_all = "camelCase")]
///     pub struct Address {
///         pub city_name: Text,
///         pub zip: Int64,
///     }
/// }
///
/// let a: Address = tristate_wire::from_str(r#"{"cityName":"Oslo"}"#).unwrap();
/// assert_eq!(a.city_name.as_str(), "Oslo");
/// assert!(a.zip.is_unassigned());
///
/// let a: Address = tristate_wire::from_str("null").unwrap();
/// assert!(a.city_name.is_null() && a.zip.is_null());
/// ```
#[macro_export]
macro_rules! record {
    // Sort container attributes: serde ones go to both generated structs.
    (@split [$($serde:tt)*] [$($other:tt)*] #[serde $($args:tt)*] $($rest:tt)*) => {
        $crate::record!(@split [$($serde)* #[serde $($args)*]] [$($other)*] $($rest)*);
    };
    (@split [$($serde:tt)*] [$($other:tt)*] #[$($attr:tt)*] $($rest:tt)*) => {
        $crate::record!(@split [$($serde)*] [$($other)* #[$($attr)*]] $($rest)*);
    };
    (
        @split [$($serde:tt)*] [$($other:tt)*]
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        #[derive(Default, ::serde::Serialize)]
        $($other)*
        $($serde)*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Shape for $name {
            fn propagate_null(&mut self) -> $crate::Result<()> {
                $crate::__private::trace_propagation(::std::stringify!($name));
                $( $crate::Shape::propagate_null(&mut self.$field)?; )*
                ::std::result::Result::Ok(())
            }

            fn deserialize_present<'de, __D>(
                deserializer: __D,
            ) -> ::std::result::Result<Self, __D::Error>
            where
                __D: ::serde::Deserializer<'de>,
            {
                <$name as ::serde::Deserialize>::deserialize(deserializer)
            }

            fn walk(
                &self,
                path: &mut $crate::FieldPath,
                visit: &mut $crate::LeafVisitor<'_>,
            ) {
                $(
                    path.push_key(::std::stringify!($field));
                    $crate::Shape::walk(&self.$field, path, visit);
                    path.pop();
                )*
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<__D>(deserializer: __D) -> ::std::result::Result<Self, __D::Error>
            where
                __D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                $($serde)*
                struct __Fields {
                    $(
                        $(#[$field_meta])*
                        #[serde(default)]
                        $field: $crate::Intercept<$ty>,
                    )*
                }

                match <::std::option::Option<__Fields> as ::serde::Deserialize>::deserialize(
                    deserializer,
                )? {
                    ::std::option::Option::Some(fields) => ::std::result::Result::Ok($name {
                        $( $field: fields.$field.into_inner(), )*
                    }),
                    ::std::option::Option::None => <$name as $crate::Shape>::from_null()
                        .map_err(<__D::Error as ::serde::de::Error>::custom),
                }
            }
        }
    };
    ($($input:tt)*) => {
        $crate::record!(@split [] [] $($input)*);
    };
}
