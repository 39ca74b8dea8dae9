/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The `shape!` macro that model crates describe their structures with.

/// Define a structure shape from its member table.
///
/// ```
/// smithy_types::shape! {
///     /// A numeric range.
///     pub struct DoubleRange = "com.amazonaws.rds#DoubleRange" {
///         /// The minimum value in the range.
///         from: f64 = "From";
///         /// The maximum value in the range.
///         to: f64 = "To";
///     }
/// }
///
/// let range = DoubleRange::builder().from(1.0).build();
/// assert_eq!(range.from(), Some(1.0));
/// assert_eq!(range.to_string(), "{From: 1.0,}");
/// ```
///
/// Each member is written `name: Type = "WireName";`. Two modifiers exist:
/// - `name: list Type = "WireName";` stores a `Vec<Type>`. The fluent builder method
///   appends one item and `extend_<name>` appends many; neither replaces what was there.
/// - `name: sensitive Type = "WireName";` redacts the value from `Debug` and `Display`.
///
/// The expansion is an immutable struct with a getter per member, a `<Name>Builder`,
/// structural `Eq` (doubles compare by bit pattern, so every shape equals itself), a `Hash`
/// consistent with it, a derive-style `Debug`, and a diagnostic `Display` that lists present
/// members in declaration order.
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $id:literal {
            $($body:tt)*
        }
    ) => {
        $crate::shape!(@munch [$(#[$meta])*] $name $id [] $($body)*);
    };

    (@munch [$($head:tt)*] $name:ident $id:literal [$($done:tt)*]
        $(#[doc = $doc:literal])* $field:ident : list $item:ty = $label:literal ; $($rest:tt)*
    ) => {
        $crate::shape!(@munch [$($head)*] $name $id
            [$($done)* { list [$($doc)*] $field [Vec<$item>] [$item] $label false }]
            $($rest)*
        );
    };

    (@munch [$($head:tt)*] $name:ident $id:literal [$($done:tt)*]
        $(#[doc = $doc:literal])* $field:ident : sensitive $ty:ty = $label:literal ; $($rest:tt)*
    ) => {
        $crate::shape!(@munch [$($head)*] $name $id
            [$($done)* { plain [$($doc)*] $field [$ty] [$ty] $label true }]
            $($rest)*
        );
    };

    (@munch [$($head:tt)*] $name:ident $id:literal [$($done:tt)*]
        $(#[doc = $doc:literal])* $field:ident : $ty:ty = $label:literal ; $($rest:tt)*
    ) => {
        $crate::shape!(@munch [$($head)*] $name $id
            [$($done)* { plain [$($doc)*] $field [$ty] [$ty] $label false }]
            $($rest)*
        );
    };

    (@munch [$(#[$meta:meta])*] $name:ident $id:literal [$({
        $kind:ident [$($doc:literal)*] $field:ident [$store:ty] [$item:ty] $label:literal $sensitive:tt
    })*]) => {
        $crate::__private::paste! {
            $(#[$meta])*
            #[derive(Clone, Default)]
            pub struct $name {
                $(
                    $(#[doc = $doc])*
                    $field: ::std::option::Option<$store>,
                )*
            }

            impl $name {
                $(
                    $(#[doc = $doc])*
                    pub fn $field(&self) -> ::std::option::Option<<$store as $crate::shape::MemberValue>::Ref<'_>> {
                        self.$field
                            .as_ref()
                            .map(|value| $crate::shape::MemberValue::member_ref(value))
                    }
                )*

                #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
                pub fn builder() -> [<$name Builder>] {
                    ::std::default::Default::default()
                }

                /// Structural hash over every member in declaration order.
                ///
                /// Absent members contribute `0`; equal values always hash equally.
                pub fn shape_hash(&self) -> i32 {
                    let mut hash: i32 = 1;
                    $(
                        hash = hash.wrapping_mul(31).wrapping_add(
                            self.$field
                                .as_ref()
                                .map_or(0, $crate::shape::MemberValue::hash_member),
                        );
                    )*
                    hash
                }
            }

            #[doc = concat!("A builder for [`", stringify!($name), "`].")]
            #[derive(Clone, Default)]
            pub struct [<$name Builder>] {
                $(
                    $field: ::std::option::Option<$store>,
                )*
            }

            impl [<$name Builder>] {
                $(
                    $crate::shape!(@setters $kind [$($doc)*] $field [$store] [$item]);
                )*

                #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
                pub fn build(self) -> $name {
                    $name {
                        $(
                            $field: self.$field,
                        )*
                    }
                }
            }

            impl ::std::convert::From<[<$name Builder>]> for $name {
                fn from(builder: [<$name Builder>]) -> Self {
                    builder.build()
                }
            }

            $crate::shape!(@debug $name [$($field $sensitive)*]);
            $crate::shape!(@debug [<$name Builder>] [$($field $sensitive)*]);
            $crate::shape!(@eq $name [$($field)*]);
            $crate::shape!(@eq [<$name Builder>] [$($field)*]);

            impl ::std::fmt::Display for $name {
                #[allow(unused_assignments)]
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    const MEMBERS: usize = <[&str]>::len(&[$(stringify!($field)),*]);
                    let mut position = 0_usize;
                    f.write_str("{")?;
                    $(
                        position += 1;
                        if let ::std::option::Option::Some(value) = &self.$field {
                            f.write_str($label)?;
                            f.write_str(": ")?;
                            if $sensitive {
                                f.write_str($crate::shape::SENSITIVE_REDACTED)?;
                            } else {
                                $crate::shape::MemberValue::fmt_member(value, f)?;
                            }
                            if position < MEMBERS {
                                f.write_str(",")?;
                            }
                        }
                    )*
                    f.write_str("}")
                }
            }

            impl ::std::hash::Hash for $name {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    state.write_i32(self.shape_hash());
                }
            }

            impl $crate::shape::MemberValue for $name {
                const SHAPE_TYPE: $crate::schema::ShapeType = $crate::schema::ShapeType::Structure;
                type Ref<'a> = &'a Self;

                fn member_ref(&self) -> &Self {
                    self
                }

                fn eq_member(&self, other: &Self) -> bool {
                    self == other
                }

                fn hash_member(&self) -> i32 {
                    self.shape_hash()
                }

                fn fmt_member(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }

            impl $crate::schema::StructureShape for $name {
                fn schema() -> &'static $crate::schema::StructureSchema {
                    static SCHEMA: $crate::schema::StructureSchema = $crate::schema::StructureSchema::new(
                        $crate::schema::ShapeId::from_static($id),
                        &[
                            $(
                                $crate::schema::MemberSchema {
                                    name: $label,
                                    field: stringify!($field),
                                    target: <$store as $crate::shape::MemberValue>::SHAPE_TYPE,
                                    sensitive: $sensitive,
                                },
                            )*
                        ],
                    );
                    &SCHEMA
                }
            }

            #[cfg(feature = "serde-serialize")]
            impl $crate::__private::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::Serializer,
                {
                    use $crate::__private::serde::ser::SerializeStruct;
                    let mut state = serializer
                        .serialize_struct(stringify!($name), <[&str]>::len(&[$(stringify!($field)),*]))?;
                    $(
                        match &self.$field {
                            ::std::option::Option::Some(value) if !$sensitive => {
                                state.serialize_field($label, value)?
                            }
                            _ => state.skip_field($label)?,
                        }
                    )*
                    state.end()
                }
            }
        }
    };

    (@setters plain [$($doc:literal)*] $field:ident [$store:ty] [$item:ty]) => {
        $crate::__private::paste! {
            $(#[doc = $doc])*
            pub fn $field(mut self, input: impl ::std::convert::Into<$store>) -> Self {
                self.$field = ::std::option::Option::Some(input.into());
                self
            }

            $(#[doc = $doc])*
            pub fn [<set_ $field>](mut self, input: ::std::option::Option<$store>) -> Self {
                self.$field = input;
                self
            }

            $(#[doc = $doc])*
            pub fn [<get_ $field>](&self) -> &::std::option::Option<$store> {
                &self.$field
            }
        }
    };

    (@setters list [$($doc:literal)*] $field:ident [$store:ty] [$item:ty]) => {
        $crate::__private::paste! {
            #[doc = concat!("Appends an item to `", stringify!($field), "`.")]
            ///
            #[doc = concat!("To override the contents of this collection use [`set_", stringify!($field), "`](Self::set_", stringify!($field), ").")]
            ///
            $(#[doc = $doc])*
            pub fn $field(mut self, input: impl ::std::convert::Into<$item>) -> Self {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .push(input.into());
                self
            }

            #[doc = concat!("Appends every item to `", stringify!($field), "`, in order.")]
            pub fn [<extend_ $field>]<I>(mut self, inputs: I) -> Self
            where
                I: ::std::iter::IntoIterator,
                I::Item: ::std::convert::Into<$item>,
            {
                let inputs = inputs.into_iter();
                self.$field
                    .get_or_insert_with(|| ::std::vec::Vec::with_capacity(inputs.size_hint().0))
                    .extend(inputs.map(::std::convert::Into::into));
                self
            }

            $(#[doc = $doc])*
            pub fn [<set_ $field>](mut self, input: ::std::option::Option<$store>) -> Self {
                self.$field = input;
                self
            }

            $(#[doc = $doc])*
            pub fn [<get_ $field>](&self) -> &::std::option::Option<$store> {
                &self.$field
            }
        }
    };

    (@eq $name:ty [$($field:ident)*]) => {
        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(
                    && match (&self.$field, &other.$field) {
                        (::std::option::Option::Some(a), ::std::option::Option::Some(b)) => {
                            $crate::shape::MemberValue::eq_member(a, b)
                        }
                        (::std::option::Option::None, ::std::option::Option::None) => true,
                        _ => false,
                    }
                )*
            }
        }

        impl ::std::cmp::Eq for $name {}
    };

    (@debug $name:ty [$($field:ident $sensitive:tt)*]) => {
        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut formatter = f.debug_struct(stringify!($name));
                $(
                    if $sensitive {
                        formatter.field(stringify!($field), &$crate::shape::SENSITIVE_REDACTED);
                    } else {
                        formatter.field(stringify!($field), &self.$field);
                    }
                )*
                formatter.finish()
            }
        }
    };
}
