//! The `union_type!` macro for defining tagged sum types.
//!
//! This module provides the [`union_type!`] macro which defines a named
//! union of variants: a Rust enum whose variants carry stable string tags,
//! a membership check over the declared variant set, per-variant predicates,
//! and a total case-analysis operation.

/// Defines a named sum type whose variants carry stable tags.
///
/// The macro accepts an enum declaration whose variant fields are listed as
/// `name: Type` pairs, and generates:
///
/// - the enum itself. Variants declared with fields become tuple variants,
///   so `Name::Variant` is a constructor function taking the declared fields
///   positionally. Variants declared without fields become unit variants, so
///   `Name::Nullary` is a ready-made value, no construction required;
/// - `TYPE_NAME`, the union's own name;
/// - `TAGS`, the variant tags in declaration order;
/// - `tag()`, returning the tag of the variant a value was constructed from;
/// - `is_member(tag)`, checking a tag against the declared variant set;
/// - one `is_<variant>` predicate per variant;
/// - `cata(...)`, case analysis taking one handler per variant in
///   declaration order. The handler matching the value's own tag is invoked
///   with that variant's fields as positional arguments; the other handlers
///   are never invoked. A missing or extra handler is a compile error;
/// - a [`Display`](core::fmt::Display) rendering `Tag(field1, ...)`, with
///   the parenthesized list omitted for unit variants.
///
/// # Type Requirements
///
/// Every field type must implement [`Display`](core::fmt::Display) so the
/// rendering can be generated. Generic parameters receive that bound on the
/// generated `Display` implementation only.
///
/// # Examples
///
/// ## A request lifecycle union
///
/// ```rust
/// use sumtag::union_type;
///
/// union_type! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub enum RemoteData {
///         NotAsked,
///         Loading,
///         Failure(reason: String),
///         Success(body: String),
///     }
/// }
///
/// // Nullary variants are values, field-carrying variants are constructors.
/// let idle = RemoteData::NotAsked;
/// let loaded = RemoteData::Success("ok".to_string());
///
/// assert_eq!(idle.tag(), "NotAsked");
/// assert_eq!(loaded.to_string(), "Success(ok)");
/// assert!(RemoteData::is_member("Loading"));
/// assert!(!RemoteData::is_member("Cancelled"));
///
/// let label = loaded.cata(
///     || "idle".to_string(),
///     || "loading".to_string(),
///     |reason| format!("failed: {reason}"),
///     |body| format!("loaded: {body}"),
/// );
/// assert_eq!(label, "loaded: ok");
/// ```
///
/// ## A generic union
///
/// ```rust
/// use sumtag::union_type;
///
/// union_type! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub enum Tree<A> {
///         Leaf,
///         Node(value: A),
///     }
/// }
///
/// assert!(Tree::<i32>::Leaf.is_leaf());
/// assert!(Tree::Node(3).is_node());
/// ```
#[macro_export]
macro_rules! union_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(<$($generic:ident),+ $(,)?>)? {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(( $($field:ident : $field_type:ty),+ $(,)? ))?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name $(<$($generic),+>)? {
            $(
                $(#[$variant_meta])*
                $variant $(( $($field_type),+ ))?,
            )+
        }

        $crate::paste::paste! {
            impl $(<$($generic),+>)? $name $(<$($generic),+>)? {
                /// The name of this union type.
                $vis const TYPE_NAME: &'static str = ::core::stringify!($name);

                /// The variant tags of this union, in declaration order.
                $vis const TAGS: &'static [&'static str] =
                    &[$(::core::stringify!($variant)),+];

                /// Returns the tag of the variant this value was constructed from.
                #[inline]
                #[must_use]
                $vis const fn tag(&self) -> &'static str {
                    match self {
                        $(Self::$variant { .. } => ::core::stringify!($variant),)+
                    }
                }

                /// Returns `true` if `tag` names a variant of this union.
                #[must_use]
                $vis fn is_member(tag: &str) -> bool {
                    Self::TAGS.iter().any(|candidate| *candidate == tag)
                }

                $(
                    #[doc = ::core::concat!(
                        "Returns `true` if this value is the `",
                        ::core::stringify!($variant),
                        "` variant."
                    )]
                    #[inline]
                    #[must_use]
                    $vis const fn [<is_ $variant:snake>](&self) -> bool {
                        ::core::matches!(self, Self::$variant { .. })
                    }
                )+

                /// Case analysis over every variant of this union.
                ///
                /// Takes one handler per variant, in declaration order. The
                /// handler whose position matches the value's own variant is
                /// invoked with that variant's fields as positional
                /// arguments, in declared order; its return value becomes
                /// the result. The remaining handlers are never invoked.
                $vis fn cata<CataResult>(
                    self,
                    $(
                        [<on_ $variant:snake>]:
                            impl ::core::ops::FnOnce($($($field_type),+)?) -> CataResult,
                    )+
                ) -> CataResult {
                    match self {
                        $(
                            Self::$variant $(( $($field),+ ))? =>
                                [<on_ $variant:snake>]($($($field),+)?),
                        )+
                    }
                }
            }
        }

        impl $(<$($generic: ::core::fmt::Display),+>)? ::core::fmt::Display
            for $name $(<$($generic),+>)?
        {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(
                        Self::$variant $(( $($field),+ ))? => {
                            formatter.write_str(::core::stringify!($variant))?;
                            $(
                                let rendered_fields: ::std::vec::Vec<::std::string::String> =
                                    ::std::vec![$($field.to_string()),+];
                                ::core::write!(formatter, "({})", rendered_fields.join(", "))?;
                            )?
                            ::core::result::Result::Ok(())
                        }
                    )+
                }
            }
        }
    };
}
