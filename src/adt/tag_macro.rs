//! The `tag!` macro for defining named product types.
//!
//! This module provides the [`tag!`] macro which defines a single tagged
//! record type: a struct whose values carry a stable string tag equal to the
//! type name, constructed positionally from its declared fields.

/// Defines a named product type with a stable tag.
///
/// The macro accepts a struct declaration whose fields are listed as
/// `name: Type` pairs, and generates:
///
/// - the struct itself, with private fields,
/// - `new(...)` taking the declared fields positionally, in declared order,
/// - `TYPE_NAME` and `tag()`, both equal to the type name,
/// - one borrowing accessor per declared field,
/// - a [`Display`](core::fmt::Display) rendering of the form
///   `TypeName(field1, field2, ...)`.
///
/// A zero-field declaration (`struct Name;`) produces a unit struct with no
/// constructor: the struct itself is the ready-made singleton value, and its
/// rendering is the bare type name with no parentheses.
///
/// # Type Requirements
///
/// Every field type must implement [`Display`](core::fmt::Display) so the
/// rendering can be generated. Generic parameters receive that bound on the
/// generated `Display` implementation only.
///
/// # Examples
///
/// ## A concrete record
///
/// ```rust
/// use sumtag::tag;
///
/// tag! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub struct Coordinate { latitude: f64, longitude: f64 }
/// }
///
/// let place = Coordinate::new(59.9, 10.7);
/// assert_eq!(place.tag(), "Coordinate");
/// assert_eq!(place.to_string(), "Coordinate(59.9, 10.7)");
/// assert_eq!(*place.latitude(), 59.9);
/// ```
///
/// ## A generic record
///
/// ```rust
/// use sumtag::tag;
///
/// tag! {
///     #[derive(Clone, Debug, PartialEq)]
///     pub struct Labelled<A> { label: String, value: A }
/// }
///
/// let labelled = Labelled::new("answer".to_string(), 42);
/// assert_eq!(labelled.to_string(), "Labelled(answer, 42)");
/// ```
///
/// ## A zero-field tag
///
/// ```rust
/// use sumtag::tag;
///
/// tag! {
///     #[derive(Clone, Copy, Debug, PartialEq, Eq)]
///     pub struct EndOfStream;
/// }
///
/// // The unit struct is the value; there is nothing to construct.
/// let marker = EndOfStream;
/// assert_eq!(marker.tag(), "EndOfStream");
/// assert_eq!(marker.to_string(), "EndOfStream");
/// ```
#[macro_export]
macro_rules! tag {
    // Zero-field form: the unit struct itself is the eager singleton value.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $name {
            /// The tag carried by every value of this type.
            $vis const TYPE_NAME: &'static str = ::core::stringify!($name);

            /// Returns this type's tag.
            #[inline]
            #[must_use]
            $vis const fn tag(&self) -> &'static str {
                Self::TYPE_NAME
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(Self::TYPE_NAME)
            }
        }
    };

    // Field form: a named record with a positional constructor.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$($generic:ident),+ $(,)?>)? {
            $($field:ident : $field_type:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name $(<$($generic),+>)? {
            $($field: $field_type,)+
        }

        impl $(<$($generic),+>)? $name $(<$($generic),+>)? {
            /// The tag carried by every value of this type.
            $vis const TYPE_NAME: &'static str = ::core::stringify!($name);

            /// Constructs a value from the declared fields, in declared order.
            #[must_use]
            $vis fn new($($field: $field_type),+) -> Self {
                Self { $($field),+ }
            }

            /// Returns this type's tag.
            #[inline]
            #[must_use]
            $vis const fn tag(&self) -> &'static str {
                Self::TYPE_NAME
            }

            $(
                #[doc = ::core::concat!(
                    "Returns a reference to the `",
                    ::core::stringify!($field),
                    "` field."
                )]
                #[inline]
                $vis const fn $field(&self) -> &$field_type {
                    &self.$field
                }
            )+
        }

        impl $(<$($generic: ::core::fmt::Display),+>)? ::core::fmt::Display
            for $name $(<$($generic),+>)?
        {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let rendered_fields: ::std::vec::Vec<::std::string::String> =
                    ::std::vec![$(self.$field.to_string()),+];
                ::core::write!(
                    formatter,
                    "{}({})",
                    Self::TYPE_NAME,
                    rendered_fields.join(", ")
                )
            }
        }
    };
}
