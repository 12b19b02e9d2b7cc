//! Tagged-type definition macros.
//!
//! This module provides the two halves of the tagged-union facility:
//!
//! - [`tag!`]: defines a named product type (a single tagged record)
//! - [`union_type!`]: defines a named sum type (a family of tagged variants)
//!
//! # Overview
//!
//! Every type defined through these macros carries a *tag*: a stable,
//! human-readable string equal to the type or variant name. Values render
//! through `Display` as `Tag(field1, field2, ...)`, with the parenthesized
//! list omitted entirely for zero-field types.
//!
//! Sum types additionally get:
//!
//! - the declared variant tags in declaration order ([`TAGS`]),
//! - a membership check over that set (`is_member`),
//! - one `is_<variant>` predicate per variant,
//! - a total case-analysis operation (`cata`) taking one handler per
//!   variant in declaration order.
//!
//! # Nullary variants are values
//!
//! A variant declared without fields becomes a unit variant: `Parent::Nullary`
//! is a ready-made value, while `Parent::Variant` with fields is a constructor
//! function. Code that writes `RemoteData::Loading` gets a value, not a call.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::union_type;
//!
//! union_type! {
//!     #[derive(Clone, Debug, PartialEq)]
//!     pub enum Shape {
//!         Point,
//!         Circle(radius: f64),
//!         Rectangle(width: f64, height: f64),
//!     }
//! }
//!
//! assert_eq!(Shape::Point.tag(), "Point");
//! assert_eq!(Shape::Circle(2.0).to_string(), "Circle(2)");
//! assert_eq!(Shape::TAGS, &["Point", "Circle", "Rectangle"]);
//!
//! let area = Shape::Rectangle(3.0, 4.0).cata(
//!     || 0.0,
//!     |radius| std::f64::consts::PI * radius * radius,
//!     |width, height| width * height,
//! );
//! assert_eq!(area, 12.0);
//! ```
//!
//! [`TAGS`]: crate::union_type

mod tag_macro;
mod union_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::tag;
pub use crate::union_type;
