//! Algebraic type classes used by the container types.
//!
//! This module provides the two algebraic structures the containers rely on:
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! [`Validation`](crate::control::Validation) uses `Semigroup` to accumulate
//! failures; [`Writer`](crate::effect::Writer) uses `Monoid` to accumulate
//! output across sequenced computations.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::typeclass::{Monoid, Semigroup};
//!
//! // String concatenation
//! let greeting = String::from("Hello, ").combine(String::from("World!"));
//! assert_eq!(greeting, "Hello, World!");
//!
//! // Vec concatenation with identity
//! let combined = Vec::<i32>::empty().combine(vec![1, 2]).combine(vec![3]);
//! assert_eq!(combined, vec![1, 2, 3]);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
