//! Algebraic container types.
//!
//! Every container in this module is defined through the ADT factory
//! ([`tag!`](crate::tag) / [`union_type!`](crate::union_type)) and then
//! equipped with its functor/applicative/monad operations by hand:
//!
//! - [`Maybe`]: an optional value (`Nothing` | `Just`)
//! - [`Either`]: a value that is one of two types (`Left` | `Right`)
//! - [`Validation`]: an error-accumulating result (`Failure` | `Success`)
//! - [`Pair`]: a tagged two-element product
//!
//! # Examples
//!
//! ## Short-circuiting with Maybe
//!
//! ```rust
//! use sumtag::control::Maybe;
//!
//! let result = Maybe::Just(4)
//!     .fmap(|x| x * 10)
//!     .flat_map(|x| if x > 20 { Maybe::Just(x) } else { Maybe::Nothing });
//! assert_eq!(result, Maybe::Just(40));
//! ```
//!
//! ## Accumulating with Validation
//!
//! ```rust
//! use sumtag::control::Validation;
//!
//! let name: Validation<Vec<String>, &str> =
//!     Validation::Failure(vec!["name is empty".to_string()]);
//! let age: Validation<Vec<String>, i32> =
//!     Validation::Failure(vec!["age is negative".to_string()]);
//!
//! let combined = name.map2(age, |name, age| format!("{name}: {age}"));
//! assert_eq!(
//!     combined,
//!     Validation::Failure(vec![
//!         "name is empty".to_string(),
//!         "age is negative".to_string(),
//!     ])
//! );
//! ```

mod either;
mod maybe;
mod pair;
mod validation;

pub use either::Either;
pub use maybe::Maybe;
pub use pair::Pair;
pub use validation::Validation;
