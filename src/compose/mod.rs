//! Point-free combinators: composition, piping, currying and partial
//! application.
//!
//! This module provides the function-manipulation toolkit of the crate:
//!
//! - [`compose!`](crate::compose!): right-to-left function composition
//! - [`pipe!`](crate::pipe!): left-to-right value threading
//! - [`curry2!`](crate::curry2!)..[`curry4!`](crate::curry4!): currying
//! - [`partial!`](crate::partial!): partial application with the `__`
//!   placeholder
//! - [`compose_k!`](crate::compose_k!) / [`pipe_k!`](crate::pipe_k!):
//!   Kleisli composition through `flat_map`
//! - [`identity`], [`constant`], [`flip`]: the basic combinators
//!
//! # Examples
//!
//! ```rust
//! use sumtag::{compose, partial, pipe};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let add_ten = partial!(add, 10, __);
//! let composed = compose!(add_ten, double);
//! assert_eq!(composed(5), 20);
//!
//! let piped = pipe!(5, double, add_ten);
//! assert_eq!(piped, 20);
//! ```

mod compose_macro;
mod curry_macro;
mod kleisli_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity, Placeholder, __};
