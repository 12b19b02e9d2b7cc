//! # sumtag
//!
//! Tagged unions, algebraic container types, and point-free combinators
//! for Rust.
//!
//! ## Overview
//!
//! This library provides the building blocks of everyday functional
//! programming:
//!
//! - **ADT macros**: [`tag!`] and [`union_type!`] define named product and
//!   sum types with stable tags, `Display` renderings and total case analysis
//! - **Containers**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Validation`](control::Validation), [`Pair`](control::Pair)
//! - **Effects**: [`Task`](effect::Task) for deferred two-channel
//!   computations, [`Reader`](effect::Reader), [`Writer`](effect::Writer)
//! - **Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`, `partial!`,
//!   `pipe_k!` macros and helper combinators
//! - **Type Classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid)
//!
//! ## Feature Flags
//!
//! - `adt`: The `tag!` and `union_type!` macros
//! - `typeclass`: Semigroup and Monoid traits
//! - `compose`: Function composition utilities
//! - `control`: Container types (Maybe, Either, Validation, Pair)
//! - `effect`: Task, Reader and Writer
//! - `async`: The Task-to-future bridge
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sumtag::union_type;
//!
//! union_type! {
//!     #[derive(Clone, Debug, PartialEq)]
//!     pub enum RemoteData {
//!         NotAsked,
//!         Loading,
//!         Failure(reason: String),
//!         Success(body: String),
//!     }
//! }
//!
//! let state = RemoteData::Success("ok".to_string());
//! let label = state.cata(
//!     || "not asked".to_string(),
//!     || "loading".to_string(),
//!     |reason| format!("failed: {reason}"),
//!     |body| format!("loaded: {body}"),
//! );
//! assert_eq!(label, "loaded: ok");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Re-exported for use inside macro expansions; not part of the public API.
#[doc(hidden)]
pub use paste;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sumtag::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "adt")]
pub mod adt;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
