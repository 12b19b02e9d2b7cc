//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup equipped with an identity element `empty` that
//! leaves other values unchanged when combined with them.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumtag::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine("x".to_string()), "x");
//! ```

use super::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy, in addition to the [`Semigroup`] laws:
///
/// ## Left Identity
///
/// For all `a`: `T::empty().combine(a) == a`
///
/// ## Right Identity
///
/// For all `a`: `a.combine(T::empty()) == a`
///
/// # Examples
///
/// ```rust
/// use sumtag::typeclass::{Monoid, Semigroup};
///
/// let combined = Vec::<i32>::empty().combine(vec![1, 2]);
/// assert_eq!(combined, vec![1, 2]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element of the combine operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), String::new());
    /// assert_eq!(Vec::<i32>::empty(), Vec::<i32>::new());
    /// ```
    #[must_use]
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity.
    ///
    /// Unlike [`Semigroup::combine_all`], an empty iterator yields `empty()`
    /// rather than `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::typeclass::Monoid;
    ///
    /// let words = vec!["a".to_string(), "b".to_string()];
    /// assert_eq!(String::concat_all(words), "ab");
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::concat_all(empty), "");
    /// ```
    #[must_use]
    fn concat_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Semigroup> Monoid for Option<A> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}
