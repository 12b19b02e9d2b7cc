//! Pair type - a tagged two-element product.
//!
//! This module provides `Pair<A, B>`, a named tuple defined through the
//! [`tag!`](crate::tag) facility: it carries the `"Pair"` tag and the
//! `Pair(first, second)` rendering, plus the usual bifunctor operations.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::control::Pair;
//!
//! let pair = Pair::new(1, "one".to_string());
//! assert_eq!(pair.tag(), "Pair");
//! assert_eq!(pair.to_string(), "Pair(1, one)");
//!
//! let swapped = pair.swap();
//! assert_eq!(*swapped.first(), "one".to_string());
//! ```

use crate::tag;

tag! {
    /// A two-element product with a stable tag.
    ///
    /// Construction is positional (`Pair::new(first, second)`); the fields
    /// are reachable through the borrowing accessors or [`Pair::into_parts`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Pair<A, B> { first: A, second: B }
}

impl<A, B> Pair<A, B> {
    // =========================================================================
    // Deconstruction
    // =========================================================================

    /// Splits the pair into its parts, in declared order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Pair;
    ///
    /// let (first, second) = Pair::new(1, 2).into_parts();
    /// assert_eq!((first, second), (1, 2));
    /// ```
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Pair;
    ///
    /// let pair = Pair::new(2, "x").map_first(|n| n * 10);
    /// assert_eq!(pair, Pair::new(20, "x"));
    /// ```
    #[inline]
    pub fn map_first<T, F>(self, function: F) -> Pair<T, B>
    where
        F: FnOnce(A) -> T,
    {
        Pair::new(function(self.first), self.second)
    }

    /// Applies a function to the second element.
    #[inline]
    pub fn map_second<T, F>(self, function: F) -> Pair<A, T>
    where
        F: FnOnce(B) -> T,
    {
        Pair::new(self.first, function(self.second))
    }

    /// Applies one function to each element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Pair;
    ///
    /// let pair = Pair::new(2, "abc").bimap(|n| n + 1, |s: &str| s.len());
    /// assert_eq!(pair, Pair::new(3, 3));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, first_function: F, second_function: G) -> Pair<T, U>
    where
        F: FnOnce(A) -> T,
        G: FnOnce(B) -> U,
    {
        Pair::new(first_function(self.first), second_function(self.second))
    }

    /// Collapses the pair by applying a binary function to both elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Pair;
    ///
    /// assert_eq!(Pair::new(3, 4).fold(|a, b| a * b), 12);
    /// ```
    #[inline]
    pub fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(A, B) -> T,
    {
        function(self.first, self.second)
    }

    /// Swaps the two elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Pair;
    ///
    /// assert_eq!(Pair::new(1, 2).swap(), Pair::new(2, 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }
}

// =============================================================================
// Tuple Conversions
// =============================================================================

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_parts()
    }
}
