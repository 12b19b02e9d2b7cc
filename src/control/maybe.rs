//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<A>` type, representing a value that is
//! either present (`Just(a)`) or absent (`Nothing`). It mirrors the standard
//! library's `Option` but is defined through the tagged-union facility, so it
//! carries a stable tag, a `Display` rendering and a total `cata` operation
//! like every other union in this crate.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::control::Maybe;
//!
//! // Nullary variants are values: no construction required.
//! let absent: Maybe<i32> = Maybe::Nothing;
//! let present = Maybe::Just(42);
//!
//! assert_eq!(absent.tag(), "Nothing");
//! assert_eq!(present.to_string(), "Just(42)");
//!
//! // Case analysis
//! let doubled = present.cata(|| 0, |x| x * 2);
//! assert_eq!(doubled, 84);
//! ```

use crate::union_type;

union_type! {
    /// An optional value: either `Nothing` or `Just(value)`.
    ///
    /// `Maybe` is right-biased in the usual sense: `fmap`, `flat_map` and
    /// `apply` act on the `Just` value and leave `Nothing` untouched.
    ///
    /// # Laws
    ///
    /// `Maybe` satisfies the monad laws:
    ///
    /// 1. **Left Identity**: `Maybe::pure(a).flat_map(f) == f(a)`
    /// 2. **Right Identity**: `m.flat_map(Maybe::pure) == m`
    /// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum Maybe<A> {
        /// The absent case. A ready-made value, shared by every use site.
        Nothing,
        /// The present case, holding one value.
        Just(value: A),
    }
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in the `Just` variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::pure(7), Maybe::Just(7));
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Just(value)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, or the given fallback if `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).get_or_else(0), 3);
    /// assert_eq!(Maybe::<i32>::Nothing.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, fallback: A) -> A {
        match self {
            Self::Nothing => fallback,
            Self::Just(value) => value,
        }
    }

    /// Returns the contained value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).unwrap_just(), 42);
    /// ```
    #[inline]
    pub fn unwrap_just(self) -> A {
        match self {
            Self::Nothing => panic!("called `Maybe::unwrap_just()` on a `Nothing` value"),
            Self::Just(value) => value,
        }
    }

    /// Returns a reference to the contained value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).just_ref(), Some(&5));
    /// assert_eq!(Maybe::<i32>::Nothing.just_ref(), None);
    /// ```
    #[inline]
    pub const fn just_ref(&self) -> Option<&A> {
        match self {
            Self::Nothing => None,
            Self::Just(value) => Some(value),
        }
    }

    // =========================================================================
    // Functor / Applicative / Monad Operations
    // =========================================================================

    /// Applies a function to the contained value, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(21).fmap(|x| x * 2), Maybe::Just(42));
    /// assert_eq!(Maybe::<i32>::Nothing.fmap(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(function(value)),
        }
    }

    /// Applies a Maybe-wrapped function to this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// let function = Maybe::Just(|x: i32| x + 1);
    /// assert_eq!(Maybe::Just(41).apply(function), Maybe::Just(42));
    /// ```
    #[inline]
    pub fn apply<B, F>(self, function_maybe: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (function_maybe, self) {
            (Maybe::Just(function), Self::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Combines two Maybe values using a function.
    ///
    /// Returns `Nothing` if either side is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).map2(Maybe::Just(3), |a, b| a + b), Maybe::Just(5));
    /// assert_eq!(Maybe::Just(2).map2(Maybe::<i32>::Nothing, |a, b| a + b), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Chains a computation that itself may produce `Nothing`.
    ///
    /// This is the `bind` operation from Monad; `Nothing` short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing };
    /// assert_eq!(Maybe::Just(8).flat_map(half), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).flat_map(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => function(value),
        }
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(4).filter(|x| x % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).filter(|x| x % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Returns this maybe if present, otherwise the given alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).or_else(Maybe::Just(2)), Maybe::Just(1));
    /// assert_eq!(Maybe::Nothing.or_else(Maybe::Just(2)), Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Nothing => alternative,
            Self::Just(value) => Self::Just(value),
        }
    }
}

// =============================================================================
// Option Conversions
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(a)` becomes `Just(a)`, and `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Just(a)` becomes `Some(a)`, and `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Nothing => None,
            Maybe::Just(value) => Some(value),
        }
    }
}
