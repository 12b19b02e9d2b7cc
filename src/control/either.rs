//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, representing a value that
//! is either a `Left(L)` or a `Right(R)`. By convention `Left` carries the
//! failure channel and `Right` the success channel, and the chaining
//! operations are right-biased.
//!
//! `Either` is defined through the tagged-union facility, so it carries the
//! same tag, membership and `cata` machinery as every other union in this
//! crate. The std `Result` is the native member of the same family;
//! conversions in both directions are provided.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::control::Either;
//!
//! let success: Either<String, i32> = Either::Right(42);
//! let failure: Either<String, i32> = Either::Left("boom".to_string());
//!
//! assert_eq!(success.fmap(|x| x * 2), Either::Right(84));
//! assert_eq!(failure.tag(), "Left");
//!
//! // Case analysis in declaration order: Left first, then Right.
//! let rendered = Either::<String, i32>::Right(7).cata(
//!     |error| format!("error: {error}"),
//!     |value| format!("value: {value}"),
//! );
//! assert_eq!(rendered, "value: 7");
//! ```

use crate::union_type;

union_type! {
    /// A value that can be one of two types.
    ///
    /// By convention:
    /// - `Left` represents failure or the first alternative
    /// - `Right` represents success or the second alternative
    ///
    /// # Laws
    ///
    /// The right-biased operations satisfy the monad laws:
    ///
    /// 1. **Left Identity**: `Either::pure(a).flat_map(f) == f(a)`
    /// 2. **Right Identity**: `m.flat_map(Either::pure) == m`
    /// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum Either<L, R> {
        /// The left variant, conventionally the failure channel.
        Left(value: L),
        /// The right variant, conventionally the success channel.
        Right(value: R),
    }
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in the `Right` (success) variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let either: Either<String, i32> = Either::pure(42);
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    pub const fn pure(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fmap(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn fmap<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// Equivalent to `cata` with the handlers in the same order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation on the right (success) channel.
    ///
    /// `Left` values short-circuit: the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let parse = |s: &str| s.parse::<i32>()
    ///     .map_or(Either::Left("not a number".to_string()), Either::Right);
    ///
    /// let result: Either<String, i32> = Either::Right("42").flat_map(parse);
    /// assert_eq!(result, Either::Right(42));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Chains a computation on the left (failure) channel.
    ///
    /// The mirror of `flat_map`: `Right` values pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let failure: Either<String, i32> = Either::Left("boom".to_string());
    /// let recovered = failure.recover(|_| Either::<String, i32>::Right(0));
    /// assert_eq!(recovered, Either::Right(0));
    /// ```
    #[inline]
    pub fn recover<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
