//! Validation type - an error-accumulating result.
//!
//! This module provides `Validation<E, A>`: like `Either`, a value settles
//! on a failure or a success channel, but the applicative operations
//! *accumulate* failures instead of short-circuiting on the first one. The
//! failure type must be a [`Semigroup`] so independent failures can be
//! combined.
//!
//! # When to use which
//!
//! - `Either` / `Result`: dependent steps, stop at the first failure.
//! - `Validation`: independent checks, report every failure at once.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::control::Validation;
//!
//! fn check_name(name: &str) -> Validation<Vec<String>, String> {
//!     if name.is_empty() {
//!         Validation::Failure(vec!["name must not be empty".to_string()])
//!     } else {
//!         Validation::Success(name.to_string())
//!     }
//! }
//!
//! fn check_age(age: i32) -> Validation<Vec<String>, i32> {
//!     if age < 0 {
//!         Validation::Failure(vec!["age must not be negative".to_string()])
//!     } else {
//!         Validation::Success(age)
//!     }
//! }
//!
//! let valid = check_name("ada").map2(check_age(36), |name, age| (name, age));
//! assert_eq!(valid, Validation::Success(("ada".to_string(), 36)));
//!
//! let invalid = check_name("").map2(check_age(-1), |name, age| (name, age));
//! assert_eq!(
//!     invalid,
//!     Validation::Failure(vec![
//!         "name must not be empty".to_string(),
//!         "age must not be negative".to_string(),
//!     ])
//! );
//! ```

use crate::typeclass::Semigroup;
use crate::union_type;

use super::Either;

union_type! {
    /// An error-accumulating result: either `Failure(errors)` or
    /// `Success(value)`.
    ///
    /// The applicative operations (`apply`, `map2`..`map4`) combine the
    /// failures of every failing argument with [`Semigroup::combine`], in
    /// argument order. There is deliberately no `flat_map`: sequencing
    /// depends on earlier successes and cannot accumulate, so dependent
    /// pipelines should convert to [`Either`] first.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Validation<E, A> {
        /// The failure channel, holding accumulated errors.
        Failure(errors: E),
        /// The success channel, holding one value.
        Success(value: A),
    }
}

impl<E, A> Validation<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in the `Success` variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let validation: Validation<Vec<String>, i32> = Validation::pure(1);
    /// assert_eq!(validation, Validation::Success(1));
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Success(value)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<A>`, consuming the validation.
    #[inline]
    pub fn success(self) -> Option<A> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Converts into an `Option<E>`, consuming the validation.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Failure(errors) => Some(errors),
            Self::Success(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let validation: Validation<Vec<String>, i32> = Validation::Success(21);
    /// assert_eq!(validation.fmap(|x| x * 2), Validation::Success(42));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(errors),
            Self::Success(value) => Validation::Success(function(value)),
        }
    }

    /// Applies a function to the accumulated failures, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let validation: Validation<Vec<String>, i32> =
    ///     Validation::Failure(vec!["boom".to_string()]);
    /// assert_eq!(
    ///     validation.map_failure(|errors| errors.len()),
    ///     Validation::Failure(1)
    /// );
    /// ```
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Validation<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(function(errors)),
            Self::Success(value) => Validation::Success(value),
        }
    }

    // =========================================================================
    // Either Conversions
    // =========================================================================

    /// Converts to an `Either`, mapping `Failure` to `Left`.
    #[inline]
    pub fn to_either(self) -> Either<E, A> {
        match self {
            Self::Failure(errors) => Either::Left(errors),
            Self::Success(value) => Either::Right(value),
        }
    }

    /// Converts from an `Either`, mapping `Left` to `Failure`.
    #[inline]
    pub fn from_either(either: Either<E, A>) -> Self {
        match either {
            Either::Left(errors) => Self::Failure(errors),
            Either::Right(value) => Self::Success(value),
        }
    }
}

// =============================================================================
// Accumulating Applicative Operations
// =============================================================================

impl<E: Semigroup, A> Validation<E, A> {
    /// Applies a Validation-wrapped function to this value, accumulating
    /// failures from both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let value: Validation<Vec<String>, i32> = Validation::Success(41);
    /// let function: Validation<Vec<String>, _> = Validation::Success(|x: i32| x + 1);
    /// assert_eq!(value.apply(function), Validation::Success(42));
    /// ```
    pub fn apply<B, F>(self, function_validation: Validation<E, F>) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (function_validation, self) {
            (Validation::Success(function), Self::Success(value)) => {
                Validation::Success(function(value))
            }
            (Validation::Success(_), Self::Failure(errors))
            | (Validation::Failure(errors), Self::Success(_)) => Validation::Failure(errors),
            (Validation::Failure(function_errors), Self::Failure(value_errors)) => {
                Validation::Failure(function_errors.combine(value_errors))
            }
        }
    }

    /// Combines two validations using a function, accumulating failures.
    ///
    /// Failures are combined in argument order: this validation's errors
    /// come first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let first: Validation<Vec<i32>, i32> = Validation::Failure(vec![1]);
    /// let second: Validation<Vec<i32>, i32> = Validation::Failure(vec![2]);
    /// assert_eq!(
    ///     first.map2(second, |a, b| a + b),
    ///     Validation::Failure(vec![1, 2])
    /// );
    /// ```
    pub fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Validation::Success(b)) => Validation::Success(function(a, b)),
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
            (Self::Failure(first_errors), Validation::Failure(second_errors)) => {
                Validation::Failure(first_errors.combine(second_errors))
            }
        }
    }

    /// Combines three validations using a function, accumulating failures
    /// in argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let a: Validation<Vec<i32>, i32> = Validation::Success(1);
    /// let b: Validation<Vec<i32>, i32> = Validation::Success(2);
    /// let c: Validation<Vec<i32>, i32> = Validation::Success(3);
    /// assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Validation::Success(6));
    /// ```
    pub fn map3<B, C, D, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    /// Combines four validations using a function, accumulating failures
    /// in argument order.
    pub fn map4<B, C, D, T, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        fourth: Validation<E, D>,
        function: F,
    ) -> Validation<E, T>
    where
        F: FnOnce(A, B, C, D) -> T,
    {
        self.map3(second, third, |a, b, c| (a, b, c))
            .map2(fourth, |(a, b, c), d| function(a, b, c, d))
    }

    /// Combines every validation in an iterator, accumulating all failures.
    ///
    /// Succeeds with the collected values in input order when every element
    /// succeeds; fails with every failure combined, in input order,
    /// otherwise. An empty iterator succeeds with an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::control::Validation;
    ///
    /// let all_good: Vec<Validation<Vec<i32>, i32>> =
    ///     vec![Validation::Success(1), Validation::Success(2)];
    /// assert_eq!(Validation::combine_all(all_good), Validation::Success(vec![1, 2]));
    ///
    /// let mixed: Vec<Validation<Vec<i32>, i32>> =
    ///     vec![Validation::Failure(vec![1]), Validation::Success(2), Validation::Failure(vec![3])];
    /// assert_eq!(Validation::combine_all(mixed), Validation::Failure(vec![1, 3]));
    /// ```
    pub fn combine_all<I>(iterator: I) -> Validation<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Validation::Success(Vec::new()), |accumulated, next| {
                accumulated.map2(next, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}
