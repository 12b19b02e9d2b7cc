//! Fundamental combinators for function composition.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`Placeholder`] / [`__`]: the hole marker consumed by
//!   [`partial!`](crate::partial)

/// Returns the value unchanged.
///
/// The unit element of function composition: `compose!(identity, f)` and
/// `compose!(f, identity)` are both equivalent to `f`.
///
/// # Examples
///
/// ```rust
/// use sumtag::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```rust
/// use sumtag::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) == f(a, b)`. Useful for
/// partial application when the second argument is the one to fix.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
///
/// # Examples
///
/// ```rust
/// use sumtag::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert_eq!(flipped(2.0, 10.0), 5.0);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Placeholder marker type for partial application.
///
/// Used by the [`partial!`](crate::partial) macro, which matches `__` as a
/// literal token at the call site. A dedicated unit type keeps the hole
/// marker distinguishable from every real argument value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// Do NOT import this when using [`partial!`](crate::partial): the macro
/// matches `__` as a literal token, and an imported binding would shadow
/// it. It exists for programmatic uses only.
///
/// Named with a double underscore because `macro_rules!` cannot match a
/// single `_` as a literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
