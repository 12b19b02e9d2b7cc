//! The `pipe_k!` and `compose_k!` macros for Kleisli composition.
//!
//! A Kleisli arrow is a function returning a monadic container
//! (`A -> M<B>`). Plain composition cannot chain them because the output is
//! wrapped; these macros compose through `flat_map` instead, so the
//! short-circuiting of the underlying container is preserved across the
//! whole chain.
//!
//! The macros are duck-typed: they work with any type carrying a
//! `flat_map` method of the usual shape (`Maybe`, `Either`, `Validation`'s
//! `Either` form, `Task`, `Writer`, `Option`, `Result`, ...).

/// Composes container-returning functions from left to right.
///
/// `pipe_k!(f, g, h)(x)` is equivalent to
/// `f(x).flat_map(g).flat_map(h)`.
///
/// # Examples
///
/// ```rust
/// use sumtag::control::Maybe;
/// use sumtag::pipe_k;
///
/// fn parse(input: &str) -> Maybe<i32> {
///     input.parse().map_or(Maybe::Nothing, Maybe::Just)
/// }
///
/// fn halve(x: i32) -> Maybe<i32> {
///     if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing }
/// }
///
/// let pipeline = pipe_k!(parse, halve);
/// assert_eq!(pipeline("42"), Maybe::Just(21));
/// assert_eq!(pipeline("43"), Maybe::Nothing);
/// assert_eq!(pipeline("oops"), Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! pipe_k {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        move |input| {
            let chained = first(input);
            $(let chained = chained.flat_map($remaining_functions);)+
            chained
        }
    }};
}

/// Composes container-returning functions from right to left.
///
/// `compose_k!(f, g, h)(x)` is equivalent to
/// `h(x).flat_map(g).flat_map(f)`, mirroring the right-to-left convention
/// of [`compose!`](crate::compose!).
///
/// # Examples
///
/// ```rust
/// use sumtag::control::Either;
/// use sumtag::compose_k;
///
/// fn positive(x: i32) -> Either<String, i32> {
///     if x > 0 { Either::Right(x) } else { Either::Left("not positive".to_string()) }
/// }
///
/// fn small(x: i32) -> Either<String, i32> {
///     if x < 100 { Either::Right(x) } else { Either::Left("too large".to_string()) }
/// }
///
/// let check = compose_k!(small, positive);
/// assert_eq!(check(42), Either::Right(42));
/// assert_eq!(check(-1), Either::Left("not positive".to_string()));
/// ```
#[macro_export]
macro_rules! compose_k {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose_k!($($remaining_functions),+);
        move |input| inner_composed(input).flat_map(outer)
    }};
}
