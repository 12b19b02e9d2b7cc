//! The `pipe!` macro for left-to-right value threading.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the transformations in the order they are written.
///
/// # Relationship with `compose!`
///
/// `pipe!(x, f, g, h)` equals `compose!(h, g, f)(x)`. Where
/// [`compose!`](crate::compose!) builds a new function, `pipe!` applies
/// immediately.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each step only needs [`FnOnce`], so consuming closures work.
///
/// # Examples
///
/// ```rust
/// use sumtag::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> 9 -> 18 -> 19
/// assert_eq!(pipe!(3, square, double, add_one), 19);
/// ```
///
/// ```rust
/// use sumtag::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, to_string, get_length), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Bare value: nothing to apply.
    ($value:expr) => {
        $value
    };

    // pipe!(x, f) = f(x)
    ($value:expr, $function:expr $(,)?) => {{
        let function = $function;
        function($value)
    }};

    // pipe!(x, f, g, ...) = pipe!(f(x), g, ...)
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let function = $function;
        $crate::pipe!(function($value), $($remaining_functions),+)
    }};
}
