//! The `partial!` macro for partial function application.

/// Partially applies arguments to a function.
///
/// Use `__` (double underscore) as a placeholder for arguments that should
/// remain as parameters of the resulting function. The `__` is matched as a
/// literal token by the macro; do NOT import
/// [`compose::__`](crate::compose::__) at the call site.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)` (identity)
///
/// The same patterns apply to 3-argument functions.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`]: the partial function may be
///   called multiple times
/// - The original function must implement [`Fn`]
///
/// # Examples
///
/// ```rust
/// use sumtag::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// Fixing the second argument:
///
/// ```rust
/// use sumtag::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// Three-argument functions:
///
/// ```rust
/// use sumtag::partial;
///
/// fn format_greeting(greeting: &str, name: &str, punctuation: &str) -> String {
///     format!("{greeting}, {name}{punctuation}")
/// }
///
/// let exclaim = partial!(format_greeting, "Hello", __, "!");
/// assert_eq!(exclaim("Alice"), "Hello, Alice!");
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (placeholder patterns before expression patterns)
    // =========================================================================

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
}
