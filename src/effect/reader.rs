//! Reader type - computations that read from a shared environment.
//!
//! A [`Reader`] wraps a function from an environment `R` to a value `A`.
//! Composing readers threads the same environment through every step, so
//! configuration can be injected once, at the edge, instead of being passed
//! through every call site.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     greeting: String,
//!     name: String,
//! }
//!
//! let greeting: Reader<Config, String> = Reader::asks(|config: Config| config.greeting);
//! let message = greeting.flat_map(|greeting| {
//!     Reader::asks(move |config: Config| format!("{greeting}, {}!", config.name))
//! });
//!
//! let config = Config {
//!     greeting: "Hello".to_string(),
//!     name: "World".to_string(),
//! };
//! assert_eq!(message.run(config), "Hello, World!");
//! ```

use std::rc::Rc;

/// A computation that produces an `A` from an environment `R`.
///
/// Cloning a reader is cheap: the underlying function is shared.
pub struct Reader<R, A> {
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R: 'static, A: 'static> Reader<R, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a reader from a function of the environment.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Creates a reader that ignores the environment and returns the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Reader;
    ///
    /// let reader: Reader<String, i32> = Reader::pure(42);
    /// assert_eq!(reader.run("ignored".to_string()), 42);
    /// ```
    #[inline]
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Creates a reader that extracts part of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|environment: String| environment.len());
    /// assert_eq!(length.run("abcd".to_string()), 4);
    /// ```
    #[inline]
    pub fn asks<F>(selector: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(selector)
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Runs the reader against an environment.
    #[inline]
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    // =========================================================================
    // Functor / Monad Operations
    // =========================================================================

    /// Transforms the produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask().fmap(|x| x * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Chains a dependent reader; both run against the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> =
    ///     Reader::ask().flat_map(|x: i32| Reader::asks(move |environment: i32| environment + x));
    /// assert_eq!(reader.run(21), 42);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        Reader::new(move |environment: R| {
            function(self.run(environment.clone())).run(environment)
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        R: Clone,
        B: 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Combines two readers using a function; both run against the same
    /// environment.
    #[inline]
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        R: Clone,
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Reader::new(move |environment: R| {
            function(self.run(environment.clone()), other.run(environment))
        })
    }

    // =========================================================================
    // Environment Operations
    // =========================================================================

    /// Runs this reader against a locally modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask().local(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn local<F>(self, modify: F) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| self.run(modify(environment)))
    }
}

impl<R: 'static> Reader<R, R> {
    /// The reader that returns the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Reader;
    ///
    /// assert_eq!(Reader::<i32, i32>::ask().run(42), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}
