//! Writer type - computations that accumulate output alongside a value.
//!
//! A [`Writer`] pairs a value with an output accumulated through a
//! [`Monoid`]: chaining writers combines their outputs with
//! [`Semigroup::combine`](crate::typeclass::Semigroup::combine), in
//! chaining order, without any mutable logging state.
//!
//! # Examples
//!
//! ```rust
//! use sumtag::effect::Writer;
//!
//! fn halve(x: i32) -> Writer<Vec<String>, i32> {
//!     Writer::new(x / 2, vec![format!("halved {x}")])
//! }
//!
//! let (value, log) = Writer::pure(20).flat_map(halve).flat_map(halve).run();
//! assert_eq!(value, 5);
//! assert_eq!(log, vec!["halved 20".to_string(), "halved 10".to_string()]);
//! ```

use crate::typeclass::Monoid;

/// A value paired with monoidal output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Writer<W, A> {
    value: A,
    output: W,
}

impl<W: Monoid, A> Writer<W, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a writer from a value and its output.
    #[inline]
    pub const fn new(value: A, output: W) -> Self {
        Self { value, output }
    }

    /// Wraps a value with empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::pure(42);
    /// assert_eq!(writer.run(), (42, vec![]));
    /// ```
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::new(value, W::empty())
    }

    // =========================================================================
    // Deconstruction
    // =========================================================================

    /// Splits the writer into its value and accumulated output.
    #[inline]
    pub fn run(self) -> (A, W) {
        (self.value, self.output)
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn value_ref(&self) -> &A {
        &self.value
    }

    /// Returns a reference to the accumulated output.
    #[inline]
    pub const fn output_ref(&self) -> &W {
        &self.output
    }

    // =========================================================================
    // Functor / Monad Operations
    // =========================================================================

    /// Transforms the value, leaving the output untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Writer;
    ///
    /// let writer = Writer::new(21, vec!["seed".to_string()]).fmap(|x| x * 2);
    /// assert_eq!(writer.run(), (42, vec!["seed".to_string()]));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.value), self.output)
    }

    /// Chains a dependent writer, combining the outputs in chaining order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Writer;
    ///
    /// let writer = Writer::new(1, vec!["first".to_string()])
    ///     .flat_map(|x| Writer::new(x + 1, vec!["second".to_string()]));
    /// assert_eq!(
    ///     writer.run(),
    ///     (2, vec!["first".to_string(), "second".to_string()])
    /// );
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.value);
        Writer::new(next.value, self.output.combine(next.output))
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.flat_map(function)
    }

    /// Combines two writers using a function, concatenating the outputs.
    #[inline]
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(
            function(self.value, other.value),
            self.output.combine(other.output),
        )
    }

    // =========================================================================
    // Output Operations
    // =========================================================================

    /// Exposes the accumulated output alongside the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Writer;
    ///
    /// let writer = Writer::new(1, vec!["entry".to_string()]).listen();
    /// assert_eq!(
    ///     writer.run(),
    ///     ((1, vec!["entry".to_string()]), vec!["entry".to_string()])
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        Writer::new((self.value, self.output.clone()), self.output)
    }

    /// Rewrites the accumulated output, leaving the value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Writer;
    ///
    /// let writer = Writer::new(1, vec!["keep".to_string(), "drop".to_string()])
    ///     .censor(|mut output| {
    ///         output.truncate(1);
    ///         output
    ///     });
    /// assert_eq!(writer.run(), (1, vec!["keep".to_string()]));
    /// ```
    #[inline]
    #[must_use]
    pub fn censor<F>(self, function: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(self.value, function(self.output))
    }
}

impl<W: Monoid> Writer<W, ()> {
    /// Records output without producing a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Writer;
    ///
    /// let writer = Writer::tell(vec!["logged".to_string()])
    ///     .flat_map(|()| Writer::new(42, vec![]));
    /// assert_eq!(writer.run(), (42, vec!["logged".to_string()]));
    /// ```
    #[inline]
    pub fn tell(output: W) -> Self {
        Self::new((), output)
    }
}
