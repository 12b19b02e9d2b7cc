//! Deferred computations and environment/output monads.
//!
//! This module provides the effect-shaped types of the library:
//!
//! - [`Task`]: a lazy, re-runnable description of a two-channel
//!   (failure/success) computation
//! - [`Reader`]: computations that read from an environment
//! - [`Writer`]: computations that accumulate output
//!
//! # Task
//!
//! A `Task` describes work but performs none of it until it is forked.
//! Forking the same task twice runs the underlying computation twice; a
//! task is a description, not a promise with a cached resolution.
//!
//! ```rust
//! use sumtag::effect::Task;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//!
//! let task: Task<String, i32> = Task::new(move |_reject, resolve| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     resolve(42);
//! });
//!
//! // Nothing has run yet.
//! assert_eq!(runs.load(Ordering::SeqCst), 0);
//!
//! task.fork(|_error| {}, |value| assert_eq!(value, 42));
//! task.fork(|_error| {}, |value| assert_eq!(value, 42));
//! assert_eq!(runs.load(Ordering::SeqCst), 2);
//! ```

mod reader;
mod task;
mod writer;

pub use reader::Reader;
pub use task::{Continuation, Task};
pub use writer::Writer;
