//! Task type - a lazy two-channel computation.
//!
//! A [`Task`] wraps a producer function that, when forked, eventually calls
//! exactly one of two continuations: the rejection continuation with a
//! failure value, or the resolution continuation with a success value.
//! Construction performs no work; every [`Task::fork`] runs the producer
//! again from scratch.

use std::sync::Arc;

use parking_lot::Mutex;

/// A boxed callback invoked with the settled value of one channel.
pub type Continuation<T> = Box<dyn FnOnce(T) + Send>;

type ForkFunction<E, A> = dyn Fn(Continuation<E>, Continuation<A>) + Send + Sync;

/// A lazy, re-runnable description of a computation that settles on a
/// failure channel (`E`) or a success channel (`A`).
///
/// # Laziness
///
/// Nothing runs until [`Task::fork`] is called, and the transformation
/// methods (`fmap`, `flat_map`, `recover`, ...) only build a larger
/// description. Cloning a task clones the description, not a result.
///
/// # Settling
///
/// A well-behaved producer invokes exactly one continuation exactly once
/// per fork. The composite tasks built by this module guard their own
/// continuations so that a downstream observer is notified at most once
/// even when several upstream sources could settle.
///
/// # Examples
///
/// ```rust
/// use sumtag::effect::Task;
///
/// let task: Task<String, i32> = Task::pure(20)
///     .fmap(|x| x * 2)
///     .flat_map(|x| Task::pure(x + 2));
///
/// task.fork(
///     |error| panic!("unexpected rejection: {error}"),
///     |value| assert_eq!(value, 42),
/// );
/// ```
pub struct Task<E, A> {
    fork_function: Arc<ForkFunction<E, A>>,
}

impl<E, A> Clone for Task<E, A> {
    fn clone(&self) -> Self {
        Self {
            fork_function: Arc::clone(&self.fork_function),
        }
    }
}

impl<E, A> std::fmt::Debug for Task<E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("Task(<deferred computation>)")
    }
}

// Tasks cross thread boundaries when producers hand work to other threads.
static_assertions::assert_impl_all!(Task<String, i32>: Send, Sync, Clone);

/// Wraps a continuation so that concurrent or sequential settle attempts
/// collapse to the first one. The continuation is taken out of the guard
/// before it is invoked, so user callbacks never run under the lock.
fn guard<T>(continuation: Continuation<T>) -> Arc<Mutex<Option<Continuation<T>>>> {
    Arc::new(Mutex::new(Some(continuation)))
}

fn settle<T>(guarded: &Mutex<Option<Continuation<T>>>, value: T) {
    let continuation = guarded.lock().take();
    if let Some(continuation) = continuation {
        continuation(value);
    }
}

impl<E: 'static, A: 'static> Task<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a task from a producer function.
    ///
    /// The producer receives the rejection continuation first and the
    /// resolution continuation second, and must call exactly one of them
    /// exactly once. It runs once per [`Task::fork`], never at
    /// construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::new(|reject, resolve| {
    ///     if 1 + 1 == 2 {
    ///         resolve(42);
    ///     } else {
    ///         reject("arithmetic is broken".to_string());
    ///     }
    /// });
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(Continuation<E>, Continuation<A>) + Send + Sync + 'static,
    {
        Self {
            fork_function: Arc::new(producer),
        }
    }

    /// Creates a task that resolves with the given value on every fork.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::pure(42);
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |_reject, resolve| resolve(value.clone()))
    }

    /// Creates a task that rejects with the given error on every fork.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::reject("boom".to_string());
    /// task.fork(|error| assert_eq!(error, "boom"), |_| {});
    /// ```
    pub fn reject(error: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::new(move |reject, _resolve| reject(error.clone()))
    }

    /// Lifts a plain function into a task that resolves with its result.
    ///
    /// The function runs once per fork, at fork time. Capture the
    /// arguments in the closure:
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let base = 40;
    /// let task: Task<String, i32> = Task::lift(move || base + 2);
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn lift<F>(function: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self::new(move |_reject, resolve| resolve(function()))
    }

    /// Lifts a fallible function into a task, routing `Ok` to the success
    /// channel and `Err` to the failure channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<std::num::ParseIntError, i32> =
    ///     Task::lift_result(|| "42".parse::<i32>());
    /// task.fork(|error| panic!("{error}"), |value| assert_eq!(value, 42));
    /// ```
    pub fn lift_result<F>(function: F) -> Self
    where
        F: Fn() -> Result<A, E> + Send + Sync + 'static,
    {
        Self::new(move |reject, resolve| match function() {
            Ok(value) => resolve(value),
            Err(error) => reject(error),
        })
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Runs the task, sending the outcome to one of the two callbacks.
    ///
    /// Each call re-runs the underlying producer; a task is a description,
    /// not a memoized promise.
    pub fn fork<FE, FA>(&self, on_rejected: FE, on_resolved: FA)
    where
        FE: FnOnce(E) + Send + 'static,
        FA: FnOnce(A) + Send + 'static,
    {
        self.fork_boxed(Box::new(on_rejected), Box::new(on_resolved));
    }

    fn fork_boxed(&self, on_rejected: Continuation<E>, on_resolved: Continuation<A>) {
        (self.fork_function)(on_rejected, on_resolved);
    }

    // =========================================================================
    // Functor Operations
    // =========================================================================

    /// Transforms the success value; rejections pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::pure(21).fmap(|x| x * 2);
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Task<E, B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject_continuation, resolve_continuation| {
            let function = Arc::clone(&function);
            self.fork_boxed(
                reject_continuation,
                Box::new(move |value| resolve_continuation((*function)(value))),
            );
        })
    }

    /// Transforms the failure value; resolutions pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> =
    ///     Task::<i32, i32>::reject(7).map_rejected(|code| format!("error {code}"));
    /// task.fork(|error| assert_eq!(error, "error 7"), |_| {});
    /// ```
    pub fn map_rejected<T, F>(self, function: F) -> Task<T, A>
    where
        T: 'static,
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject_continuation, resolve_continuation| {
            let function = Arc::clone(&function);
            self.fork_boxed(
                Box::new(move |error| reject_continuation((*function)(error))),
                resolve_continuation,
            );
        })
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Chains a dependent task on the success channel.
    ///
    /// The function runs only when this task resolves; a rejection anywhere
    /// in the chain short-circuits the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> =
    ///     Task::pure(6).flat_map(|x| Task::pure(x * 7));
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<E, B>
    where
        B: 'static,
        F: Fn(A) -> Task<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject_continuation, resolve_continuation| {
            let function = Arc::clone(&function);
            // Either this task or the one produced by `function` may reject,
            // but never both: the guard lets both closures own a path to the
            // single rejection continuation.
            let shared_reject = guard(reject_continuation);
            let upstream_reject = Arc::clone(&shared_reject);
            self.fork_boxed(
                Box::new(move |error| settle(&upstream_reject, error)),
                Box::new(move |value| {
                    (*function)(value).fork_boxed(
                        Box::new(move |error| settle(&shared_reject, error)),
                        resolve_continuation,
                    );
                }),
            );
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    pub fn and_then<B, F>(self, function: F) -> Task<E, B>
    where
        B: 'static,
        F: Fn(A) -> Task<E, B> + Send + Sync + 'static,
    {
        self.flat_map(function)
    }

    /// Chains a recovery task on the failure channel.
    ///
    /// The mirror of [`Task::flat_map`]: resolutions pass through, and a
    /// rejection is replaced by the outcome of the recovery task. The
    /// failure type may change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> = Task::<i32, i32>::reject(7)
    ///     .recover(|code| Task::pure(code * 6));
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn recover<T, F>(self, function: F) -> Task<T, A>
    where
        T: 'static,
        F: Fn(E) -> Task<T, A> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject_continuation, resolve_continuation| {
            let function = Arc::clone(&function);
            let shared_resolve = guard(resolve_continuation);
            let upstream_resolve = Arc::clone(&shared_resolve);
            self.fork_boxed(
                Box::new(move |error| {
                    (*function)(error).fork_boxed(
                        reject_continuation,
                        Box::new(move |value| settle(&shared_resolve, value)),
                    );
                }),
                Box::new(move |value| settle(&upstream_resolve, value)),
            );
        })
    }

    /// Runs this task, discards its success value, then runs `next`.
    ///
    /// Rejections from either task short-circuit.
    pub fn then<B>(self, next: Task<E, B>) -> Task<E, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    // =========================================================================
    // Applicative Operations
    // =========================================================================

    /// Combines two tasks sequentially using a function.
    ///
    /// This task runs first, then `other`; the first rejection wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let task: Task<String, i32> =
    ///     Task::pure(40).map2(Task::pure(2), |a, b| a + b);
    /// task.fork(|_| {}, |value| assert_eq!(value, 42));
    /// ```
    pub fn map2<B, C, F>(self, other: Task<E, B>, function: F) -> Task<E, C>
    where
        A: Send,
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject_continuation, resolve_continuation| {
            let function = Arc::clone(&function);
            let other = other.clone();
            let shared_reject = guard(reject_continuation);
            let upstream_reject = Arc::clone(&shared_reject);
            self.fork_boxed(
                Box::new(move |error| settle(&upstream_reject, error)),
                Box::new(move |first_value| {
                    other.fork_boxed(
                        Box::new(move |error| settle(&shared_reject, error)),
                        Box::new(move |second_value| {
                            resolve_continuation((*function)(first_value, second_value));
                        }),
                    );
                }),
            );
        })
    }

    /// Pairs the results of two tasks, run sequentially.
    pub fn product<B>(self, other: Task<E, B>) -> Task<E, (A, B)>
    where
        A: Send,
        B: Send + 'static,
    {
        self.map2(other, |first_value, second_value| {
            (first_value, second_value)
        })
    }

    /// Applies a task-wrapped function to this task's success value.
    ///
    /// The function task runs first, then this task.
    pub fn apply<B, F>(self, function_task: Task<E, F>) -> Task<E, B>
    where
        B: 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Task::new(move |reject_continuation, resolve_continuation| {
            let value_task = self.clone();
            let shared_reject = guard(reject_continuation);
            let upstream_reject = Arc::clone(&shared_reject);
            function_task.fork_boxed(
                Box::new(move |error| settle(&upstream_reject, error)),
                Box::new(move |function| {
                    value_task.fork_boxed(
                        Box::new(move |error| settle(&shared_reject, error)),
                        Box::new(move |value| resolve_continuation(function(value))),
                    );
                }),
            );
        })
    }
}

// =============================================================================
// Parallel Composition
// =============================================================================

/// Per-fork bookkeeping for [`Task::parallel`].
struct ParallelState<E, A> {
    slots: Vec<Option<A>>,
    remaining: usize,
    settled: bool,
    reject: Option<Continuation<E>>,
    resolve: Option<Continuation<Vec<A>>>,
}

impl<E, A> Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Runs every task concurrently and collects the results in input
    /// order.
    ///
    /// The combined task resolves with a `Vec` of every success value,
    /// positioned by input index regardless of completion order. The first
    /// rejection to settle wins: it is forwarded once, and every later
    /// outcome is discarded. An empty input resolves immediately with an
    /// empty `Vec`.
    ///
    /// Concurrency comes from the producers themselves (a producer that
    /// hands work to another thread runs concurrently; a synchronous
    /// producer runs inline during the loop). `parallel` never spawns
    /// threads of its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// let tasks: Vec<Task<String, i32>> =
    ///     vec![Task::pure(1), Task::pure(2), Task::pure(3)];
    /// Task::parallel(tasks).fork(|_| {}, |values| assert_eq!(values, vec![1, 2, 3]));
    /// ```
    pub fn parallel(tasks: Vec<Self>) -> Task<E, Vec<A>> {
        Task::new(move |reject_continuation, resolve_continuation| {
            if tasks.is_empty() {
                resolve_continuation(Vec::new());
                return;
            }

            let state = Arc::new(Mutex::new(ParallelState {
                slots: (0..tasks.len()).map(|_| None).collect(),
                remaining: tasks.len(),
                settled: false,
                reject: Some(reject_continuation),
                resolve: Some(resolve_continuation),
            }));

            for (index, task) in tasks.iter().enumerate() {
                let failure_state = Arc::clone(&state);
                let success_state = Arc::clone(&state);
                task.fork(
                    move |error| {
                        // Take the continuation under the lock, invoke it
                        // outside: user callbacks must not run while other
                        // branches are trying to settle.
                        let continuation = {
                            let mut guard = failure_state.lock();
                            if guard.settled {
                                None
                            } else {
                                guard.settled = true;
                                guard.reject.take()
                            }
                        };
                        if let Some(reject) = continuation {
                            reject(error);
                        }
                    },
                    move |value| {
                        let completion = {
                            let mut guard = success_state.lock();
                            if guard.settled {
                                None
                            } else {
                                guard.slots[index] = Some(value);
                                guard.remaining -= 1;
                                if guard.remaining == 0 {
                                    guard.settled = true;
                                    let values = guard
                                        .slots
                                        .drain(..)
                                        .map(|slot| {
                                            slot.expect("every slot is filled at completion")
                                        })
                                        .collect::<Vec<A>>();
                                    guard.resolve.take().map(|resolve| (resolve, values))
                                } else {
                                    None
                                }
                            }
                        };
                        if let Some((resolve, values)) = completion {
                            resolve(values);
                        }
                    },
                );
            }
        })
    }
}

// =============================================================================
// Future Bridge
// =============================================================================

#[cfg(feature = "async")]
impl<E, A> Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Runs the task once and awaits its outcome as a `Result`.
    ///
    /// Resolution becomes `Ok`, rejection becomes `Err`. Each call forks
    /// the task again.
    ///
    /// # Panics
    ///
    /// Panics if the underlying producer drops both continuations without
    /// calling either, which violates the [`Task::new`] contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtag::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let task: Task<String, i32> = Task::pure(42);
    /// assert_eq!(task.run_async().await, Ok(42));
    /// # });
    /// ```
    pub async fn run_async(self) -> Result<A, E> {
        let (sender, receiver) = futures::channel::oneshot::channel::<Result<A, E>>();
        let sender = Arc::new(Mutex::new(Some(sender)));
        let failure_sender = Arc::clone(&sender);
        self.fork(
            move |error| {
                if let Some(sender) = failure_sender.lock().take() {
                    // The receiver may have been dropped; that cancellation
                    // is not an error here.
                    let _ = sender.send(Err(error));
                }
            },
            move |value| {
                if let Some(sender) = sender.lock().take() {
                    let _ = sender.send(Ok(value));
                }
            },
        );
        receiver
            .await
            .expect("task producer dropped both continuations without settling")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;

    use super::*;

    fn counting_task(counter: &Arc<AtomicUsize>) -> Task<String, i32> {
        let counter = Arc::clone(counter);
        Task::new(move |_reject, resolve| {
            counter.fetch_add(1, Ordering::SeqCst);
            resolve(1);
        })
    }

    #[rstest]
    fn test_construction_runs_nothing() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = counting_task(&counter).fmap(|x| x + 1).flat_map(Task::pure);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        task.fork(|_| {}, |_| {});
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_each_fork_reruns_the_producer() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task = counting_task(&counter);
        task.fork(|_| {}, |_| {});
        task.fork(|_| {}, |_| {});
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn test_flat_map_short_circuits_on_rejection() {
        let downstream_runs = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&downstream_runs);
        let task: Task<String, i32> = Task::reject("boom".to_string()).flat_map(move |x| {
            spy.fetch_add(1, Ordering::SeqCst);
            Task::pure(x)
        });
        task.fork(|error| assert_eq!(error, "boom"), |_| panic!("resolved"));
        assert_eq!(downstream_runs.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_recover_replaces_rejection() {
        let task: Task<String, i32> =
            Task::<i32, i32>::reject(2).recover(|code| Task::pure(code * 21));
        task.fork(|_| panic!("rejected"), |value| assert_eq!(value, 42));
    }

    #[rstest]
    fn test_parallel_preserves_input_order() {
        let tasks: Vec<Task<String, i32>> = vec![Task::pure(1), Task::pure(2), Task::pure(3)];
        Task::parallel(tasks).fork(
            |_| panic!("rejected"),
            |values| assert_eq!(values, vec![1, 2, 3]),
        );
    }

    #[rstest]
    fn test_parallel_empty_input_resolves_immediately() {
        let tasks: Vec<Task<String, i32>> = Vec::new();
        Task::parallel(tasks).fork(|_| panic!("rejected"), |values| assert!(values.is_empty()));
    }

    #[rstest]
    fn test_parallel_forwards_first_rejection_once() {
        let rejections = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&rejections);
        let tasks: Vec<Task<String, i32>> = vec![
            Task::reject("first".to_string()),
            Task::reject("second".to_string()),
        ];
        Task::parallel(tasks).fork(
            move |error| {
                observed.fetch_add(1, Ordering::SeqCst);
                assert_eq!(error, "first");
            },
            |_| panic!("resolved"),
        );
        assert_eq!(rejections.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_lift_result_routes_both_channels() {
        let success: Task<String, i32> = Task::lift_result(|| Ok(42));
        success.fork(|_| panic!("rejected"), |value| assert_eq!(value, 42));

        let failure: Task<String, i32> = Task::lift_result(|| Err("boom".to_string()));
        failure.fork(|error| assert_eq!(error, "boom"), |_| panic!("resolved"));
    }
}
