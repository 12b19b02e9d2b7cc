//! Unit tests for the Task<E, A> type.
//!
//! These cover the execution contract: laziness, per-fork re-execution,
//! short-circuiting, recovery, and the parallel combinator's ordering and
//! at-most-once guarantees.

#![cfg(feature = "effect")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rstest::rstest;
use sumtag::effect::Task;

/// A task that counts how many times its producer has run.
fn spied_task(counter: &Arc<AtomicUsize>, value: i32) -> Task<String, i32> {
    let counter = Arc::clone(counter);
    Task::new(move |_reject, resolve| {
        counter.fetch_add(1, Ordering::SeqCst);
        resolve(value);
    })
}

/// A task whose producer settles from another thread after a delay.
fn delayed_task(value: i32, delay: Duration) -> Task<String, i32> {
    Task::new(move |_reject, resolve| {
        thread::spawn(move || {
            thread::sleep(delay);
            resolve(value);
        });
    })
}

fn delayed_rejection(error: &str, delay: Duration) -> Task<String, i32> {
    let error = error.to_string();
    Task::new(move |reject, _resolve| {
        let error = error.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            reject(error);
        });
    })
}

// =============================================================================
// Laziness and Re-execution
// =============================================================================

#[rstest]
fn producer_is_not_invoked_at_construction() {
    let counter = Arc::new(AtomicUsize::new(0));
    let task = spied_task(&counter, 1)
        .fmap(|x| x + 1)
        .flat_map(Task::pure)
        .recover(Task::reject);
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    task.fork(|_| {}, |_| {});
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn each_fork_runs_independently() {
    let counter = Arc::new(AtomicUsize::new(0));
    let task = spied_task(&counter, 7);

    task.fork(|_| {}, |value| assert_eq!(value, 7));
    task.fork(|_| {}, |value| assert_eq!(value, 7));
    task.fork(|_| {}, |value| assert_eq!(value, 7));

    // No memoized outcome: three forks, three runs.
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[rstest]
fn cloned_tasks_share_the_description_not_a_result() {
    let counter = Arc::new(AtomicUsize::new(0));
    let task = spied_task(&counter, 7);
    let clone = task.clone();

    task.fork(|_| {}, |_| {});
    clone.fork(|_| {}, |_| {});
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn chain_short_circuits_without_invoking_the_transform() {
    let transform_runs = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&transform_runs);

    let task: Task<String, i32> = Task::reject("boom".to_string()).flat_map(move |x| {
        spy.fetch_add(1, Ordering::SeqCst);
        Task::pure(x)
    });

    task.fork(
        |error| assert_eq!(error, "boom"),
        |_| panic!("must not resolve"),
    );
    assert_eq!(transform_runs.load(Ordering::SeqCst), 0);
}

#[rstest]
fn map_transforms_only_the_success_channel() {
    let success: Task<String, i32> = Task::pure(21).fmap(|x| x * 2);
    success.fork(|_| panic!("must not reject"), |value| assert_eq!(value, 42));

    let failure: Task<String, i32> = Task::reject("boom".to_string()).fmap(|x: i32| x * 2);
    failure.fork(
        |error| assert_eq!(error, "boom"),
        |_| panic!("must not resolve"),
    );
}

#[rstest]
fn recover_is_skipped_on_success() {
    let recovery_runs = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&recovery_runs);

    let task: Task<String, i32> = Task::pure(5).recover(move |error: String| {
        spy.fetch_add(1, Ordering::SeqCst);
        Task::reject(error)
    });

    task.fork(|_| panic!("must not reject"), |value| assert_eq!(value, 5));
    assert_eq!(recovery_runs.load(Ordering::SeqCst), 0);
}

#[rstest]
fn recover_outcome_becomes_the_final_outcome() {
    let recovered: Task<String, i32> =
        Task::<i32, i32>::reject(2).recover(|code| Task::pure(code * 21));
    recovered.fork(|_| panic!("must not reject"), |value| assert_eq!(value, 42));

    let still_failing: Task<String, i32> =
        Task::<i32, i32>::reject(2).recover(|code| Task::reject(format!("code {code}")));
    still_failing.fork(
        |error| assert_eq!(error, "code 2"),
        |_| panic!("must not resolve"),
    );
}

#[rstest]
fn then_discards_the_first_value() {
    let task: Task<String, &str> = Task::pure(1).then(Task::pure("second"));
    task.fork(|_| {}, |value| assert_eq!(value, "second"));
}

#[rstest]
fn map2_combines_sequential_results() {
    let task: Task<String, i32> = Task::pure(40).map2(Task::pure(2), |a, b| a + b);
    task.fork(|_| {}, |value| assert_eq!(value, 42));
}

#[rstest]
fn product_pairs_the_results() {
    let task: Task<String, (i32, &str)> = Task::pure(1).product(Task::pure("a"));
    task.fork(|_| {}, |pair| assert_eq!(pair, (1, "a")));
}

// =============================================================================
// Parallel Composition
// =============================================================================

#[rstest]
fn parallel_resolves_in_input_order() {
    let tasks: Vec<Task<String, i32>> = vec![Task::pure(1), Task::pure(2), Task::pure(3)];
    Task::parallel(tasks).fork(
        |_| panic!("must not reject"),
        |values| assert_eq!(values, vec![1, 2, 3]),
    );
}

#[rstest]
fn parallel_order_is_independent_of_completion_order() {
    // The first task completes last; the output order must still follow
    // the input order.
    let tasks = vec![
        delayed_task(1, Duration::from_millis(60)),
        delayed_task(2, Duration::from_millis(10)),
        Task::pure(3),
    ];

    let (sender, receiver) = mpsc::channel();
    Task::parallel(tasks).fork(
        |_: String| panic!("must not reject"),
        move |values| sender.send(values).unwrap(),
    );

    let values = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(values, vec![1, 2, 3]);
}

#[rstest]
fn parallel_of_nothing_resolves_immediately() {
    let resolved = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&resolved);
    let tasks: Vec<Task<String, i32>> = Vec::new();
    Task::parallel(tasks).fork(
        |_| panic!("must not reject"),
        move |values| {
            assert!(values.is_empty());
            spy.fetch_add(1, Ordering::SeqCst);
        },
    );
    assert_eq!(resolved.load(Ordering::SeqCst), 1);
}

#[rstest]
fn parallel_forwards_the_first_failure_exactly_once() {
    let rejections = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&rejections);
    let (sender, receiver) = mpsc::channel();

    // Two of three tasks fail; the synchronous one settles first.
    let tasks = vec![
        delayed_task(1, Duration::from_millis(20)),
        Task::reject("fast".to_string()),
        delayed_rejection("slow", Duration::from_millis(40)),
    ];

    Task::parallel(tasks).fork(
        move |error| {
            spy.fetch_add(1, Ordering::SeqCst);
            sender.send(error).unwrap();
        },
        |_| panic!("must not resolve"),
    );

    let error = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(error, "fast");

    // Give the slow rejection time to arrive, then confirm it was dropped.
    thread::sleep(Duration::from_millis(100));
    assert_eq!(rejections.load(Ordering::SeqCst), 1);
}

#[rstest]
fn parallel_success_after_failure_is_discarded() {
    let outcomes = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&outcomes);
    let (sender, receiver) = mpsc::channel();

    let tasks = vec![
        Task::reject("boom".to_string()),
        delayed_task(2, Duration::from_millis(20)),
    ];

    let success_spy = Arc::clone(&outcomes);
    Task::parallel(tasks).fork(
        move |error: String| {
            spy.fetch_add(1, Ordering::SeqCst);
            sender.send(error).unwrap();
        },
        move |_| {
            success_spy.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert_eq!(receiver.recv_timeout(Duration::from_secs(2)).unwrap(), "boom");
    thread::sleep(Duration::from_millis(80));
    assert_eq!(outcomes.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Lifting
// =============================================================================

#[rstest]
fn lift_defers_the_function_to_fork_time() {
    let runs = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&runs);
    let task: Task<String, i32> = Task::lift(move || {
        spy.fetch_add(1, Ordering::SeqCst);
        42
    });

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    task.fork(|_| {}, |value| assert_eq!(value, 42));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
fn lift_result_maps_the_two_channels() {
    let success: Task<String, i32> = Task::lift_result(|| Ok(42));
    success.fork(|_| panic!("must not reject"), |value| assert_eq!(value, 42));

    let failure: Task<String, i32> = Task::lift_result(|| Err("broken".to_string()));
    failure.fork(
        |error| assert_eq!(error, "broken"),
        |_| panic!("must not resolve"),
    );
}
