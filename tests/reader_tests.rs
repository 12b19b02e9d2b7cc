//! Unit tests for the Reader<R, A> type.

#![cfg(feature = "effect")]

use rstest::rstest;
use sumtag::effect::Reader;

#[derive(Clone, Debug, PartialEq)]
struct Config {
    prefix: String,
    verbose: bool,
}

fn config() -> Config {
    Config {
        prefix: ">>".to_string(),
        verbose: true,
    }
}

// =============================================================================
// Construction and Execution
// =============================================================================

#[rstest]
fn ask_returns_the_environment_unchanged() {
    assert_eq!(Reader::<i32, i32>::ask().run(42), 42);
}

#[rstest]
fn asks_projects_the_environment() {
    let prefix = Reader::asks(|config: Config| config.prefix);
    assert_eq!(prefix.run(config()), ">>");
}

#[rstest]
fn pure_ignores_the_environment() {
    let reader: Reader<Config, i32> = Reader::pure(42);
    assert_eq!(reader.run(config()), 42);
}

#[rstest]
fn readers_are_reusable_across_environments() {
    let verbose = Reader::asks(|config: Config| config.verbose);
    assert!(verbose.run(config()));
    assert!(!verbose.run(Config {
        prefix: String::new(),
        verbose: false,
    }));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn flat_map_threads_the_same_environment_through_both_steps() {
    let message = Reader::asks(|config: Config| config.prefix).flat_map(|prefix| {
        Reader::asks(move |config: Config| {
            if config.verbose {
                format!("{prefix} verbose")
            } else {
                prefix.clone()
            }
        })
    });
    assert_eq!(message.run(config()), ">> verbose");
}

#[rstest]
fn fmap_transforms_the_result_only() {
    let length = Reader::asks(|config: Config| config.prefix).fmap(|prefix| prefix.len());
    assert_eq!(length.run(config()), 2);
}

#[rstest]
fn map2_combines_two_projections() {
    let summary = Reader::asks(|config: Config| config.prefix).map2(
        Reader::asks(|config: Config| config.verbose),
        |prefix, verbose| format!("{prefix}:{verbose}"),
    );
    assert_eq!(summary.run(config()), ">>:true");
}

#[rstest]
fn local_modifies_the_environment_for_the_inner_reader_only() {
    let shouting = Reader::asks(|config: Config| config.prefix).local(|mut config: Config| {
        config.prefix = config.prefix.repeat(2);
        config
    });
    assert_eq!(shouting.run(config()), ">>>>");
}

// =============================================================================
// Monad Laws
// =============================================================================

#[rstest]
fn monad_left_identity() {
    let function = |x: i32| Reader::asks(move |environment: i32| environment + x);
    let lifted = Reader::<i32, i32>::pure(5).flat_map(function);
    assert_eq!(lifted.run(10), function(5).run(10));
}

#[rstest]
fn monad_associativity() {
    let f = |x: i32| Reader::asks(move |environment: i32| environment + x);
    let g = |x: i32| Reader::asks(move |environment: i32| environment * x);

    let left = Reader::<i32, i32>::ask().flat_map(f).flat_map(g);
    let right = Reader::<i32, i32>::ask().flat_map(move |x| f(x).flat_map(g));
    assert_eq!(left.run(3), right.run(3));
}
