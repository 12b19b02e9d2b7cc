//! Unit tests for the Either<L, R> type.
//!
//! Either represents a value that can be one of two types; by convention
//! `Left` carries the failure channel and `Right` the success channel, and
//! the chaining operations are right-biased.

#![cfg(feature = "control")]

use rstest::rstest;
use sumtag::control::Either;

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn pure_wraps_in_right() {
    let value: Either<String, i32> = Either::pure(42);
    assert_eq!(value, Either::Right(42));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn left_and_right_extract_their_own_channel() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.left_ref(), Some(&42));
    assert_eq!(left.clone().right(), None);
    assert_eq!(left.left(), Some(42));
}

#[rstest]
#[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
fn unwrap_right_panics_on_left() {
    let left: Either<i32, String> = Either::Left(42);
    let _ = left.unwrap_right();
}

// =============================================================================
// Mapping and Folding
// =============================================================================

#[rstest]
fn fmap_is_right_biased() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.fmap(|s| s.len()), Either::Right(5));

    let left: Either<i32, String> = Either::Left(7);
    assert_eq!(left.fmap(|s| s.len()), Either::Left(7));
}

#[rstest]
fn bimap_touches_exactly_one_side() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.bimap(|x| x * 2, |s| s.len()), Either::Left(84));

    let right: Either<i32, String> = Either::Right("abc".to_string());
    assert_eq!(right.bimap(|x| x * 2, |s| s.len()), Either::Right(3));
}

#[rstest]
fn fold_collapses_both_channels_to_one_type() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");

    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.fold(|x| x.to_string(), |s| s), "hello");
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn flat_map_short_circuits_on_left() {
    let failure: Either<String, i32> = Either::Left("boom".to_string());
    let chained = failure.flat_map(|_| -> Either<String, i32> {
        panic!("transform must not run on a Left value")
    });
    assert_eq!(chained, Either::Left("boom".to_string()));
}

#[rstest]
fn recover_intercepts_only_left() {
    let failure: Either<String, i32> = Either::Left("boom".to_string());
    assert_eq!(
        failure.recover(|_| Either::<String, i32>::Right(0)),
        Either::Right(0)
    );

    let success: Either<String, i32> = Either::Right(7);
    let recovered = success.recover(|_| -> Either<String, i32> {
        panic!("recovery must not run on a Right value")
    });
    assert_eq!(recovered, Either::Right(7));
}

#[rstest]
fn swap_exchanges_the_channels() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.clone().swap(), Either::Right(42));
    assert_eq!(left.clone().swap().swap(), left);
}

// =============================================================================
// Case Analysis and Tags
// =============================================================================

#[rstest]
fn cata_takes_handlers_in_declaration_order() {
    let rendered = Either::<String, i32>::Right(7).cata(
        |error| format!("error: {error}"),
        |value| format!("value: {value}"),
    );
    assert_eq!(rendered, "value: 7");
}

#[rstest]
fn either_is_a_tagged_union() {
    assert_eq!(Either::<i32, String>::TYPE_NAME, "Either");
    assert_eq!(Either::<i32, String>::Left(1).tag(), "Left");
    assert_eq!(Either::<i32, String>::Left(1).to_string(), "Left(1)");
}

// =============================================================================
// Result Conversions
// =============================================================================

#[rstest]
fn result_conversions_roundtrip() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::Right(42));

    let back: Result<i32, String> = either.into();
    assert_eq!(back, Ok(42));

    let err: Result<i32, String> = Err("boom".to_string());
    let either: Either<String, i32> = err.into();
    assert_eq!(either, Either::Left("boom".to_string()));
}
