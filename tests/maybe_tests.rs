//! Unit tests for the Maybe<A> type.
//!
//! Maybe represents an optional value:
//! - `Just(a)`: a present value
//! - `Nothing`: the absent case, a ready-made value

#![cfg(feature = "control")]

use rstest::rstest;
use sumtag::control::Maybe;

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn just_is_just() {
    let value = Maybe::Just(42);
    assert!(value.is_just());
    assert!(!value.is_nothing());
}

#[rstest]
fn nothing_is_nothing() {
    let value: Maybe<i32> = Maybe::Nothing;
    assert!(value.is_nothing());
    assert!(!value.is_just());
}

#[rstest]
fn pure_wraps_in_just() {
    assert_eq!(Maybe::pure(7), Maybe::Just(7));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_or_else_prefers_the_present_value() {
    assert_eq!(Maybe::Just(3).get_or_else(0), 3);
    assert_eq!(Maybe::<i32>::Nothing.get_or_else(0), 0);
}

#[rstest]
#[should_panic(expected = "called `Maybe::unwrap_just()` on a `Nothing` value")]
fn unwrap_just_panics_on_nothing() {
    let _ = Maybe::<i32>::Nothing.unwrap_just();
}

// =============================================================================
// Functor / Applicative / Monad
// =============================================================================

#[rstest]
fn fmap_applies_only_to_just() {
    assert_eq!(Maybe::Just(21).fmap(|x| x * 2), Maybe::Just(42));
    assert_eq!(Maybe::<i32>::Nothing.fmap(|x| x * 2), Maybe::Nothing);
}

#[rstest]
fn apply_requires_both_sides() {
    let function = Maybe::Just(|x: i32| x + 1);
    assert_eq!(Maybe::Just(41).apply(function), Maybe::Just(42));

    let absent: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    assert_eq!(Maybe::Just(41).apply(absent), Maybe::Nothing);
}

#[rstest]
fn flat_map_short_circuits_on_nothing() {
    let half = |x: i32| {
        if x % 2 == 0 {
            Maybe::Just(x / 2)
        } else {
            Maybe::Nothing
        }
    };
    assert_eq!(Maybe::Just(8).flat_map(half), Maybe::Just(4));
    assert_eq!(Maybe::Just(3).flat_map(half), Maybe::Nothing);
    assert_eq!(Maybe::Nothing.flat_map(half), Maybe::Nothing);
}

#[rstest]
fn filter_keeps_only_satisfying_values() {
    assert_eq!(Maybe::Just(4).filter(|x| x % 2 == 0), Maybe::Just(4));
    assert_eq!(Maybe::Just(3).filter(|x| x % 2 == 0), Maybe::Nothing);
}

#[rstest]
fn or_else_falls_back_on_nothing() {
    assert_eq!(Maybe::Just(1).or_else(Maybe::Just(2)), Maybe::Just(1));
    assert_eq!(Maybe::Nothing.or_else(Maybe::Just(2)), Maybe::Just(2));
}

// =============================================================================
// Monad Laws
// =============================================================================

#[rstest]
#[case(0)]
#[case(21)]
#[case(-3)]
fn monad_left_identity(#[case] seed: i32) {
    let function = |x: i32| Maybe::Just(x * 2);
    assert_eq!(Maybe::pure(seed).flat_map(function), function(seed));
}

#[rstest]
fn monad_right_identity() {
    let maybe = Maybe::Just(7);
    assert_eq!(maybe.flat_map(Maybe::pure), maybe);
}

#[rstest]
fn monad_associativity() {
    let f = |x: i32| Maybe::Just(x + 1);
    let g = |x: i32| Maybe::Just(x * 2);
    let maybe = Maybe::Just(10);
    assert_eq!(
        maybe.flat_map(f).flat_map(g),
        maybe.flat_map(|x| f(x).flat_map(g))
    );
}

// =============================================================================
// Union Machinery
// =============================================================================

#[rstest]
fn maybe_is_a_tagged_union() {
    assert_eq!(Maybe::<i32>::TYPE_NAME, "Maybe");
    assert_eq!(Maybe::Just(1).tag(), "Just");
    assert_eq!(Maybe::<i32>::Nothing.tag(), "Nothing");
    assert_eq!(Maybe::Just(5).to_string(), "Just(5)");
    assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
}

#[rstest]
fn option_conversions_roundtrip() {
    let maybe: Maybe<i32> = Some(3).into();
    assert_eq!(maybe, Maybe::Just(3));
    let option: Option<i32> = maybe.into();
    assert_eq!(option, Some(3));

    let absent: Maybe<i32> = None.into();
    assert_eq!(absent, Maybe::Nothing);
}
