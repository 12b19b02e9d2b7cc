//! Unit tests for the Validation<E, A> type.
//!
//! Validation settles on a failure or success channel like Either, but its
//! applicative operations accumulate failures instead of short-circuiting.

#![cfg(feature = "control")]

use rstest::rstest;
use sumtag::control::{Either, Validation};

type Checked = Validation<Vec<String>, i32>;

fn fail(message: &str) -> Checked {
    Validation::Failure(vec![message.to_string()])
}

fn errors(messages: &[&str]) -> Checked {
    Validation::Failure(messages.iter().map(|m| (*m).to_string()).collect())
}

// =============================================================================
// Construction and Extraction
// =============================================================================

#[rstest]
fn pure_wraps_in_success() {
    assert_eq!(Checked::pure(1), Validation::Success(1));
}

#[rstest]
fn success_and_failure_extract_their_own_channel() {
    assert_eq!(Checked::pure(1).success(), Some(1));
    assert_eq!(Checked::pure(1).failure(), None);
    assert_eq!(fail("boom").failure(), Some(vec!["boom".to_string()]));
}

// =============================================================================
// Accumulation
// =============================================================================

#[rstest]
fn map2_accumulates_failures_in_argument_order() {
    assert_eq!(
        fail("first").map2(fail("second"), |a, b| a + b),
        errors(&["first", "second"])
    );
}

#[rstest]
fn map2_passes_through_a_single_failure() {
    assert_eq!(
        fail("only").map2(Validation::Success(2), |a, b| a + b),
        errors(&["only"])
    );
    assert_eq!(
        Checked::pure(1).map2(fail("only"), |a, b| a + b),
        errors(&["only"])
    );
}

#[rstest]
fn map3_and_map4_accumulate_every_failure() {
    assert_eq!(
        fail("a").map3(fail("b"), fail("c"), |x, y, z| x + y + z),
        errors(&["a", "b", "c"])
    );
    assert_eq!(
        fail("a").map4(
            Validation::Success(0),
            fail("c"),
            fail("d"),
            |x, y, z, w| x + y + z + w
        ),
        errors(&["a", "c", "d"])
    );
}

#[rstest]
fn apply_combines_failures_from_both_sides() {
    let function: Validation<Vec<String>, fn(i32) -> i32> =
        Validation::Failure(vec!["no function".to_string()]);
    assert_eq!(
        fail("no value").apply(function),
        errors(&["no function", "no value"])
    );
}

#[rstest]
fn combine_all_succeeds_with_values_in_input_order() {
    let validations = vec![Checked::pure(1), Checked::pure(2), Checked::pure(3)];
    assert_eq!(
        Validation::combine_all(validations),
        Validation::Success(vec![1, 2, 3])
    );
}

#[rstest]
fn combine_all_collects_every_failure() {
    let validations = vec![fail("a"), Checked::pure(2), fail("c")];
    assert_eq!(
        Validation::combine_all(validations),
        Validation::<Vec<String>, Vec<i32>>::Failure(vec!["a".to_string(), "c".to_string()])
    );
}

#[rstest]
fn combine_all_of_nothing_is_an_empty_success() {
    let validations: Vec<Checked> = Vec::new();
    assert_eq!(
        Validation::combine_all(validations),
        Validation::Success(Vec::new())
    );
}

// =============================================================================
// Mapping and Conversions
// =============================================================================

#[rstest]
fn fmap_touches_only_success() {
    assert_eq!(Checked::pure(21).fmap(|x| x * 2), Validation::Success(42));
    assert_eq!(fail("boom").fmap(|x| x * 2), errors(&["boom"]));
}

#[rstest]
fn map_failure_touches_only_failure() {
    assert_eq!(
        fail("boom").map_failure(|errors| errors.len()),
        Validation::Failure(1)
    );
    assert_eq!(
        Checked::pure(1).map_failure(|errors| errors.len()),
        Validation::Success(1)
    );
}

#[rstest]
fn either_conversion_roundtrips() {
    let validation = Checked::pure(5);
    let either: Either<Vec<String>, i32> = validation.clone().to_either();
    assert_eq!(either, Either::Right(5));
    assert_eq!(Validation::from_either(either), validation);
}

// =============================================================================
// A Realistic Form Validation
// =============================================================================

#[derive(Debug, PartialEq)]
struct SignUp {
    name: String,
    age: i32,
}

fn check_name(name: &str) -> Validation<Vec<String>, String> {
    if name.is_empty() {
        Validation::Failure(vec!["name must not be empty".to_string()])
    } else {
        Validation::Success(name.to_string())
    }
}

fn check_age(age: i32) -> Validation<Vec<String>, i32> {
    if (0..=150).contains(&age) {
        Validation::Success(age)
    } else {
        Validation::Failure(vec!["age out of range".to_string()])
    }
}

#[rstest]
fn form_validation_reports_every_problem_at_once() {
    let valid = check_name("ada").map2(check_age(36), |name, age| SignUp { name, age });
    assert_eq!(
        valid,
        Validation::Success(SignUp {
            name: "ada".to_string(),
            age: 36
        })
    );

    let invalid = check_name("").map2(check_age(-1), |name, age| SignUp { name, age });
    assert_eq!(
        invalid,
        Validation::Failure(vec![
            "name must not be empty".to_string(),
            "age out of range".to_string(),
        ])
    );
}
