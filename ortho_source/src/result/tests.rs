//! Laws of the accumulating combinators.

use rstest::{fixture, rstest};

use super::{ConfigResult, ap};
use crate::{ConfigError, ConfigErrors};

fn failing(extensions: &[&str]) -> ConfigResult<u32> {
    let errors = extensions
        .iter()
        .map(|ext| ConfigErrors::new(ConfigError::no_parser(*ext)))
        .reduce(ConfigErrors::concat)
        .expect("at least one extension");
    ConfigResult::Invalid(errors)
}

fn extensions<T>(result: &ConfigResult<T>) -> Vec<String> {
    result
        .errors()
        .map(|errors| {
            errors
                .iter()
                .map(|error| match error {
                    ConfigError::NoParser { extension } => extension.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn add(a: u32, b: u32) -> ConfigResult<u32> {
    ConfigResult::valid(a + b)
}

#[fixture]
fn valid() -> ConfigResult<u32> {
    ConfigResult::valid(2)
}

#[rstest]
fn ap_applies_function_when_both_valid(valid: ConfigResult<u32>) {
    let combined = ap(valid, ConfigResult::valid(3), add);
    assert_eq!(combined.ok(), Some(5));
}

#[rstest]
#[case(&["a"], &["b"])]
#[case(&["a", "b"], &["c"])]
#[case(&["a"], &["b", "c", "d"])]
fn ap_concatenates_both_error_sequences(#[case] left: &[&str], #[case] right: &[&str]) {
    let combined = ap(failing(left), failing(right), add);
    let expected: Vec<String> = left.iter().chain(right).map(|s| (*s).to_owned()).collect();
    assert_eq!(extensions(&combined), expected);
    assert_eq!(
        combined.errors().map(ConfigErrors::len),
        Some(left.len() + right.len())
    );
}

#[rstest]
fn ap_propagates_single_invalid_on_either_side(valid: ConfigResult<u32>) {
    let left = ap(failing(&["x", "y"]), valid.clone(), add);
    let right = ap(valid, failing(&["x", "y"]), add);
    assert_eq!(extensions(&left), ["x", "y"]);
    assert_eq!(extensions(&right), ["x", "y"]);
}

#[rstest]
fn ap_does_not_call_function_on_failure(valid: ConfigResult<u32>) {
    let mut called = false;
    let combined = ap(valid, failing(&["z"]), |a, b| {
        called = true;
        add(a, b)
    });
    assert!(combined.is_invalid());
    assert!(!called);
}

#[rstest]
fn ap_surfaces_errors_from_the_combining_function(valid: ConfigResult<u32>) {
    let combined: ConfigResult<u32> = ap(valid, ConfigResult::valid(1), |_, _| {
        ConfigResult::invalid(ConfigError::parse("input", "bad"))
    });
    assert_eq!(combined.errors().map(ConfigErrors::len), Some(1));
}

#[rstest]
fn map_transforms_valid_and_keeps_errors(valid: ConfigResult<u32>) {
    assert_eq!(valid.map(|v| v * 10).ok(), Some(20));
    let failed = failing(&["m"]).map(|v| v * 10);
    assert_eq!(extensions(&failed), ["m"]);
}

#[rstest]
fn and_then_short_circuits(valid: ConfigResult<u32>) {
    let chained = failing(&["first"]).and_then(|_| failing(&["second"]));
    assert_eq!(extensions(&chained), ["first"]);
    assert_eq!(valid.and_then(|v| add(v, 1)).ok(), Some(3));
}

#[rstest]
fn zip_accumulates_like_ap(valid: ConfigResult<u32>) {
    assert_eq!(valid.zip(ConfigResult::valid("x")).ok(), Some((2, "x")));
    let both = failing(&["l"]).zip(failing(&["r"]));
    assert_eq!(extensions(&both), ["l", "r"]);
}

#[test]
fn sequence_collects_values_in_order() {
    let all: ConfigResult<Vec<u32>> = (1..=3).map(ConfigResult::valid).collect();
    assert_eq!(all.ok(), Some(vec![1, 2, 3]));
}

#[test]
fn sequence_keeps_every_error_in_order() {
    let all = ConfigResult::sequence([
        failing(&["a"]),
        ConfigResult::valid(1),
        failing(&["b", "c"]),
        failing(&["d"]),
    ]);
    assert_eq!(extensions(&all), ["a", "b", "c", "d"]);
}

#[test]
fn sequence_of_nothing_is_valid() {
    let all = ConfigResult::<u32>::sequence([]);
    assert_eq!(all.ok(), Some(Vec::new()));
}

#[test]
fn converts_to_and_from_std_result() -> Result<(), ConfigErrors> {
    let from_ok: ConfigResult<u32> = Ok::<_, ConfigError>(4).into();
    assert_eq!(from_ok.into_result()?, 4);
    let from_err: ConfigResult<u32> = Err(ConfigError::no_parser("q")).into();
    let as_result: Result<u32, ConfigErrors> = from_err.into();
    assert!(as_result.is_err());
    Ok(())
}

#[test]
fn map_errors_rewrites_only_invalid() {
    let appended = failing(&["a"])
        .map_errors(|errors| errors.concat(ConfigErrors::new(ConfigError::no_parser("b"))));
    assert_eq!(extensions(&appended), ["a", "b"]);
    let untouched = ConfigResult::valid(1).map_errors(|_| unreachable!("valid results skip"));
    assert_eq!(untouched.ok(), Some(1));
}
