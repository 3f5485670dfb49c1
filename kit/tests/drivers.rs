//! Driver Tests
//!
//! `parse_first`, `parse` and the full-consumption contract, plus the way
//! client code folds failures into its own error type.

use thiserror::Error;
use tinyparsec::{Failure, Match, PResult, Scanner, literal, parse, parse_first};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TestError {
    #[error(transparent)]
    Syntax(#[from] Failure),

    #[error("input is empty")]
    Empty,
}

fn keyword(input: &str) -> Result<&str, TestError> {
    if input.is_empty() {
        return Err(TestError::Empty);
    }
    Ok(parse(&literal("abc"), input)?)
}

#[test]
fn test_literal_prefix() {
    let mut scanner = Scanner::new("abc");
    assert_eq!(scanner.parse(&literal("ab")), Ok("ab"));
    assert_eq!(scanner.location().offset, 2);
}

#[test]
fn test_match_digits() {
    let digits = Match::new("[0-9]+").unwrap();
    let mut scanner = Scanner::new("123x");
    assert_eq!(scanner.parse(&digits), Ok("123"));
    assert_eq!(scanner.location().offset, 3);
}

#[test]
fn test_unconsumed_input_fails_after_match() {
    let failure = parse(&literal("abc"), "abc extra").unwrap_err();
    assert_eq!(failure.location().offset, 3);
    insta::assert_snapshot!(failure, @"at line 1, col 3: expected end of stream");
}

#[test]
fn test_unconsumed_failure_wraps_last_recorded_failure() {
    fn letters<'s>(s: &mut Scanner<'s>) -> PResult<usize> {
        let mut count = 0;
        while s.parse(&literal("a")).is_ok() {
            count += 1;
        }
        Ok(count)
    }

    assert_eq!(parse(&letters, "aaa"), Ok(3));
    let failure = parse(&letters, "aab").unwrap_err();
    insta::assert_snapshot!(
        failure,
        @r#"at line 1, col 2: expected end of stream because at line 1, col 2: literal "a" did not match"#
    );
}

#[test_case::test_case("abc"; "exact")]
#[test_case::test_case("abcdef"; "trailing")]
#[test_case::test_case("xyz"; "mismatch")]
#[test_case::test_case("ab"; "short")]
fn test_full_consumption_contract(input: &str) {
    let first = parse_first(&literal("abc"), input);
    let full = parse(&literal("abc"), input);

    let not_consumed = full
        .as_ref()
        .err()
        .is_some_and(|f| f.message() == "expected end of stream");
    let strict_prefix = first.is_ok() && input.len() > 3;
    assert_eq!(not_consumed, strict_prefix);

    if let Err(original) = &first {
        assert_eq!(full.as_ref().err(), Some(original));
    }
}

#[test]
fn test_error_type_wraps_failure() {
    assert_eq!(keyword("abc"), Ok("abc"));
    assert_eq!(keyword(""), Err(TestError::Empty));

    let err = keyword("abd").unwrap_err();
    assert!(matches!(err, TestError::Syntax(_)));
    assert_eq!(err.to_string(), r#"at line 1, col 0: literal "abc" did not match"#);
}

#[test]
fn test_parse_first_on_empty_input() {
    assert_eq!(parse_first(&literal(""), ""), Ok(""));
    let failure = parse_first(&literal("a"), "").unwrap_err();
    assert_eq!(failure.message(), r#"unexpected EOF while matching literal "a""#);
}
