#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Arithmetic Evaluator Example
//!
//! A recursive-descent calculator built on tinyparsec. Evaluation happens
//! while parsing; there is no intermediate tree.
//!
//! # Grammar
//!
//! ```text
//! expr    → sum
//! sum     → product (('+' | '-') product)*
//! product → value (('*' | '/') value)*
//! value   → ws (number | '(' expr ')') ws
//! number  → [0-9]+ ('.' [0-9]+)?
//! ```
//!
//! Products bind tighter than sums and both associate to the left, so
//! `2+3*4` is 14 and `10-4-3` is 3. Arithmetic is plain `f64`: dividing by
//! zero yields an infinity rather than an error.

use once_cell::sync::Lazy;
use thiserror::Error;
use tinyparsec::{Failure, Match, PResult, Scanner, SkipAny, literal, skip_any};

// ANCHOR: error_type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Syntax(#[from] Failure),

    #[error("input is empty")]
    EmptyInput,
}
// ANCHOR_END: error_type

#[allow(clippy::expect_used)]
static NUMBER: Lazy<Match> =
    Lazy::new(|| Match::new(r"[0-9]+(?:\.[0-9]+)?").expect("number pattern init failed"));

static WHITESPACE: Lazy<SkipAny> = Lazy::new(|| skip_any(" \t\r\n"));

/// Evaluates a complete expression; trailing garbage is an error.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    if input.trim().is_empty() {
        return Err(CalcError::EmptyInput);
    }
    Ok(tinyparsec::parse(&expr, input)?)
}

/// `expr → sum`
pub fn expr(s: &mut Scanner<'_>) -> PResult<f64> {
    s.trace("parsing expr");
    s.parse(&sum)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    const ADDITIVE: [(&'static str, Op); 2] = [("+", Op::Add), ("-", Op::Sub)];
    const MULTIPLICATIVE: [(&'static str, Op); 2] = [("*", Op::Mul), ("/", Op::Div)];

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

/// Consumes the first operator of `ops` found at the current position.
fn operator(s: &mut Scanner<'_>, ops: &[(&'static str, Op)]) -> Option<Op> {
    ops.iter()
        .find_map(|&(text, op)| s.parse(&literal(text)).is_ok().then_some(op))
}

/// Left fold of `operand (op operand)*` over the operators in `ops`.
fn chain(
    s: &mut Scanner<'_>,
    operand: fn(&mut Scanner<'_>) -> PResult<f64>,
    ops: &[(&'static str, Op)],
) -> PResult<f64> {
    let mut acc = s.parse(&operand)?;
    while let Some(op) = operator(s, ops) {
        let rhs = s.parse(&operand)?;
        acc = op.apply(acc, rhs);
    }
    Ok(acc)
}

fn sum(s: &mut Scanner<'_>) -> PResult<f64> {
    s.trace("parsing sum");
    chain(s, product, &Op::ADDITIVE)
}

fn product(s: &mut Scanner<'_>) -> PResult<f64> {
    s.trace("parsing product");
    chain(s, value, &Op::MULTIPLICATIVE)
}

fn value(s: &mut Scanner<'_>) -> PResult<f64> {
    s.skip(&*WHITESPACE);
    s.trace("parsing value");

    if let Ok(digits) = s.parse(&*NUMBER) {
        let number = digits.parse::<f64>().map_err(|e| s.fail(e))?;
        s.skip(&*WHITESPACE);
        return Ok(number);
    }

    if s.parse(&literal("(")).is_err() {
        return Err(s.fail("invalid value"));
    }
    let inner = s.parse(&expr)?;
    s.parse(&literal(")"))?;
    s.skip(&*WHITESPACE);
    Ok(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_apply() {
        assert_eq!(Op::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Op::Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(Op::Mul.apply(2.0, 3.0), 6.0);
        assert_eq!(Op::Div.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_operator_picks_first_match() {
        let mut scanner = Scanner::new("-1");
        assert_eq!(operator(&mut scanner, &Op::ADDITIVE), Some(Op::Sub));
        assert_eq!(scanner.remaining(), "1");
        assert_eq!(operator(&mut scanner, &Op::ADDITIVE), None);
        assert_eq!(scanner.remaining(), "1");
    }

    #[test]
    fn test_value_skips_surrounding_whitespace() {
        let mut scanner = Scanner::new("  42 \n+");
        assert_eq!(scanner.parse(&value), Ok(42.0));
        assert_eq!(scanner.remaining(), "+");
    }
}
