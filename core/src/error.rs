//! Failure reasons raised by tinyparsec's own primitives and drivers.
//!
//! Grammar code usually never constructs these directly: primitives turn them
//! into [`Failure`](crate::Failure) messages. User-defined grammars report
//! their own reasons through [`Scanner::fail`](crate::Scanner::fail) and
//! friends, or wrap a [`Failure`](crate::Failure) in their own error type:
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum MyError {
//!     #[error(transparent)]
//!     Syntax(#[from] tinyparsec::Failure),
//!
//!     #[error("input is empty")]
//!     EmptyInput,
//! }
//! ```

use core::fmt;

/// Core tinyparsec failure reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input ended before a literal could be matched in full.
    UnexpectedEof {
        /// The literal being matched.
        literal: String,
    },

    /// Enough input remained, but it differs from the literal.
    LiteralMismatch {
        /// The literal being matched.
        literal: String,
    },

    /// A pattern has no match anchored at the current position.
    PatternMismatch {
        /// Source text of the pattern as written by the caller.
        pattern: String,
    },

    /// The parser succeeded without consuming the whole input.
    ///
    /// Only produced by the [`parse`](crate::parse) driver.
    NotConsumed,

    /// Nested invocations exceeded the configured maximum depth.
    ///
    /// Input like `((((((...))))))` with thousands of nesting levels would
    /// trigger this with the default limit.
    RecursionLimitExceeded {
        /// Depth reached when the limit was exceeded.
        depth: usize,
        /// Maximum allowed depth.
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedEof { literal } => {
                write!(f, "unexpected EOF while matching literal {:?}", literal)
            }
            Error::LiteralMismatch { literal } => {
                write!(f, "literal {:?} did not match", literal)
            }
            Error::PatternMismatch { pattern } => {
                write!(f, "pattern {:?} did not match", pattern)
            }
            Error::NotConsumed => f.write_str("expected end of stream"),
            Error::RecursionLimitExceeded { depth, limit } => {
                write!(
                    f,
                    "recursion limit exceeded: depth {} > limit {}",
                    depth, limit
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Error::UnexpectedEof { literal: "ab".into() }, r#"unexpected EOF while matching literal "ab""#; "eof")]
    #[test_case(Error::LiteralMismatch { literal: "ab".into() }, r#"literal "ab" did not match"#; "mismatch")]
    #[test_case(Error::PatternMismatch { pattern: "[0-9]+".into() }, r#"pattern "[0-9]+" did not match"#; "pattern")]
    #[test_case(Error::NotConsumed, "expected end of stream"; "not consumed")]
    #[test_case(Error::RecursionLimitExceeded { depth: 4, limit: 3 }, "recursion limit exceeded: depth 4 > limit 3"; "recursion")]
    fn test_error_display(err: Error, expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_eof_and_mismatch_are_distinguishable() {
        let eof = Error::UnexpectedEof {
            literal: "x".into(),
        };
        let mismatch = Error::LiteralMismatch {
            literal: "x".into(),
        };
        assert_ne!(eof.to_string(), mismatch.to_string());
    }
}
