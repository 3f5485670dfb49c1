#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! JSON Parser Example
//!
//! A JSON parser written directly against the tinyparsec scanner: regex
//! primitives for the lexical pieces, plain functions for the productions.
//!
//! # Features
//!
//! - Objects, arrays, strings, numbers, booleans and `null`
//! - Full string escapes, including `\uXXXX` and surrogate pairs
//! - Duplicate object keys are rejected at the position of the repeated key
//!
//! ```text
//! {"name": "Alice", "tags": ["rust", "parser"], "age": 30}
//! ```

pub mod ast;
pub mod escape;
pub mod parse;

pub use ast::{JsonObject, JsonValue};
pub use escape::EscapeError;

use thiserror::Error;
use tinyparsec::Failure;

// ANCHOR: error_type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    #[error(transparent)]
    Syntax(#[from] Failure),

    #[error("expected JSON value, found EOF")]
    Empty,
}
// ANCHOR_END: error_type

impl JsonError {
    /// The failure behind a syntax error.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Syntax(failure) => Some(failure),
            Self::Empty => None,
        }
    }
}

/// Parses a complete JSON document.
pub fn parse_json(input: &str) -> Result<JsonValue, JsonError> {
    if input.trim().is_empty() {
        return Err(JsonError::Empty);
    }
    Ok(tinyparsec::parse(&parse::document, input)?)
}
