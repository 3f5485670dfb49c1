//! Core of the tinyparsec combinator engine.
//!
//! A grammar is a set of [`Parser`]s: primitives ([`Literal`], [`Match`],
//! [`Submatches`], [`SkipAny`], [`Sequence`]) composed by ordinary functions
//! that take a [`Scanner`] and call back into it. The scanner's invocation
//! modes give every sub-parse backtracking for free, and [`Scanner::fail`]
//! chains rule-level diagnostics onto the mismatch that caused them.

mod arg;
pub mod config;
mod driver;
mod error;
mod failure;
mod literal;
mod pattern;
mod position;
mod scanner;
mod sequence;
mod skip_any;
pub mod traits;

pub use arg::Arg;
pub use config::{ParseConfig, RecursionGuard};
pub use driver::{parse, parse_first, parse_with_config, trace_parse};
pub use error::Error;
pub use failure::Failure;
pub use literal::{Literal, literal};
pub use pattern::{Match, Submatches};
pub use position::Position;
pub use scanner::Scanner;
pub use sequence::{Sequence, Stages, sequence};
pub use skip_any::{SkipAny, skip_any};
pub use traits::{BoxedParser, PResult, Parser, boxed};

/// Re-exported so patterns can be built from an existing [`regex::Regex`].
pub use regex;
