//! The combinator contract.
//!
//! Every matching operation, built-in or user-written, is a [`Parser`]:
//!
//! ```text
//! Parser<'src>
//!     ├── Literal, Match, Submatches, SkipAny   (primitives)
//!     ├── Sequence<S> where S: Stages           (composition)
//!     └── Fn(&mut Scanner<'src>) -> PResult<T>  (grammar rules)
//! ```
//!
//! # Usage Patterns
//!
//! ```ignore
//! use tinyparsec::{PResult, Scanner, literal};
//!
//! fn boolean(s: &mut Scanner<'_>) -> PResult<bool> {
//!     if s.parse(&literal("true")).is_ok() {
//!         Ok(true)
//!     } else if s.parse(&literal("false")).is_ok() {
//!         Ok(false)
//!     } else {
//!         Err(s.fail("expected boolean"))
//!     }
//! }
//! ```

mod parser;

pub use parser::{BoxedParser, PResult, Parser, boxed};
