//! The cursor every parser runs against.
//!
//! A [`Scanner`] owns nothing but a reference to the input buffer and a
//! handful of small values: the current [`Position`], the nesting depth, the
//! arguments of the current invocation and the most recent failure.
//!
//! # Speculation
//!
//! All three invocation modes snapshot the location before running a
//! sub-parser and decide afterwards whether to keep what it consumed:
//!
//! | Mode | On success | On failure |
//! |------|------------|------------|
//! | [`parse`](Scanner::parse) | commit, return value | restore, record failure |
//! | [`peek`](Scanner::peek) | restore | restore |
//! | [`skip`](Scanner::skip) | commit, drop value | restore |
//!
//! Only the location can change during a sub-parse, so restoring it is the
//! whole undo. Args, nesting depth and the last failure are local to each
//! invocation and put back when it returns.
//!
//! # Tracing
//!
//! When tracing is enabled, primitives log what they attempt and every
//! invocation logs its outcome, indented two spaces per nesting level. Lines
//! collect in the scanner until [`take_trace`](Scanner::take_trace):
//!
//! ```text
//! parsing sum
//!     matching literal "+" against "3*4"
//!   ! line 1, col 1: literal "+" did not match
//! ```

use core::fmt::{self, Write};

use crate::config::{ParseConfig, RecursionGuard};
use crate::{Arg, Failure, PResult, Parser, Position};

/// Mutable cursor over an immutable input buffer.
pub struct Scanner<'src> {
    buf: &'src str,
    loc: Position,
    trace: Option<String>,
    guard: RecursionGuard,
    config: ParseConfig,
    args: Vec<Arg>,
    last_failure: Option<Failure>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner at the start of `input`.
    pub fn new(input: &'src str) -> Self {
        Self::with_config(input, ParseConfig::DEFAULT)
    }

    pub fn with_config(input: &'src str, config: ParseConfig) -> Self {
        Self {
            buf: input,
            loc: Position::START,
            trace: None,
            guard: RecursionGuard::new(),
            config,
            args: Vec::new(),
            last_failure: None,
        }
    }

    /// Creates a scanner that records a trace line for every invocation.
    pub fn with_trace(input: &'src str) -> Self {
        let mut scanner = Self::new(input);
        scanner.trace = Some(String::new());
        scanner
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    /// The whole input buffer.
    #[inline]
    pub fn buffer(&self) -> &'src str {
        self.buf
    }

    #[inline]
    pub fn location(&self) -> Position {
        self.loc
    }

    /// The unconsumed part of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'src str {
        &self.buf[self.loc.offset..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.loc.offset >= self.buf.len()
    }

    /// Current nesting depth; 0 for the scanner a driver hands to the root parser.
    #[inline]
    pub fn depth(&self) -> usize {
        self.guard.depth()
    }

    /// Arguments passed to the current invocation.
    #[inline]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    #[inline]
    pub fn arg(&self, index: usize) -> Option<&Arg> {
        self.args.get(index)
    }

    /// The failure recorded by the most recent [`parse`](Self::parse), if it failed.
    #[inline]
    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    #[inline]
    pub fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }

    /// Hands over the trace recorded so far and keeps tracing into a fresh
    /// buffer. `None` if tracing is off.
    pub fn take_trace(&mut self) -> Option<String> {
        self.trace.as_mut().map(core::mem::take)
    }

    /// Consumes `n` bytes of input, updating line and column.
    ///
    /// # Panics
    ///
    /// Advancing past the end of the buffer, or to an offset that is not a
    /// `char` boundary, is a bug in the calling parser and panics.
    pub fn advance(&mut self, n: usize) {
        let start = self.loc.offset;
        let end = start + n;
        assert!(
            end <= self.buf.len(),
            "advanced past end of input: offset {} > length {}",
            end,
            self.buf.len()
        );
        assert!(
            self.buf.is_char_boundary(end),
            "advanced into the middle of a character at offset {}",
            end
        );
        self.loc = self.loc.advance(&self.buf[start..end]);
    }

    /// Runs `parser` speculatively and commits what it consumed on success.
    ///
    /// On failure the location is left untouched and the failure is recorded
    /// as [`last_failure`](Self::last_failure) for [`fail`](Self::fail) to wrap.
    pub fn parse<P>(&mut self, parser: &P) -> PResult<P::Output>
    where
        P: Parser<'src> + ?Sized,
    {
        self.parse_with(parser, [])
    }

    /// Like [`parse`](Self::parse), handing `args` to the sub-parse.
    pub fn parse_with<P, A>(&mut self, parser: &P, args: A) -> PResult<P::Output>
    where
        P: Parser<'src> + ?Sized,
        A: IntoIterator<Item = Arg>,
    {
        let snapshot = self.loc;
        match self.invoke(parser, args.into_iter().collect()) {
            Ok(value) => {
                self.last_failure = None;
                Ok(value)
            }
            Err(failure) => {
                self.loc = snapshot;
                self.last_failure = Some(failure.clone());
                Err(failure)
            }
        }
    }

    /// Reports whether `parser` would succeed here, without consuming input.
    pub fn peek<P>(&mut self, parser: &P) -> bool
    where
        P: Parser<'src> + ?Sized,
    {
        self.peek_with(parser, [])
    }

    pub fn peek_with<P, A>(&mut self, parser: &P, args: A) -> bool
    where
        P: Parser<'src> + ?Sized,
        A: IntoIterator<Item = Arg>,
    {
        let snapshot = self.loc;
        let matched = self.invoke(parser, args.into_iter().collect()).is_ok();
        self.loc = snapshot;
        matched
    }

    /// Runs `parser` for its consumption only, discarding the value.
    pub fn skip<P>(&mut self, parser: &P) -> bool
    where
        P: Parser<'src> + ?Sized,
    {
        self.skip_with(parser, [])
    }

    pub fn skip_with<P, A>(&mut self, parser: &P, args: A) -> bool
    where
        P: Parser<'src> + ?Sized,
        A: IntoIterator<Item = Arg>,
    {
        let snapshot = self.loc;
        if self.invoke(parser, args.into_iter().collect()).is_ok() {
            true
        } else {
            self.loc = snapshot;
            false
        }
    }

    fn invoke<P>(&mut self, parser: &P, args: Vec<Arg>) -> PResult<P::Output>
    where
        P: Parser<'src> + ?Sized,
    {
        let start = self.loc.offset;
        let result = match self.guard.enter(self.config.max_recursion_depth) {
            Ok(()) => {
                let outer_args = core::mem::replace(&mut self.args, args);
                let outer_failure = self.last_failure.take();
                let result = parser.parse(self);
                self.args = outer_args;
                self.last_failure = outer_failure;
                result
            }
            Err(err) => Err(Failure::new(self.loc, err)),
        };
        self.guard.exit();

        if self.is_tracing() {
            match &result {
                Ok(_) => {
                    let buf = self.buf;
                    let consumed = buf.get(start..self.loc.offset).unwrap_or_default();
                    self.trace(format_args!(
                        "+ {} {:?}",
                        core::any::type_name::<P::Output>(),
                        consumed
                    ));
                }
                Err(failure) => {
                    let (location, message) = (failure.location(), failure.message());
                    self.trace(format_args!("! {}: {}", location, message));
                }
            }
        }
        result
    }

    /// Builds a failure at the current location, caused by the last recorded failure.
    pub fn fail(&self, message: impl fmt::Display) -> Failure {
        self.fail_at(self.loc, message)
    }

    /// [`fail`](Self::fail) for preformatted messages: `s.failf(format_args!(..))`.
    pub fn failf(&self, args: fmt::Arguments<'_>) -> Failure {
        self.fail(args)
    }

    /// Builds a failure at `location`, caused by the last recorded failure.
    ///
    /// Useful when the diagnostic should point at the start of a construct
    /// that was only found to be invalid after it was consumed.
    pub fn fail_at(&self, location: Position, message: impl fmt::Display) -> Failure {
        Failure::new(location, message).with_cause(self.last_failure.clone())
    }

    /// Records one trace line at the current nesting depth. No-op unless tracing.
    pub fn trace(&mut self, message: impl fmt::Display) {
        let indent = self.guard.depth() * 2;
        if let Some(buf) = self.trace.as_mut() {
            // writing into a String cannot fail
            let _ = writeln!(buf, "{:indent$}{}", "", message);
        }
    }

    /// Traces an attempt to match `what` against a preview of the remaining input.
    pub fn trace_matching(&mut self, what: impl fmt::Display) {
        if self.is_tracing() {
            let preview = self.preview();
            self.trace(format_args!("matching {} against {}", what, preview));
        }
    }

    fn preview(&self) -> String {
        let rest = self.remaining();
        match rest.char_indices().nth(self.config.trace_preview) {
            Some((cut, _)) => format!("{:?}...", &rest[..cut]),
            None => format!("{:?}", rest),
        }
    }
}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("location", &self.loc)
            .field("depth", &self.guard.depth())
            .field("tracing", &self.trace.is_some())
            .field("args", &self.args)
            .field("last_failure", &self.last_failure)
            .finish_non_exhaustive()
    }
}
