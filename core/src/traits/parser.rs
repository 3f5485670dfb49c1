use crate::{Failure, Scanner};

/// Result of running a parser: a typed success value or a [`Failure`].
pub type PResult<T> = Result<T, Failure>;

/// The contract every matching operation obeys.
///
/// Given a scanner positioned somewhere in its buffer, a parser either
/// advances it and returns a value, or returns a [`Failure`]. A parser has no
/// observable side effects beyond the scanner it was handed, and keeps no
/// reference to the scanner or its buffer after returning.
///
/// Parsers should not be called directly from grammar code; go through
/// [`Scanner::parse`], [`Scanner::peek`] or [`Scanner::skip`] so that a failed
/// attempt is rolled back and the outcome is traced.
///
/// # Implementation Guidelines
///
/// 1. Use `scanner.peek(&p)` to decide between productions without consuming
/// 2. Use `scanner.parse(&p)?` to run a sub-parser and propagate its failure
/// 3. Use `scanner.fail("...")` to reject with a message that wraps the
///    failure recorded by the last `parse`
/// 4. Only primitives call [`Scanner::advance`] themselves
///
/// # Example
///
/// ```ignore
/// use tinyparsec::{PResult, Scanner, literal};
///
/// fn parenthesized<'s>(s: &mut Scanner<'s>) -> PResult<&'s str> {
///     s.parse(&literal("("))?;
///     let inner = s.parse(&IDENT)?;
///     if s.parse(&literal(")")).is_err() {
///         return Err(s.fail("unclosed parenthesis"));
///     }
///     Ok(inner)
/// }
/// ```
///
/// # Blanket Implementations
///
/// - `Fn(&mut Scanner<'src>) -> PResult<T>`: plain functions and closures
pub trait Parser<'src> {
    /// The value produced on success.
    type Output;

    /// Runs the parser against `scanner`.
    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<Self::Output>;
}

impl<'src, F, T> Parser<'src> for F
where
    F: Fn(&mut Scanner<'src>) -> PResult<T>,
{
    type Output = T;

    #[inline]
    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<T> {
        self(scanner)
    }
}

/// A type-erased parser, for collections of heterogeneous parsers that share
/// an output type.
pub type BoxedParser<'src, T> = Box<dyn Fn(&mut Scanner<'src>) -> PResult<T> + 'src>;

/// Erases the concrete type of `parser`.
pub fn boxed<'src, P>(parser: P) -> BoxedParser<'src, P::Output>
where
    P: Parser<'src> + 'src,
{
    Box::new(move |scanner: &mut Scanner<'src>| parser.parse(scanner))
}
