//! Top-level entry points.
//!
//! Each driver binds a fresh root [`Scanner`] to the input and runs the
//! parser on it directly, at nesting depth 0. A failure is returned as-is;
//! no partial value ever accompanies it.

use std::io;

use crate::{Error, PResult, ParseConfig, Parser, Scanner};

/// Parses a prefix of `input`. Trailing input is left alone.
pub fn parse_first<'src, P>(parser: &P, input: &'src str) -> PResult<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    let mut scanner = Scanner::new(input);
    parser.parse(&mut scanner)
}

/// Parses `input` and requires all of it to be consumed.
///
/// If `parser` succeeds but input remains, fails with `expected end of
/// stream` at the point where parsing stopped, caused by whatever failure
/// the root scanner recorded last.
pub fn parse<'src, P>(parser: &P, input: &'src str) -> PResult<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    parse_with_config(parser, input, ParseConfig::DEFAULT)
}

/// [`parse`] with a custom [`ParseConfig`].
pub fn parse_with_config<'src, P>(
    parser: &P,
    input: &'src str,
    config: ParseConfig,
) -> PResult<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    let mut scanner = Scanner::with_config(input, config);
    let value = parser.parse(&mut scanner)?;
    if !scanner.is_eof() {
        return Err(scanner.fail(Error::NotConsumed));
    }
    Ok(value)
}

/// [`parse_first`] with every invocation traced to `sink`.
///
/// The trace is written once the parse has finished, whatever its outcome.
/// Sink write errors are ignored; tracing is a diagnostic aid.
pub fn trace_parse<'src, P>(
    parser: &P,
    input: &'src str,
    sink: &mut dyn io::Write,
) -> PResult<P::Output>
where
    P: Parser<'src> + ?Sized,
{
    let mut scanner = Scanner::with_trace(input);
    let result = parser.parse(&mut scanner);
    if let Some(trace) = scanner.take_trace() {
        let _ = sink.write_all(trace.as_bytes());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Match, literal};

    #[test]
    fn test_parse_first_allows_trailing_input() {
        assert_eq!(parse_first(&literal("ab"), "abc"), Ok("ab"));
    }

    #[test]
    fn test_parse_requires_full_consumption() {
        assert_eq!(parse(&literal("abc"), "abc"), Ok("abc"));

        let failure = parse(&literal("abc"), "abc extra").unwrap_err();
        assert_eq!(failure.message(), "expected end of stream");
        assert_eq!(failure.location().offset, 3);
        assert_eq!(failure.location().column, 3);
    }

    #[test]
    fn test_parse_reports_parser_failure_first() {
        let failure = parse(&literal("abc"), "xyz extra").unwrap_err();
        assert_eq!(failure.message(), r#"literal "abc" did not match"#);
    }

    #[test]
    fn test_parse_with_config_applies_limits() {
        fn nested(s: &mut Scanner<'_>) -> PResult<()> {
            if s.parse(&literal("(")).is_ok() {
                s.parse(&nested)?;
                s.parse(&literal(")"))?;
            }
            Ok(())
        }

        let input = "((((()))))";
        assert!(parse(&nested, input).is_ok());

        // the limit cuts nesting short, so the closing parens are unexpected
        let config = ParseConfig::new().with_max_recursion_depth(3);
        let failure = parse_with_config(&nested, input, config).unwrap_err();
        assert_eq!(failure.message(), r#"literal ")" did not match"#);

        let config = ParseConfig::new().disable_recursion_limit();
        assert!(parse_with_config(&nested, input, config).is_ok());
    }

    #[test]
    fn test_trace_parse_writes_to_sink() {
        let digits = Match::new("[0-9]+").unwrap();
        let mut out = Vec::new();
        let value = trace_parse(&digits, "42", &mut out);
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text, "matching pattern \"[0-9]+\" against \"42\"\n");
        assert_eq!(value, Ok("42"));
    }

    #[test]
    fn test_trace_parse_value_outlives_sink_borrow() {
        let mut out = Vec::new();
        let value = trace_parse(&literal("ab"), "abc", &mut out);
        // the trace is readable while the borrowed result is still alive
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains(r#"matching literal "ab" against "abc""#));
        assert_eq!(value, Ok("ab"));
    }

    #[test]
    fn test_trace_parse_writes_trace_on_failure() {
        let mut out = Vec::new();
        let failure = trace_parse(&literal("x"), "abc", &mut out).unwrap_err();
        assert_eq!(failure.message(), r#"literal "x" did not match"#);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "matching literal \"x\" against \"abc\"\n"
        );
    }
}
