use std::borrow::Cow;

use crate::{PResult, Parser, Scanner};

/// Consumes characters while they belong to a set. Never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkipAny {
    chars: Cow<'static, str>,
}

/// Creates a [`SkipAny`] over the characters of `chars`.
pub fn skip_any(chars: impl Into<Cow<'static, str>>) -> SkipAny {
    SkipAny {
        chars: chars.into(),
    }
}

impl<'src> Parser<'src> for SkipAny {
    type Output = ();

    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<()> {
        scanner.trace_matching(format_args!("any of {:?}", self.chars));
        let skipped: usize = scanner
            .remaining()
            .chars()
            .take_while(|c| self.chars.contains(*c))
            .map(char::len_utf8)
            .sum();
        scanner.advance(skipped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_skips_members() {
        let mut scanner = Scanner::new(" \t\n x");
        assert!(scanner.skip(&skip_any(" \t\n")));
        assert_eq!(
            scanner.location(),
            Position {
                offset: 4,
                line: 2,
                column: 1
            }
        );
        assert_eq!(scanner.remaining(), "x");
    }

    #[test]
    fn test_stops_at_eof() {
        let mut scanner = Scanner::new("   ");
        assert_eq!(scanner.parse(&skip_any(" ")), Ok(()));
        assert!(scanner.is_eof());
    }

    #[test]
    fn test_succeeds_without_members() {
        let mut scanner = Scanner::new("abc");
        assert_eq!(scanner.parse(&skip_any(" ")), Ok(()));
        assert_eq!(scanner.location(), Position::START);
    }

    #[test]
    fn test_multibyte_members() {
        let mut scanner = Scanner::new("ééa");
        scanner.parse(&skip_any("é")).unwrap();
        assert_eq!(scanner.location().offset, 4);
        assert_eq!(scanner.location().column, 2);
    }
}
