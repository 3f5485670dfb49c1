use std::borrow::Cow;

use crate::{Error, Failure, PResult, Parser, Scanner};

/// Matches an exact piece of text.
///
/// Succeeds iff the remaining input starts with the literal, returning the
/// matched slice of the buffer. The empty literal always succeeds without
/// consuming anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    text: Cow<'static, str>,
}

/// Creates a [`Literal`] parser.
pub fn literal(text: impl Into<Cow<'static, str>>) -> Literal {
    Literal { text: text.into() }
}

impl Literal {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<'src> Parser<'src> for Literal {
    type Output = &'src str;

    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<&'src str> {
        scanner.trace_matching(format_args!("literal {:?}", self.text));
        let rest = scanner.remaining();
        let len = self.text.len();

        if rest.len() < len {
            return Err(Failure::new(
                scanner.location(),
                Error::UnexpectedEof {
                    literal: self.text.to_string(),
                },
            ));
        }
        if !rest.starts_with(&*self.text) {
            return Err(Failure::new(
                scanner.location(),
                Error::LiteralMismatch {
                    literal: self.text.to_string(),
                },
            ));
        }

        scanner.advance(len);
        Ok(&rest[..len])
    }
}
