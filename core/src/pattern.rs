//! Regular-expression primitives.
//!
//! Patterns are anchored at the scanner's position: a match further along
//! the input does not count. Compile them once and share them, e.g. in a
//! `once_cell::sync::Lazy` static; a compiled pattern is immutable and safe
//! to use from concurrent parses.

use regex::Regex;

use crate::{Error, Failure, PResult, Parser, Scanner};

#[derive(Debug, Clone)]
struct Anchored {
    regex: Regex,
    source: String,
}

impl Anchored {
    fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{})", pattern))?,
            source: pattern.to_owned(),
        })
    }

    fn mismatch(&self, scanner: &Scanner<'_>) -> Failure {
        Failure::new(
            scanner.location(),
            Error::PatternMismatch {
                pattern: self.source.clone(),
            },
        )
    }
}

/// Matches a pattern at the current position and returns the matched span.
#[derive(Debug, Clone)]
pub struct Match {
    pattern: Anchored,
}

impl Match {
    /// Compiles `pattern`, anchored to the scanner position.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Anchored::new(pattern)?,
        })
    }

    /// Anchors an already compiled regex. Its flags and syntax carry over.
    pub fn from_regex(regex: &Regex) -> Result<Self, regex::Error> {
        Self::new(regex.as_str())
    }

    /// The pattern as written by the caller, without the anchor.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern.source
    }
}

impl<'src> Parser<'src> for Match {
    type Output = &'src str;

    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<&'src str> {
        scanner.trace_matching(format_args!("pattern {:?}", self.pattern.source));
        let rest = scanner.remaining();
        match self.pattern.regex.find(rest) {
            Some(found) => {
                scanner.advance(found.end());
                Ok(found.as_str())
            }
            None => Err(self.pattern.mismatch(scanner)),
        }
    }
}

/// Like [`Match`], but returns the whole match followed by every capture group.
///
/// Groups that did not take part in the match yield `""`.
#[derive(Debug, Clone)]
pub struct Submatches {
    pattern: Anchored,
}

impl Submatches {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Anchored::new(pattern)?,
        })
    }

    pub fn from_regex(regex: &Regex) -> Result<Self, regex::Error> {
        Self::new(regex.as_str())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern.source
    }
}

impl<'src> Parser<'src> for Submatches {
    type Output = Vec<&'src str>;

    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<Vec<&'src str>> {
        scanner.trace_matching(format_args!("pattern {:?}", self.pattern.source));
        let rest = scanner.remaining();
        let Some(captures) = self.pattern.regex.captures(rest) else {
            return Err(self.pattern.mismatch(scanner));
        };

        let groups: Vec<&'src str> = captures
            .iter()
            .map(|group| group.map_or("", |m| m.as_str()))
            .collect();
        scanner.advance(groups[0].len());
        Ok(groups)
    }
}
