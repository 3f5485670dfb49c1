//! Chained parse diagnostics.

use core::fmt;

use crate::Position;

/// A parse rejection at a point in the input.
///
/// A failure optionally owns the lower-level failure that explains it, so a
/// rejected rule reads as a trail from the most general rule down to the
/// exact mismatch:
///
/// ```text
/// at line 1, col 4: invalid value because at line 1, col 4: literal "(" did not match
/// ```
///
/// Causes are only ever attached from failures that were already returned,
/// so the chain is acyclic and finite.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    location: Position,
    message: String,
    cause: Option<Box<Failure>>,
}

impl Failure {
    /// Creates a failure without a cause.
    pub fn new(location: Position, message: impl fmt::Display) -> Self {
        Self {
            location,
            message: message.to_string(),
            cause: None,
        }
    }

    /// Attaches (or replaces) the failure that explains this one.
    #[must_use]
    pub fn with_cause(mut self, cause: Option<Failure>) -> Self {
        self.cause = cause.map(Box::new);
        self
    }

    #[inline]
    pub fn location(&self) -> Position {
        self.location
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }

    /// Iterates from this failure through every cause, most general first.
    pub fn chain(&self) -> impl Iterator<Item = &Failure> {
        core::iter::successors(Some(self), |f| f.cause())
    }

    /// The most specific failure in the chain.
    pub fn root_cause(&self) -> &Failure {
        self.chain().last().unwrap_or(self)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at line {}, col {}: {}",
            self.location.line, self.location.column, self.message
        )?;
        if let Some(cause) = &self.cause {
            write!(f, " because {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
