//! Source positions.

use core::fmt;

/// A location within the input buffer.
///
/// `offset` is a byte offset and always lies on a `char` boundary. `line` is
/// 1-based, `column` is 0-based and counts code points (not graphemes).
///
/// Positions are plain values: advancing returns a new `Position` and never
/// mutates the original.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Byte offset from the start of the buffer.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column within the line, starting at 0.
    pub column: usize,
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 0,
    };

    /// Returns the position reached after consuming `consumed`.
    ///
    /// Every code point bumps `offset` by its UTF-8 width. A `'\n'` moves to
    /// the next line and resets the column, anything else bumps the column.
    #[must_use]
    pub fn advance(self, consumed: &str) -> Self {
        consumed.chars().fold(self, |mut pos, c| {
            pos.offset += c.len_utf8();
            if c == '\n' {
                pos.line += 1;
                pos.column = 0;
            } else {
                pos.column += 1;
            }
            pos
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}
