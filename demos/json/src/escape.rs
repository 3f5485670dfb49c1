//! String escape decoding.

use std::str::Chars;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("invalid escape sequence \\{0}")]
    InvalidEscape(char),

    #[error("trailing backslash")]
    TrailingBackslash,

    #[error("truncated unicode escape")]
    TruncatedUnicode,

    #[error("invalid unicode escape {0:?}")]
    InvalidHex(String),

    #[error("invalid unicode character U+{0:04X}")]
    InvalidCodepoint(u32),
}

/// Resolves the escape sequences in the body of a string literal.
///
/// Surrogate pairs written as two `\u` escapes combine into one character;
/// a lone surrogate is an error.
pub fn unescape(raw: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let resolved = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => unicode(&mut chars)?,
            Some(other) => return Err(EscapeError::InvalidEscape(other)),
            None => return Err(EscapeError::TrailingBackslash),
        };
        out.push(resolved);
    }
    Ok(out)
}

fn hex4(chars: &mut Chars<'_>) -> Result<u32, EscapeError> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.chars().count() < 4 {
        return Err(EscapeError::TruncatedUnicode);
    }
    // from_str_radix would also accept a leading '+'
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EscapeError::InvalidHex(digits));
    }
    u32::from_str_radix(&digits, 16).map_err(|_| EscapeError::InvalidHex(digits))
}

fn unicode(chars: &mut Chars<'_>) -> Result<char, EscapeError> {
    let high = hex4(chars)?;
    if (0xD800..0xDC00).contains(&high) {
        if let Some(tail) = chars.as_str().strip_prefix("\\u") {
            let mut lookahead = tail.chars();
            let low = hex4(&mut lookahead)?;
            if (0xDC00..0xE000).contains(&low) {
                *chars = lookahead;
                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(code).ok_or(EscapeError::InvalidCodepoint(code));
            }
        }
    }
    char::from_u32(high).ok_or(EscapeError::InvalidCodepoint(high))
}
