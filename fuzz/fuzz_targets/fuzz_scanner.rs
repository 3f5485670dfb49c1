#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tinyparsec::{Literal, Match, PResult, Position, Scanner, literal, skip_any};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    needle: String,
    skip: usize,
}

/// Partial progress then a possible failure, to exercise restores.
/// Returns the number of bytes consumed.
fn word_then_needle(s: &mut Scanner<'_>, word: &Match, needle: &Literal) -> PResult<usize> {
    let start = s.location().offset;
    s.parse(word)?;
    s.skip(&skip_any(" \n"));
    s.parse(needle)?;
    Ok(s.location().offset - start)
}

fuzz_target!(|input: Input| {
    let Ok(word) = Match::new("[a-z]*") else {
        return;
    };
    let needle = literal(input.needle.clone());

    let mut scanner = Scanner::new(&input.text);
    let mut skip = input.skip % (input.text.len() + 1);
    while !input.text.is_char_boundary(skip) {
        skip -= 1;
    }
    scanner.advance(skip);

    let before = scanner.location();
    assert_eq!(before, Position::START.advance(&input.text[..skip]));

    let attempt = |s: &mut Scanner<'_>| -> PResult<usize> { word_then_needle(s, &word, &needle) };

    let peeked = scanner.peek(&attempt);
    assert_eq!(scanner.location(), before);

    match scanner.parse(&attempt) {
        Ok(consumed) => {
            assert!(peeked);
            let text = &input.text[skip..skip + consumed];
            assert!(text.ends_with(input.needle.as_str()));
            assert_eq!(scanner.location(), before.advance(text));
            assert!(scanner.last_failure().is_none());
        }
        Err(failure) => {
            assert!(!peeked);
            assert_eq!(scanner.location(), before);
            assert_eq!(scanner.last_failure(), Some(&failure));
        }
    }
});
