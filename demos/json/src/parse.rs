//! JSON Grammar
//!
//! One scanner function per production. Every rule skips the whitespace in
//! front of it, so callers never have to.

use once_cell::sync::Lazy;
use tinyparsec::{Failure, Match, PResult, Position, Scanner, literal};

use crate::ast::{JsonObject, JsonValue};
use crate::escape::unescape;

#[allow(clippy::expect_used)]
static NUMBER: Lazy<Match> = Lazy::new(|| {
    Match::new(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .expect("number pattern init failed")
});

#[allow(clippy::expect_used)]
static STRING_CHARS: Lazy<Match> = Lazy::new(|| {
    Match::new(r#"(?:\\["\\/bfnrt]|\\u[0-9a-fA-F]{4}|[^\\"\p{Cc}])*"#)
        .expect("string pattern init failed")
});

#[allow(clippy::expect_used)]
static WHITESPACE: Lazy<Match> =
    Lazy::new(|| Match::new(r"[\p{Zs}\t\r\n]*").expect("whitespace pattern init failed"));

fn ws(s: &mut Scanner<'_>) {
    s.skip(&*WHITESPACE);
}

// ANCHOR: parse_impl
/// A complete document: one value with optional surrounding whitespace.
pub fn document(s: &mut Scanner<'_>) -> PResult<JsonValue> {
    let root = s.parse(&value)?;
    ws(s);
    Ok(root)
}

pub fn value(s: &mut Scanner<'_>) -> PResult<JsonValue> {
    ws(s);
    if s.peek(&literal("\"")) {
        return s.parse(&string).map(JsonValue::String);
    }
    if s.peek(&literal("{")) {
        return s.parse(&object).map(JsonValue::Object);
    }
    if s.peek(&literal("[")) {
        return s.parse(&array).map(JsonValue::Array);
    }
    if let Ok(n) = s.parse(&number) {
        return Ok(JsonValue::Number(n));
    }
    for (keyword, constant) in [
        ("true", JsonValue::Bool(true)),
        ("false", JsonValue::Bool(false)),
        ("null", JsonValue::Null),
    ] {
        if s.parse(&literal(keyword)).is_ok() {
            return Ok(constant);
        }
    }
    Err(s.fail("unable to parse value"))
}

pub fn object(s: &mut Scanner<'_>) -> PResult<JsonObject> {
    ws(s);
    s.parse(&literal("{"))?;
    ws(s);
    let mut obj = JsonObject::new();
    if s.parse(&literal("}")).is_ok() {
        return Ok(obj);
    }
    loop {
        ws(s);
        let key_start = s.location();
        let key = s.parse(&string)?;
        if obj.contains_key(&key) {
            return Err(duplicate_key(s, key_start, &key));
        }
        ws(s);
        s.parse(&literal(":"))?;
        let item = s.parse(&value)?;
        obj.insert(key, item)
            .map_err(|(key, _)| duplicate_key(s, key_start, &key))?;
        ws(s);
        if s.parse(&literal(",")).is_err() {
            break;
        }
    }
    s.parse(&literal("}"))?;
    Ok(obj)
}

fn duplicate_key(s: &Scanner<'_>, key_start: Position, key: &str) -> Failure {
    s.fail_at(key_start, format_args!("duplicate key {key:?}"))
}

pub fn array(s: &mut Scanner<'_>) -> PResult<Vec<JsonValue>> {
    ws(s);
    s.parse(&literal("["))?;
    ws(s);
    let mut items = Vec::new();
    if s.parse(&literal("]")).is_ok() {
        return Ok(items);
    }
    loop {
        items.push(s.parse(&value)?);
        ws(s);
        if s.parse(&literal(",")).is_err() {
            break;
        }
    }
    s.parse(&literal("]"))?;
    Ok(items)
}

pub fn string(s: &mut Scanner<'_>) -> PResult<String> {
    s.parse(&literal("\""))?;
    // matches the empty string, so this only fails on a recursion limit
    let raw = s.parse(&*STRING_CHARS)?;
    let text = unescape(raw).map_err(|e| s.fail(e))?;
    if s.parse(&literal("\"")).is_err() {
        return Err(s.fail("invalid character in string literal"));
    }
    Ok(text)
}

pub fn number(s: &mut Scanner<'_>) -> PResult<f64> {
    let Ok(text) = s.parse(&*NUMBER) else {
        return Err(s.fail("not a valid number"));
    };
    text.parse::<f64>().map_err(|e| s.fail(e))
}
// ANCHOR_END: parse_impl
