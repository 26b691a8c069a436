//! Literal classification: raw text tokens to typed scalar values.
//!
//! Classification applies a fixed, ordered rule list and the first match
//! wins. `String` is the unconditional fallback, so classification is
//! total. Hex and octal tokens are canonicalized to decimal text; float
//! tokens keep their source spelling (including the `f` suffix, which the
//! emitter relies on for `float` constants).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::scalar::ScalarKind;

/// A classified literal: the inferred kind plus its canonical text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: ScalarKind,
    pub value: String,
}

impl Classified {
    fn new(kind: ScalarKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Hexadecimal literal with a mandatory `0x` prefix.
static HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x([0-9a-fA-F]+)$").expect("Invalid hex literal regex"));

/// Octal literal: a leading zero followed by octal digits.
static OCTAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0([0-7]+)$").expect("Invalid octal literal regex"));

/// 32-bit float literal: a decimal with an `f` suffix. Digit classes are
/// spelled out because `\d` would also match non-ASCII digits.
static FLOAT32_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.[0-9]*|\.[0-9]+)f$").expect("Invalid float literal regex")
});

/// 64-bit float literal: a decimal containing a dot, no suffix.
static FLOAT64_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.[0-9]*|\.[0-9]+)$").expect("Invalid double literal regex")
});

/// Unsigned decimal literal.
static UNSIGNED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid unsigned literal regex"));

/// Negative decimal literal.
static SIGNED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[0-9]+$").expect("Invalid signed literal regex"));

/// Classify a raw text token into the smallest kind that represents it.
///
/// Integer parses that overflow 64 bits fall through the remaining rules
/// and land on `String`; arbitrary precision is out of scope.
pub fn classify(token: &str) -> Classified {
    if let Some(caps) = HEX_REGEX.captures(token) {
        if let Ok(value) = u64::from_str_radix(&caps[1], 16) {
            return Classified::new(ScalarKind::smallest_unsigned(value), value.to_string());
        }
    }
    if let Some(caps) = OCTAL_REGEX.captures(token) {
        if let Ok(value) = u64::from_str_radix(&caps[1], 8) {
            return Classified::new(ScalarKind::smallest_unsigned(value), value.to_string());
        }
    }
    if FLOAT32_REGEX.is_match(token) {
        return Classified::new(ScalarKind::F32, token);
    }
    if FLOAT64_REGEX.is_match(token) {
        return Classified::new(ScalarKind::F64, token);
    }
    if UNSIGNED_REGEX.is_match(token) {
        if let Ok(value) = token.parse::<u64>() {
            return Classified::new(ScalarKind::smallest_unsigned(value), value.to_string());
        }
    }
    if SIGNED_REGEX.is_match(token) {
        if let Ok(value) = token.parse::<i64>() {
            return Classified::new(ScalarKind::smallest_signed_negative(value), value.to_string());
        }
    }
    if token == "true" || token == "false" {
        return Classified::new(ScalarKind::Bool, token);
    }
    Classified::new(ScalarKind::String, token)
}

/// Direct mapping for structured document scalars, no text re-parsing:
/// booleans, 64-bit integers and doubles keep their parsed width, strings
/// keep their text.
///
/// Returns `None` for aggregate values and `null`.
pub fn classify_scalar(value: &Value) -> Option<Classified> {
    match value {
        Value::Bool(b) => Some(Classified::new(ScalarKind::Bool, b.to_string())),
        Value::Number(n) => Some(if let Some(u) = n.as_u64() {
            Classified::new(ScalarKind::U64, u.to_string())
        } else if let Some(i) = n.as_i64() {
            Classified::new(ScalarKind::I64, i.to_string())
        } else {
            Classified::new(ScalarKind::F64, n.to_string())
        }),
        Value::String(s) => Some(Classified::new(ScalarKind::String, s.clone())),
        _ => None,
    }
}

/// Classification as the tree builder applies it: booleans take the
/// direct mapping, numbers and document strings go through their text
/// form so integer literals get the smallest width that fits.
///
/// Returns `None` for aggregate values and `null`, which the tree builder
/// rejects before classification.
pub fn classify_document_scalar(value: &Value) -> Option<Classified> {
    match value {
        Value::Bool(_) => classify_scalar(value),
        Value::Number(n) => Some(classify(&canonical_number_text(n))),
        Value::String(s) => Some(classify(s)),
        _ => None,
    }
}

/// Decimal text of a document number. JSON5 parsers may hand integer
/// literals over as doubles; an integral double in integer range gets
/// integer text so it classifies as the integer the document spelled.
pub(crate) fn canonical_number_text(n: &serde_json::Number) -> String {
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 => {
            format!("{}", f as u64)
        }
        Some(f) if f.fract() == 0.0 && f < 0.0 && f >= i64::MIN as f64 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}
