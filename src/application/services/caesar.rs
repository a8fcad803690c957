//! Caesar cipher transform.
//!
//! Pure, total over all inputs, and stateless per character. ASCII letters
//! rotate within their case; everything else (digits, punctuation,
//! whitespace, non-ASCII) passes through unchanged, so character count,
//! case pattern and non-letter positions are preserved.

use serde_json::Value;

/// Shift applied when the request carries no usable value.
pub const DEFAULT_SHIFT: i32 = 3;

/// Direction of the transform. Decode is the exact inverse of encode and is
/// kept internal; no route exposes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    Encode,
    Decode,
}

/// Applies a Caesar shift to `text`.
///
/// `shift_text(shift_text(x, s, Encode), s, Decode) == x` for any `x` and
/// integer `s`.
pub fn shift_text(text: &str, shift: i32, mode: CipherMode) -> String {
    let shift = match mode {
        CipherMode::Encode => shift,
        CipherMode::Decode => -shift,
    };

    text.chars().map(|c| shift_char(c, shift)).collect()
}

fn shift_char(c: char, shift: i32) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let rotated = ((c as u8 - base) as i32 + shift).rem_euclid(26) as u8;
    (base + rotated) as char
}

/// Coerces the raw `shift` request field to an effective shift.
///
/// Accepts a JSON number or a numeric string. Anything absent, unparsable
/// or outside [1, 25] silently becomes [`DEFAULT_SHIFT`] rather than
/// rejecting the request.
pub fn effective_shift(raw: Option<&Value>) -> i32 {
    let parsed = match raw {
        None => return DEFAULT_SHIFT,
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(s) if (1..=25).contains(&s) => s as i32,
        _ => DEFAULT_SHIFT,
    }
}
