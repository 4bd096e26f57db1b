//! Literal and comment formatting shared by the language renderers.

use confluent_core::errors::RenderError;
use confluent_core::types::{decimal_string, CommentStyle, Value};

/// Characters that end a line comment in at least one target language.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

/// Double-quoted string literal with backslash escapes. Valid in Java and Go.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Single-quoted string literal. Valid in JavaScript, TypeScript and Python.
pub fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Trailing comment with a leading space, e.g. ` // text`.
pub fn comment(style: CommentStyle, text: &str) -> String {
    match style {
        CommentStyle::Line => format!(" // {}", single_line(text)),
        CommentStyle::Block => format!(" /* {} */", text.replace("*/", "* /")),
    }
}

/// Trailing `#` comment, e.g. `  # text`.
pub fn hash_comment(text: &str) -> String {
    format!("  # {}", single_line(text))
}

/// Banner comment on a line of its own.
pub fn banner_line(style: CommentStyle, text: &str) -> String {
    comment(style, text).trim_start().to_string()
}

/// Joins the lines of `text` with single spaces. Every character that ends a
/// line in one of the target languages counts as a line break.
pub fn single_line(text: &str) -> String {
    text.split(LINE_TERMINATORS)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Java translates `\uXXXX` everywhere in a source file, comments included.
/// Pairs up the backslash in front of every `u` so no escape survives.
pub fn defuse_unicode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    for c in text.chars() {
        if c == 'u' && backslashes % 2 == 1 {
            out.push('\\');
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        out.push(c);
    }
    out
}

/// Decimal text of an integer that must fit into 32 bits.
pub fn int32(key: &str, value: i64) -> Result<String, RenderError> {
    if i32::try_from(value).is_err() {
        return Err(out_of_range(key, format!("{value} does not fit into a 32-bit int")));
    }
    Ok(value.to_string())
}

/// Decimal text of a value stored in single precision. Rejects values that
/// overflow to infinity or underflow to zero.
pub fn single_precision(key: &str, value: f64) -> Result<String, RenderError> {
    if !value.is_finite() {
        return Err(out_of_range(key, format!("{value} is not a finite number")));
    }
    if value.abs() > f64::from(f32::MAX) {
        return Err(out_of_range(key, format!("{value} exceeds single precision")));
    }
    if value != 0.0 && (value as f32) == 0.0 {
        return Err(out_of_range(key, format!("{value} underflows single precision")));
    }
    Ok(decimal_string(value))
}

/// Decimal text of a value stored in double precision.
pub fn double_precision(key: &str, value: f64) -> Result<String, RenderError> {
    if !value.is_finite() {
        return Err(out_of_range(key, format!("{value} is not a finite number")));
    }
    Ok(decimal_string(value))
}

pub fn unsupported(key: &str, value: &Value) -> RenderError {
    RenderError::UnsupportedValueKind {
        key: key.to_string(),
        kind: value.kind(),
    }
}

pub fn out_of_range(key: &str, message: String) -> RenderError {
    RenderError::ValueOutOfRange {
        key: key.to_string(),
        message,
    }
}
