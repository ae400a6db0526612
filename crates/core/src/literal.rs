//! JSON literal helpers shared by the scalar codecs.
//!
//! Quoting follows the HTML-safe escaping the wire format was established
//! with: `<`, `>`, `&`, U+2028 and U+2029 are always written as `\uXXXX`, and
//! each byte of invalid UTF-8 becomes a `\ufffd` escape.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

/// The JSON `null` token
pub const NULL: &[u8] = b"null";
/// The JSON `true` token
pub const TRUE: &[u8] = b"true";
/// The JSON `false` token
pub const FALSE: &[u8] = b"false";

/// Compact JSON output that additionally escapes `<`, `>`, `&`, U+2028 and
/// U+2029 inside strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if matches!(c, '<' | '>' | '&' | '\u{2028}' | '\u{2029}') {
                writer.write_all(fragment[start..i].as_bytes())?;
                write!(writer, "\\u{:04x}", c as u32)?;
                start = i + c.len_utf8();
            }
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Quote text as a JSON string literal.
pub fn quote(s: &str) -> Result<String, serde_json::Error> {
    let mut out = Vec::with_capacity(s.len() + 2);
    s.serialize(&mut serde_json::Serializer::with_formatter(
        &mut out,
        HtmlSafeFormatter,
    ))?;
    String::from_utf8(out).map_err(serde::ser::Error::custom)
}

/// Quote raw bytes as a JSON string literal, reinterpreting them as text.
pub fn quote_bytes(bytes: &[u8]) -> Result<String, serde_json::Error> {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                push_escaped(&mut out, valid)?;
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                push_escaped(&mut out, std::str::from_utf8(valid).unwrap_or_default())?;
                let bad = e.error_len().unwrap_or(after.len());
                for _ in 0..bad {
                    out.push_str("\\ufffd");
                }
                rest = &after[bad..];
            }
        }
    }
    out.push('"');
    Ok(out)
}

// Escaped contents of `s`, without the surrounding quotes.
fn push_escaped(out: &mut String, s: &str) -> Result<(), serde_json::Error> {
    let quoted = quote(s)?;
    out.push_str(&quoted[1..quoted.len() - 1]);
    Ok(())
}

/// Unescape a JSON string literal.
pub fn unquote(literal: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::from_slice::<String>(literal)
}

/// Format a float the way the wire format expects.
///
/// Shortest round-trip digits; plain decimal for `1e-6 <= |v| < 1e21`,
/// exponent form (`1e+21`, `1.5e-7`) outside that range. Returns `None` for
/// NaN and infinities, which JSON cannot carry.
pub fn format_float(v: f64) -> Option<String> {
    if !v.is_finite() {
        return None;
    }
    let abs = v.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        let mut s = format!("{:e}", v);
        if let Some(pos) = s.find('e') {
            if !s[pos + 1..].starts_with('-') {
                s.insert(pos + 1, '+');
            }
        }
        Some(s)
    } else {
        Some(format!("{}", v))
    }
}
