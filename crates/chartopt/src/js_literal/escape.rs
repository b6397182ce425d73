use std::fmt::Write;

/// Escape a string for a double-quoted JSON/JS string literal.
///
/// Escapes the quote, the backslash, and all control characters below
/// U+0020 (named escapes where JSON has them, `\u00XX` otherwise). All
/// other characters, including non-ASCII, pass through unchanged.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        if !needs_escape(ch) {
            continue;
        }
        out.push_str(&s[start..i]);
        push_escaped(&mut out, ch);
        start = i + ch.len_utf8();
    }
    out.push_str(&s[start..]);
    out
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '"' | '\\') || ch < '\u{0020}'
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\u{0008}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{000C}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        c => {
            // Remaining control characters have no short form.
            let _ = write!(out, "\\u{:04x}", c as u32);
        }
    }
}
