//! Text helpers for server-provided strings
//!
//! Anything the server sends (login reply, headers, cells) is printed into
//! the terminal, so escape sequences are removed before rendering.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Matches CSI sequences (`ESC [ ... letter`) and OSC sequences (`ESC ] ... BEL`)
static ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[a-zA-Z]|\x1b\][^\x07]*\x07").unwrap()
});

/// Strip terminal escape sequences and stray control characters.
///
/// Newlines and tabs are kept so multi-line replies still wrap.
pub fn sanitize(s: &str) -> String {
    ESCAPE_REGEX
        .replace_all(s, "")
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Display width of a string in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `width` cells, marking the cut with "..."
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    let budget = width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if width >= 3 {
        out.push_str("...");
    }
    out
}

/// Left-align `s` in a field of `width` cells
pub fn pad(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    let fill = width.saturating_sub(display_width(&truncated));
    format!("{}{}", truncated, " ".repeat(fill))
}
