//! Text processing utilities.
//!
//! This module contains helpers for cleaning generated text and fitting
//! mixed-width (CJK and emoji) strings into terminal cells.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn code_fence_regex() -> Option<&'static Regex> {
    static FENCE: OnceLock<Option<Regex>> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"(?s)^\s*```[A-Za-z]*\s*\n(.*?)\n?\s*```\s*$").ok())
        .as_ref()
}

/// Return the body of a Markdown code fence, or the trimmed text itself if
/// it is not fenced.
///
/// Models occasionally wrap JSON output in ```json fences even when asked
/// for raw JSON.
///
pub fn strip_code_fence(text: &str) -> &str {
    let body = code_fence_regex()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1));
    match body {
        Some(body) => body.as_str().trim(),
        None => text.trim(),
    }
}

/// Truncate text so it occupies at most `max_width` terminal columns,
/// appending an ellipsis when anything was cut.
///
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}
