//! Terminal text measurement.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::TextAlign;

const ELLIPSIS: char = '…';

/// Width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Width of one character; control characters count as zero.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to `max_width` cells, ending in `…` when anything was removed.
///
/// Wide characters are never split.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&ch| {
            used += char_width(ch);
            used <= budget
        })
        .collect();
    out.push(ELLIPSIS);
    out
}

/// Leading cells needed to place text of `text_width` inside `available_width`.
pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    let slack = available_width.saturating_sub(text_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
