use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Wrap `s` at word boundaries so no line is wider than `width` columns
///
/// Words longer than a line are split by character. Existing line breaks are
/// kept.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = vec![];
    for paragraph in s.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let gap = usize::from(!line.is_empty());
            if line.width() + gap + word.width() <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                continue;
            }
            if !line.is_empty() {
                lines.push(mem::take(&mut line));
            }
            for c in word.chars() {
                if line.width() + c.width().unwrap_or(0) > width {
                    lines.push(mem::take(&mut line));
                }
                line.push(c);
            }
        }
        lines.push(line);
    }
    lines
}

/// Keep at most `max_height` lines, marking the cut with an ellipsis line
pub fn truncate_lines(mut lines: Vec<String>, max_height: usize) -> Vec<String> {
    if lines.len() <= max_height {
        return lines;
    }
    if max_height == 0 {
        return vec![];
    }
    lines.truncate(max_height - 1);
    lines.push(ELLIPSIS.to_string());
    lines
}

/// Shorten a single line to `width` columns, ending in an ellipsis when cut
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) + ELLIPSIS.width() > width {
            break;
        }
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}
