//! Width-aware greedy word wrapping for prose columns.
//!
//! German summaries carry long compound words; widths are measured with
//! `unicode-width` so umlauts and wide glyphs pad correctly.

use unicode_width::UnicodeWidthStr;

/// Wrap text to the given display width. A word wider than the column
/// gets its own line rather than being split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap and prefix every line, keeping continuation lines aligned.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let indent_width = indent.width();
    let inner = width.saturating_sub(indent_width).max(1);

    let mut out = String::new();
    for line in wrap(text, inner) {
        out.push_str(indent);
        out.push_str(&line);
        out.push('\n');
    }
    out
}
