use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified diff of a pending artifact rewrite, for `export --dry-run -v`.
pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);

    let mut out = String::new();
    out.push_str(&color_header(&format!("--- a/{}", path), supports_color));
    out.push('\n');
    out.push_str(&color_header(&format!("+++ b/{}", path), supports_color));
    out.push('\n');

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        let value = change.value().trim_end_matches('\n');
        let line = format!("{sign} {value}");
        out.push_str(&color_line(&line, change.tag(), supports_color));
        out.push('\n');
    }

    out
}

fn color_header(s: &str, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    format!("{}", s.with(theme::colors::INFO))
}

fn color_line(s: &str, tag: ChangeTag, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    match tag {
        ChangeTag::Delete => format!("{}", s.with(theme::colors::ERROR)),
        ChangeTag::Insert => format!("{}", s.with(theme::colors::SUCCESS)),
        ChangeTag::Equal => format!("{}", s.with(theme::colors::DIM)),
    }
}
