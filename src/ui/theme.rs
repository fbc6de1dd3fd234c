//! Design tokens for the werdegang CLI.
//!
//! Design constraints:
//! - Only 5 semantic colors (`colors::*`)
//! - All icons and borders must be sourced from this module

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const BULLET: &str = "•";

    // Command identifiers (used in headers).
    pub const CHECK: &str = "🔍";
    pub const EXPORT: &str = "📦";
    pub const CONTACT: &str = "✉";
    pub const LANGUAGE: &str = "🌐";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const BULLET: &str = "-";

    pub const CHECK: &str = "[CHECK]";
    pub const EXPORT: &str = "[EXPORT]";
    pub const CONTACT: &str = "[@]";
    pub const LANGUAGE: &str = "[LANG]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
