use werdegang::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
        }
    }

    /// Usable text width for prose columns.
    pub fn text_width(&self) -> usize {
        (self.caps.width as usize).clamp(40, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, 0, None, false, &Config::default(), caps);
        assert!(!ui.color);
    }

    #[test]
    fn explicit_color_always_wins_over_ci() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(
            false,
            0,
            Some(ColorWhen::Always),
            false,
            &Config::default(),
            caps,
        );
        assert!(ui.color);
    }

    #[test]
    fn ascii_flag_disables_unicode() {
        let ui = UiContext::from_caps(false, 0, None, true, &Config::default(), tty_caps());
        assert!(!ui.unicode);
    }

    #[test]
    fn config_never_disables_color_on_tty() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        let ui = UiContext::from_caps(false, 0, None, false, &config, tty_caps());
        assert!(!ui.color);
    }

    #[test]
    fn text_width_is_clamped() {
        let narrow = TerminalCapabilities {
            width: 20,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, 0, None, false, &Config::default(), narrow);
        assert_eq!(ui.text_width(), 40);
    }
}
