use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Bullet,
    Check,
    Export,
    Contact,
    Language,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Export) => theme::icons::EXPORT,
            (true, Icon::Contact) => theme::icons::CONTACT,
            (true, Icon::Language) => theme::icons::LANGUAGE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Export) => theme::icons_ascii::EXPORT,
            (false, Icon::Contact) => theme::icons_ascii::CONTACT,
            (false, Icon::Language) => theme::icons_ascii::LANGUAGE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Bullet => theme::colors::DIM,
            Icon::Check | Icon::Export | Icon::Contact | Icon::Language => {
                theme::colors::INFO
            }
        };
        format!("{}", s.with(color))
    }
}
