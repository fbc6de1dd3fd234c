//! Reusable render blocks shared by the views: command headers, report
//! items, and the closing summary box.

use werdegang::{CheckStatus, ContentCheck};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        out.push_str(&format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        ));
        for (label, value) in &self.items {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}

/// One check report line, with recommendation and detail lines.
pub fn render_report_item(
    check: &ContentCheck,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = match check.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let mut out = String::new();
    out.push_str(&format!("  {} {} - {}\n", icon, check.name, check.message));

    if let Some(rec) = &check.recommendation {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }

    if verbose {
        for detail in &check.details {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                detail
            ));
        }
    }

    out
}

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon) = if self.success {
            (BoxStyle::Success, Icon::Success)
        } else {
            (BoxStyle::Warning, Icon::Warning)
        };

        let title = if self.success {
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        } else {
            ColoredText::warning(self.title.as_str())
                .bold()
                .render(supports_color)
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title
        );

        let mut b = Box::with_title(header).style(style);
        b.add_empty();

        for (label, count) in &self.stats {
            b.add_line(format!("{} {}", count, label));
        }

        if !self.warnings.is_empty() {
            b.add_empty();
            for warning in &self.warnings {
                b.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
