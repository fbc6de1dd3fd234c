use werdegang::ContentReport;

use crate::ui::blocks::{render_report_item, CommandHeader, ResultSummary};
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    source: &str,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Werdegang Check");
    header.add("Source", source);
    if strict_warnings {
        header.add("Strict", "failing on warnings");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    report: &ContentReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    let mut current_section: Option<&str> = None;
    for check in &report.checks {
        if current_section != Some(check.section.as_str()) {
            if current_section.is_some() {
                out.push('\n');
            }
            out.push_str(&check.section);
            out.push('\n');
            current_section = Some(check.section.as_str());
        }

        out.push_str(&render_report_item(
            check,
            verbose > 0,
            supports_color,
            supports_unicode,
        ));
    }

    out
}

pub fn render_check_summary(
    report: &ContentReport,
    has_issues: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if has_issues {
        "Check FAILED"
    } else if report.warnings() > 0 {
        "Check passed with warnings"
    } else {
        "All checks passed"
    };

    let mut summary = if has_issues || report.warnings() > 0 {
        ResultSummary::partial(title)
    } else {
        ResultSummary::success(title)
    };

    summary.add_stat("passed", report.passes());
    summary.add_stat("warnings", report.warnings());
    summary.add_stat("errors", report.errors());
    summary.with_next_step("Run `werdegang export` to regenerate the site data");

    summary.render(supports_color, supports_unicode)
}
