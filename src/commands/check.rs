use std::path::PathBuf;

use anyhow::Result;
use werdegang::checks::run_checks;
use werdegang::content::ContentSource;
use werdegang::{CheckStatus, Content};

use crate::ui::context::UiContext;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

pub fn cmd_check(
    content_dir: Option<PathBuf>,
    strict_warnings: bool,
    ui: &UiContext,
) -> Result<()> {
    let source = ContentSource::from_flag(content_dir.as_deref());
    let source_label = super::source_label(&source);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "source": source_label,
            "strict_warnings": strict_warnings,
        }))?;
    } else {
        print!(
            "{}",
            render_check_header(&source_label, strict_warnings, ui.color, ui.unicode)
        );
        println!();
    }

    // Parse without the load-time gate so the full report is shown.
    let content = Content::parse(&source)?;
    let report = run_checks(&content);

    let has_issues = if strict_warnings {
        report.errors() > 0 || report.warnings() > 0
    } else {
        report.errors() > 0
    };

    if ui.json {
        let mut out = std::io::stdout().lock();
        for check in &report.checks {
            let status = match check.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Warning => "warning",
                CheckStatus::Error => "error",
            };
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "check",
                    "section": check.section,
                    "name": check.name,
                    "status": status,
                    "message": check.message,
                    "recommendation": check.recommendation,
                    "details": check.details,
                }),
            )?;
        }
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "success": !has_issues,
                "passed": report.passes(),
                "warnings": report.warnings(),
                "errors": report.errors(),
            }),
        )?;
    } else {
        print!(
            "{}",
            render_check_report(&report, ui.verbose, ui.color, ui.unicode)
        );
        println!();
        print!(
            "{}",
            render_check_summary(&report, has_issues, ui.color, ui.unicode)
        );
    }

    if has_issues {
        std::process::exit(1);
    }

    Ok(())
}
