use werdegang::export::{ExportResult, FileStatus, PlannedFile};

use crate::ui::blocks::{CommandHeader, ResultSummary};
use crate::ui::components::diff::render_unified_diff;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn render_export_header(
    source: &str,
    out_dir: &str,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let mut header = CommandHeader::new(Icon::Export, "Werdegang Export");
    header.add("Source", source);
    header.add("Out", out_dir);
    if dry_run {
        header.add("Mode", "dry run");
    }
    header.render(ui.color, ui.unicode)
}

pub fn render_plan(plan: &[PlannedFile], ui: &UiContext) -> String {
    let mut out = String::new();

    for file in plan {
        let icon = match file.status {
            FileStatus::Create | FileStatus::Update => Icon::Success,
            FileStatus::Unchanged => Icon::Bullet,
            FileStatus::SkippedModified => Icon::Warning,
        }
        .colored(ui.color, ui.unicode);

        out.push_str(&format!(
            "  {} {} {}\n",
            icon,
            file.status.as_str(),
            file.name
        ));

        if file.status == FileStatus::SkippedModified {
            out.push_str(&format!(
                "    {} edited by hand since last export; use --force to overwrite\n",
                Icon::Arrow.colored(ui.color, ui.unicode)
            ));
        }

        // Pending rewrites show their diff at -v.
        if ui.verbose > 0 && file.status == FileStatus::Update {
            if let Some(on_disk) = &file.on_disk {
                out.push_str(&render_unified_diff(
                    &file.name,
                    on_disk,
                    &file.content,
                    ui.color,
                ));
            }
        }
    }

    out
}

pub fn render_export_summary(result: &ExportResult, dry_run: bool, ui: &UiContext) -> String {
    let title = if !result.is_success() {
        "Export incomplete"
    } else if dry_run {
        "Dry run complete"
    } else {
        "Export complete"
    };

    let mut summary = if result.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    summary.add_stat("written", result.written.len());
    summary.add_stat("unchanged", result.unchanged.len());
    summary.add_stat("skipped", result.skipped.len());

    for name in &result.skipped {
        summary.add_warning(format!("{} kept its manual edits", name));
    }

    summary.render(ui.color, ui.unicode)
}
