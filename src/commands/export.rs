use std::path::PathBuf;

use anyhow::Result;
use werdegang::content::ContentSource;
use werdegang::export::{execute_export, plan_export, ExportOptions, Manifest};
use werdegang::{Config, Content, ExportFormat};

use crate::ui::context::UiContext;
use crate::ui::views::export::{render_export_header, render_export_summary, render_plan};

pub struct ExportArgs {
    pub content: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub out: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
}

pub fn cmd_export(args: ExportArgs, config: &Config, ui: &UiContext) -> Result<()> {
    let source = ContentSource::from_flag(args.content.as_deref());
    let format = args.format.unwrap_or(config.export.format);
    let out_dir = args
        .out
        .or_else(|| config.export.out.clone())
        .unwrap_or_else(|| PathBuf::from("dist"));

    let options = ExportOptions {
        format,
        force: args.force,
        dry_run: args.dry_run,
    };

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "export",
            "source": super::source_label(&source),
            "out": out_dir.display().to_string(),
            "dry_run": args.dry_run,
        }))?;
    } else {
        print!(
            "{}",
            render_export_header(
                &super::source_label(&source),
                &out_dir.display().to_string(),
                args.dry_run,
                ui
            )
        );
        println!();
    }

    // Export only ever sees validated content.
    let content = Content::load(&source)?;
    let mut manifest = Manifest::load(&out_dir)?;
    let plan = plan_export(&content, &out_dir, &manifest, &options)?;
    let result = execute_export(&plan, &out_dir, &mut manifest, &options)?;

    if ui.json {
        let mut out = std::io::stdout().lock();
        for file in &plan {
            crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "file",
                    "name": file.name,
                    "status": file.status.as_str(),
                }),
            )?;
        }
        crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "export",
                "success": result.is_success(),
                "written": result.written.len(),
                "unchanged": result.unchanged.len(),
                "skipped": result.skipped.len(),
            }),
        )?;
    } else {
        print!("{}", render_plan(&plan, ui));
        println!();
        print!("{}", render_export_summary(&result, args.dry_run, ui));
    }

    Ok(())
}
