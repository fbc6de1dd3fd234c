use anyhow::Result;
use werdegang::{Config, Lang};

use crate::ui::context::UiContext;
use crate::ui::views::cv::render_cv;
use crate::ui::views::project::render_project_card;

pub fn cmd_show(
    lang: Option<Lang>,
    project: Option<String>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let content = super::load_content(None)?;
    let lang = super::resolve_lang(lang, config, &content);

    match project {
        Some(slug) => {
            let project = content
                .project(&slug)
                .ok_or(werdegang::ContentError::UnknownProject { id: slug })?;

            if ui.json {
                println!("{}", serde_json::to_string_pretty(project)?);
            } else {
                print!("{}", render_project_card(&content, project, lang, ui));
            }
        }
        None => {
            if ui.json {
                println!("{}", serde_json::to_string_pretty(&content.projects)?);
            } else {
                print!("{}", render_cv(&content, lang, ui));
            }
        }
    }

    Ok(())
}
