use anyhow::Result;
use werdegang::{Config, Lang};

use crate::ui::context::UiContext;
use crate::ui::views::cv::render_skills_wall;

pub fn cmd_skills(lang: Option<Lang>, config: &Config, ui: &UiContext) -> Result<()> {
    let content = super::load_content(None)?;
    let lang = super::resolve_lang(lang, config, &content);

    if ui.json {
        println!("{}", serde_json::to_string_pretty(&content.skills)?);
    } else {
        print!("{}", render_skills_wall(&content, lang, ui));
    }

    Ok(())
}
