use anyhow::Result;
use werdegang::Lang;

use crate::ui::blocks::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_languages(ui: &UiContext) -> Result<()> {
    let content = super::load_content(None)?;
    let catalog = &content.ui;

    if ui.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "languages": catalog.languages,
                "defaultLang": catalog.default_lang,
            }))?
        );
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Language, "Languages");
    for lang in Lang::ALL {
        let name = catalog.language_name(lang).unwrap_or("?");
        let value = if lang == catalog.default_lang {
            format!("{} (default)", name)
        } else {
            name.to_string()
        };
        header.add(lang.code(), value);
    }
    print!("{}", header.render(ui.color, ui.unicode));

    Ok(())
}
