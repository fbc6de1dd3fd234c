//! Command implementations for the werdegang binary.

pub mod check;
pub mod contact;
pub mod export;
pub mod interactive;
pub mod languages;
pub mod show;
pub mod skills;

use std::path::Path;

use werdegang::content::ContentSource;
use werdegang::{Config, Content, Lang};

/// CLI flag beats config beats the content's own default language.
pub fn resolve_lang(cli_lang: Option<Lang>, config: &Config, content: &Content) -> Lang {
    cli_lang
        .or(config.display.language)
        .unwrap_or(content.ui.default_lang)
}

/// Human-readable source label for command headers.
pub fn source_label(source: &ContentSource) -> String {
    match source {
        ContentSource::Embedded => "embedded".to_string(),
        ContentSource::Dir(dir) => dir.display().to_string(),
    }
}

/// Load config, printing non-fatal warnings (unknown keys) to stderr.
pub fn load_config() -> Config {
    let project_root = std::env::current_dir().ok();
    if let Some(root) = &project_root {
        let path = root.join("werdegang.toml");
        if path.exists() {
            if let Ok((config, warnings)) = Config::load_with_warnings(&path) {
                crate::ui::output::print_config_warnings(&path, &warnings);
                return config.with_env_overrides();
            }
        }
    }
    Config::load_or_default(project_root.as_deref())
}

/// Load and validate content for rendering/export commands.
pub fn load_content(dir: Option<&Path>) -> anyhow::Result<Content> {
    let source = ContentSource::from_flag(dir);
    Ok(Content::load(&source)?)
}
