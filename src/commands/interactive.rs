//! Interactive browser: the default when werdegang runs on a terminal
//! with no subcommand.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Select};
use werdegang::{Config, Lang};

use crate::ui::context::UiContext;
use crate::ui::translate::tr;
use crate::ui::views::cv::render_skills_wall;
use crate::ui::views::project::render_project_card;

pub fn cmd_interactive(config: &Config, ui: &UiContext) -> Result<()> {
    let content = super::load_content(None)?;
    let mut lang = super::resolve_lang(None, config, &content);
    let theme = ColorfulTheme::default();

    loop {
        let catalog = &content.ui;
        let items = [
            tr(catalog, lang, "hero.cta"),
            tr(catalog, lang, "nav.language"),
            tr(catalog, lang, "skills.title"),
            tr(catalog, lang, "project.close"),
        ];

        let choice = Select::with_theme(&theme)
            .with_prompt(tr(catalog, lang, "hero.name"))
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => browse_projects(&content, lang, ui, &theme)?,
            1 => lang = select_language(&content, lang, &theme)?,
            2 => print!("{}", render_skills_wall(&content, lang, ui)),
            _ => break,
        }
    }

    Ok(())
}

fn browse_projects(
    content: &werdegang::Content,
    lang: Lang,
    ui: &UiContext,
    theme: &ColorfulTheme,
) -> Result<()> {
    let labels: Vec<String> = content
        .projects
        .iter()
        .map(|p| format!("{}  {} @ {}", p.timespan.get(lang), p.role.get(lang), p.company))
        .collect();

    let selection = FuzzySelect::with_theme(theme)
        .with_prompt(tr(&content.ui, lang, "projects.title"))
        .items(&labels)
        .default(0)
        .interact()?;

    let project = &content.projects[selection];
    print!("{}", render_project_card(content, project, lang, ui));
    Ok(())
}

fn select_language(
    content: &werdegang::Content,
    current: Lang,
    theme: &ColorfulTheme,
) -> Result<Lang> {
    let names: Vec<&str> = Lang::ALL
        .iter()
        .map(|l| content.ui.language_name(*l).unwrap_or(l.code()))
        .collect();
    let default = Lang::ALL.iter().position(|l| *l == current).unwrap_or(0);

    let selection = Select::with_theme(theme)
        .with_prompt(tr(&content.ui, current, "nav.language"))
        .items(&names)
        .default(default)
        .interact()?;

    Ok(Lang::ALL[selection])
}
