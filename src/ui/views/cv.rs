//! The full CV view: hero, skills wall, project timeline, footer.
//!
//! All labels come from the UI string table through the fallback rule;
//! only the content itself is bilingual data.

use werdegang::{Content, Lang, Project};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::translate::tr;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::wrap::{wrap, wrap_indented};

pub fn render_cv(content: &Content, lang: Lang, ui: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&render_hero(content, lang, ui));
    out.push('\n');
    out.push_str(&render_skills_wall(content, lang, ui));
    out.push('\n');
    out.push_str(&render_timeline(content, lang, ui));
    out.push('\n');
    out.push_str(&render_footer(content, lang, ui));
    out
}

pub fn render_hero(content: &Content, lang: Lang, ui: &UiContext) -> String {
    let table = &content.ui;
    let width = ui.text_width().saturating_sub(4);

    let mut b = Box::with_title(
        ColoredText::info(tr(table, lang, "hero.name"))
            .bold()
            .render(ui.color),
    )
    .style(BoxStyle::Info);

    b.add_line(tr(table, lang, "hero.title"));
    b.add_empty();
    for line in wrap(tr(table, lang, "hero.tagline"), width) {
        b.add_line(ColoredText::dim(line).render(ui.color));
    }

    b.render(ui.color, ui.unicode)
}

pub fn render_skills_wall(content: &Content, lang: Lang, ui: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&render_section_title(
        tr(&content.ui, lang, "skills.title"),
        ui,
    ));

    let sep = if ui.unicode { " · " } else { " | " };
    let tags = content.skills.join(sep);
    out.push_str(&wrap_indented(&tags, ui.text_width(), "  "));
    out
}

pub fn render_timeline(content: &Content, lang: Lang, ui: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&render_section_title(
        tr(&content.ui, lang, "projects.title"),
        ui,
    ));

    for project in &content.projects {
        out.push_str(&render_timeline_entry(project, lang, ui));
        out.push('\n');
    }
    out
}

fn render_timeline_entry(project: &Project, lang: Lang, ui: &UiContext) -> String {
    let mut out = String::new();

    let heading = format!("{} @ {}", project.role.get(lang), project.company);
    out.push_str(&format!(
        "  {}\n",
        ColoredText::plain(heading).bold().render(ui.color)
    ));
    out.push_str(&format!(
        "  {}   {}\n",
        ColoredText::dim(project.timespan.get(lang)).render(ui.color),
        ColoredText::dim(format!("[{}]", project.id)).render(ui.color),
    ));

    out.push_str(&wrap_indented(
        project.summary.get(lang),
        ui.text_width(),
        "  ",
    ));

    let tech = ColoredText::info(project.key_tech.join(", ")).render(ui.color);
    out.push_str(&format!("  {}\n", tech));

    out
}

pub fn render_footer(content: &Content, lang: Lang, ui: &UiContext) -> String {
    format!(
        "{}\n",
        ColoredText::dim(tr(&content.ui, lang, "footer.copyright")).render(ui.color)
    )
}

fn render_section_title(title: &str, ui: &UiContext) -> String {
    let underline = if ui.unicode { "─" } else { "-" };
    format!(
        "{}\n{}\n",
        ColoredText::info(title).bold().render(ui.color),
        ColoredText::dim(underline.repeat(title.chars().count())).render(ui.color)
    )
}
