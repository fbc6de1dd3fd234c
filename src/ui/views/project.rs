//! Single project detail card.

use werdegang::{Content, Lang, Project};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::translate::tr;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::wrap::wrap;

pub fn render_project_card(
    content: &Content,
    project: &Project,
    lang: Lang,
    ui: &UiContext,
) -> String {
    let table = &content.ui;
    let width = ui.text_width().saturating_sub(6);
    let bullet = Icon::Bullet.colored(ui.color, ui.unicode);

    let title = format!(
        "{} {}",
        ColoredText::info(project.role.get(lang)).bold().render(ui.color),
        ColoredText::dim(format!("[{}]", project.id)).render(ui.color),
    );
    let mut b = Box::with_title(title).style(BoxStyle::Info);

    b.add_line(label_value(
        tr(table, lang, "project.company"),
        &project.company,
        ui,
    ));
    b.add_line(label_value(
        tr(table, lang, "project.timespan"),
        project.timespan.get(lang),
        ui,
    ));

    b.add_empty();
    b.add_line(label(tr(table, lang, "project.summary"), ui));
    for line in wrap(project.summary.get(lang), width) {
        b.add_line(format!("  {}", line));
    }

    b.add_empty();
    b.add_line(label(tr(table, lang, "project.responsibilities"), ui));
    for item in project.responsibilities.get(lang) {
        let mut lines = wrap(item, width.saturating_sub(2)).into_iter();
        if let Some(first) = lines.next() {
            b.add_line(format!("  {} {}", bullet, first));
        }
        for rest in lines {
            b.add_line(format!("    {}", rest));
        }
    }

    b.add_empty();
    b.add_line(label(tr(table, lang, "project.techstack"), ui));
    for line in wrap(&project.full_tech_stack.join(", "), width) {
        b.add_line(format!("  {}", line));
    }

    b.render(ui.color, ui.unicode)
}

fn label(text: &str, ui: &UiContext) -> String {
    ColoredText::plain(text).bold().render(ui.color)
}

fn label_value(label_text: &str, value: &str, ui: &UiContext) -> String {
    format!("{}: {}", label(label_text, ui), value)
}
