use anyhow::Result;

use crate::ui::blocks::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_contact(ui: &UiContext) -> Result<()> {
    let content = super::load_content(None)?;

    if ui.json {
        println!("{}", serde_json::to_string_pretty(&content.contact)?);
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Contact, "Contact");
    header.add("GitHub", &content.contact.github);
    header.add("LinkedIn", &content.contact.linkedin);
    header.add(
        "Email",
        content
            .contact
            .email
            .strip_prefix("mailto:")
            .unwrap_or(&content.contact.email),
    );
    print!("{}", header.render(ui.color, ui.unicode));

    Ok(())
}
