//! Werdegang CLI - bilingual CV viewer and site-data exporter
//!
//! Usage: werdegang [COMMAND]
//!
//! Commands:
//!   show       Render the full CV or one project detail card
//!   skills     Render the skills wall
//!   contact    Show contact links
//!   languages  List available languages
//!   check      Validate the content documents
//!   export     Export the site data document

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use crate::cli::{Cli, Commands};
use crate::commands::export::ExportArgs;
use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.ascii, &config);

    match cli.command {
        Some(Commands::Show { lang, project }) => {
            commands::show::cmd_show(lang, project, &config, &ui)
        }
        Some(Commands::Skills { lang }) => commands::skills::cmd_skills(lang, &config, &ui),
        Some(Commands::Contact) => commands::contact::cmd_contact(&ui),
        Some(Commands::Languages) => commands::languages::cmd_languages(&ui),
        Some(Commands::Check {
            content,
            strict_warnings,
        }) => commands::check::cmd_check(content, strict_warnings, &ui),
        Some(Commands::Export {
            content,
            format,
            out,
            force,
            dry_run,
        }) => commands::export::cmd_export(
            ExportArgs {
                content,
                format,
                out,
                force,
                dry_run,
            },
            &config,
            &ui,
        ),
        None => {
            // Interactive browsing needs a real terminal on both ends.
            if !cli.json && std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
                commands::interactive::cmd_interactive(&config, &ui)
            } else {
                commands::show::cmd_show(None, None, &config, &ui)
            }
        }
    }
}
