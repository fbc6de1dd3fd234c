//! CLI argument parsing
//!
//! Global flags (--json, --color, --ascii, --verbose) are inherited by
//! all subcommands. Running without a subcommand opens the interactive
//! browser on a terminal and prints the full CV otherwise.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use werdegang::{ExportFormat, Lang};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Werdegang - bilingual CV viewer and site-data exporter
#[derive(Parser, Debug)]
#[command(name = "werdegang")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'werdegang' without arguments for an interactive browser.")]
pub struct Cli {
    /// Print records as JSON (NDJSON events for check/export)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Force ASCII icons and borders
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full CV, or one project detail card
    Show {
        /// Display language (defaults to the content's defaultLang)
        #[arg(short, long, value_enum)]
        lang: Option<Lang>,

        /// Project slug for the detail card
        #[arg(short, long, value_name = "SLUG")]
        project: Option<String>,
    },

    /// Render the skills wall
    Skills {
        /// Display language (defaults to the content's defaultLang)
        #[arg(short, long, value_enum)]
        lang: Option<Lang>,
    },

    /// Show contact links
    Contact,

    /// List available languages and the default
    Languages,

    /// Validate the content documents
    Check {
        /// External content directory (defaults to the embedded snapshot)
        #[arg(long, value_name = "DIR")]
        content: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Export the site data document
    Export {
        /// External content directory (defaults to the embedded snapshot)
        #[arg(long, value_name = "DIR")]
        content: Option<PathBuf>,

        /// Artifact format
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Overwrite artifacts that were edited by hand
        #[arg(long)]
        force: bool,

        /// Show what would be written without touching the disk
        #[arg(long)]
        dry_run: bool,
    },
}
