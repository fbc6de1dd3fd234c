//! Werdegang - bilingual CV content library
//!
//! Werdegang keeps a curated work history (projects, skills, contact
//! channels) and its UI string table in declarative TOML documents,
//! validates them at load time, and exposes the typed records to any
//! presentation layer - the bundled terminal viewer or a static site
//! build consuming the exported JSON/YAML.

pub mod checks;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod i18n;
pub mod models;

// Re-exports for convenience
pub use checks::{run_checks, CheckStatus, ContentCheck, ContentReport};
pub use config::{ColorMode, Config, ExportFormat};
pub use content::{Content, ContentSource};
pub use error::{ContentError, ContentResult};
pub use i18n::UiCatalog;
pub use models::{ContactLinks, Lang, Localized, Project};
