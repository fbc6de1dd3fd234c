//! Content store: parses the four TOML documents into a `Content`
//! snapshot, either from the embedded copy or from an external
//! directory (`--content <dir>` editing workflow).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::checks::run_checks;
use crate::error::{ContentError, ContentResult};
use crate::i18n::UiCatalog;
use crate::models::{ContactLinks, Project};

// Embedded snapshot, compiled in. The test suite proves it parses and
// passes the content checks.
const EMBEDDED_PROJECTS: &str = include_str!("../content/projects.toml");
const EMBEDDED_SKILLS: &str = include_str!("../content/skills.toml");
const EMBEDDED_CONTACT: &str = include_str!("../content/contact.toml");
const EMBEDDED_UI: &str = include_str!("../content/ui.toml");

pub const PROJECTS_FILE: &str = "projects.toml";
pub const SKILLS_FILE: &str = "skills.toml";
pub const CONTACT_FILE: &str = "contact.toml";
pub const UI_FILE: &str = "ui.toml";

/// Where content is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// The snapshot embedded at compile time.
    #[default]
    Embedded,
    /// An external content directory holding the four documents.
    Dir(PathBuf),
}

impl ContentSource {
    pub fn from_flag(dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => ContentSource::Dir(dir.to_path_buf()),
            None => ContentSource::Embedded,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProjectsDoc {
    #[serde(rename = "project", default)]
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct SkillsDoc {
    #[serde(default)]
    skills: Vec<String>,
}

/// The full content snapshot: everything the presentation layer reads.
///
/// Immutable after loading; collection order is the author-curated
/// display order and is never re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub contact: ContactLinks,
    pub ui: UiCatalog,
}

impl Content {
    /// Parse the embedded snapshot without running content checks.
    pub fn embedded() -> ContentResult<Self> {
        Ok(Self {
            projects: parse_doc::<ProjectsDoc>(EMBEDDED_PROJECTS, PROJECTS_FILE)?.projects,
            skills: parse_doc::<SkillsDoc>(EMBEDDED_SKILLS, SKILLS_FILE)?.skills,
            contact: parse_doc(EMBEDDED_CONTACT, CONTACT_FILE)?,
            ui: parse_doc(EMBEDDED_UI, UI_FILE)?,
        })
    }

    /// Parse the four documents from an external directory.
    pub fn from_dir(dir: &Path) -> ContentResult<Self> {
        if !dir.is_dir() {
            return Err(ContentError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let projects: ProjectsDoc = read_doc(dir, PROJECTS_FILE)?;
        let skills: SkillsDoc = read_doc(dir, SKILLS_FILE)?;

        Ok(Self {
            projects: projects.projects,
            skills: skills.skills,
            contact: read_doc(dir, CONTACT_FILE)?,
            ui: read_doc(dir, UI_FILE)?,
        })
    }

    /// Parse from a source without running content checks.
    ///
    /// `check` uses this so it can display the full report instead of
    /// aborting on the first problem.
    pub fn parse(source: &ContentSource) -> ContentResult<Self> {
        match source {
            ContentSource::Embedded => Self::embedded(),
            ContentSource::Dir(dir) => Self::from_dir(dir),
        }
    }

    /// Parse and validate, failing loudly on content errors.
    ///
    /// Rendering and export go through this; nothing ever renders
    /// partial or inconsistent content.
    pub fn load(source: &ContentSource) -> ContentResult<Self> {
        let content = Self::parse(source)?;
        let report = run_checks(&content);
        if report.errors() > 0 {
            return Err(ContentError::Invalid { report });
        }
        Ok(content)
    }

    /// Look up a project by slug.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn parse_doc<T: DeserializeOwned>(raw: &str, file: &str) -> ContentResult<T> {
    toml::from_str(raw).map_err(|e| ContentError::InvalidToml {
        file: PathBuf::from(file),
        message: e.message().to_string(),
    })
}

fn read_doc<T: DeserializeOwned>(dir: &Path, file: &str) -> ContentResult<T> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(ContentError::DocumentNotFound { path });
    }

    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| ContentError::InvalidToml {
        file: path,
        message: e.message().to_string(),
    })
}
