//! Export: emits the content as `content.json` / `content.yaml` for the
//! static site, with a manifest (`werdegang.lock`) tracking artifact
//! hashes so hand-edited files are never silently overwritten.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::content::Content;
use crate::error::{ContentError, ContentResult};
use crate::models::{ContactLinks, Lang, Localized, Project};
use crate::ExportFormat;

pub const MANIFEST_FILE: &str = "werdegang.lock";
const MANIFEST_VERSION: &str = "1";

/// The single document the site consumes, in the camelCase shape the
/// presentation layer expects.
#[derive(Debug, Serialize)]
pub struct SiteDocument<'a> {
    pub projects: &'a [Project],
    pub skills: &'a [String],
    #[serde(rename = "contactLinks")]
    pub contact_links: &'a ContactLinks,
    pub ui: &'a Localized<BTreeMap<String, String>>,
    pub languages: &'a BTreeMap<Lang, String>,
    #[serde(rename = "defaultLang")]
    pub default_lang: Lang,
}

impl<'a> SiteDocument<'a> {
    pub fn new(content: &'a Content) -> Self {
        Self {
            projects: &content.projects,
            skills: &content.skills,
            contact_links: &content.contact,
            ui: &content.ui.table,
            languages: &content.ui.languages,
            default_lang: content.ui.default_lang,
        }
    }
}

/// Render the site document in the requested format.
pub fn render(content: &Content, format: ExportFormat) -> ContentResult<String> {
    let doc = SiteDocument::new(content);
    let rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&doc)
            .map_err(|e| std::io::Error::other(e.to_string()))?,
        ExportFormat::Yaml => serde_yaml_ng::to_string(&doc)
            .map_err(|e| std::io::Error::other(e.to_string()))?,
    };
    // Artifacts always end with a newline.
    if rendered.ends_with('\n') {
        Ok(rendered)
    } else {
        Ok(rendered + "\n")
    }
}

/// Compute the `sha256:<hex>` hash of artifact content.
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Write content to a file atomically (tempfile + rename).
pub fn atomic_write(path: &Path, content: &[u8]) -> ContentResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let tmp = tempfile::NamedTempFile::new_in(parent)?;
    std::fs::write(tmp.path(), content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Export manifest persisted as `werdegang.lock` next to the artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub artifacts: BTreeMap<String, String>,
}

impl Manifest {
    pub fn load(out_dir: &Path) -> ContentResult<Self> {
        let path = out_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| ContentError::InvalidToml {
            file: path,
            message: e.message().to_string(),
        })
    }

    pub fn store(&self, out_dir: &Path) -> ContentResult<()> {
        let raw = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        atomic_write(&out_dir.join(MANIFEST_FILE), raw.as_bytes())
    }
}

/// Per-artifact export status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// New file would be created.
    Create,
    /// Existing file would be rewritten.
    Update,
    /// On-disk content already matches.
    Unchanged,
    /// File was edited by hand since the last export; needs --force.
    SkippedModified,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Create => "create",
            FileStatus::Update => "update",
            FileStatus::Unchanged => "unchanged",
            FileStatus::SkippedModified => "skipped",
        }
    }
}

/// One planned artifact write.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub name: String,
    pub status: FileStatus,
    pub content: String,
    /// Current on-disk content, when the file exists and is readable.
    pub on_disk: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub force: bool,
    pub dry_run: bool,
}

/// Result of an executed (or dry-run) export.
#[derive(Debug, Clone, Default)]
pub struct ExportResult {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub unchanged: Vec<String>,
}

impl ExportResult {
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Decide what would happen to each artifact without touching the disk.
pub fn plan_export(
    content: &Content,
    out_dir: &Path,
    manifest: &Manifest,
    options: &ExportOptions,
) -> ContentResult<Vec<PlannedFile>> {
    let name = options.format.file_name().to_string();
    let rendered = render(content, options.format)?;
    let path = out_dir.join(&name);

    let on_disk = match std::fs::read_to_string(&path) {
        Ok(existing) => Some(existing),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let status = match &on_disk {
        None => FileStatus::Create,
        Some(existing) if *existing == rendered => FileStatus::Unchanged,
        Some(existing) => {
            let disk_hash = hash_content(existing.as_bytes());
            match manifest.artifacts.get(&name) {
                // Hash drift against the manifest means a hand edit.
                Some(recorded) if *recorded != disk_hash && !options.force => {
                    FileStatus::SkippedModified
                }
                _ => FileStatus::Update,
            }
        }
    };

    Ok(vec![PlannedFile {
        name,
        status,
        content: rendered,
        on_disk,
    }])
}

/// Execute a plan: write artifacts and refresh the manifest.
///
/// Dry runs report the plan without writing anything, the manifest
/// included.
pub fn execute_export(
    plan: &[PlannedFile],
    out_dir: &Path,
    manifest: &mut Manifest,
    options: &ExportOptions,
) -> ContentResult<ExportResult> {
    let mut result = ExportResult::default();

    for file in plan {
        match file.status {
            FileStatus::SkippedModified => {
                result.skipped.push(file.name.clone());
                continue;
            }
            FileStatus::Unchanged => {
                result.unchanged.push(file.name.clone());
            }
            FileStatus::Create | FileStatus::Update => {
                if !options.dry_run {
                    atomic_write(&out_dir.join(&file.name), file.content.as_bytes())?;
                }
                result.written.push(file.name.clone());
            }
        }

        manifest
            .artifacts
            .insert(file.name.clone(), hash_content(file.content.as_bytes()));
    }

    if !options.dry_run {
        manifest.version = MANIFEST_VERSION.to_string();
        manifest.generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        manifest.store(out_dir)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentSource;
    use tempfile::tempdir;

    fn content() -> Content {
        Content::load(&ContentSource::Embedded).unwrap()
    }

    #[test]
    fn json_document_keeps_external_field_names() {
        let content = content();
        let rendered = render(&content, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(value.get("contactLinks").is_some());
        assert!(value.get("defaultLang").is_some());
        assert!(value["projects"][0].get("keyTech").is_some());
        assert_eq!(value["ui"]["de"]["hero.cta"], "Meine Projekte ansehen");
    }

    #[test]
    fn yaml_document_parses_back() {
        let content = content();
        let rendered = render(&content, ExportFormat::Yaml).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&rendered).unwrap();
        assert!(value.get("projects").is_some());
    }

    #[test]
    fn render_is_deterministic() {
        let content = content();
        let a = render(&content, ExportFormat::Json).unwrap();
        let b = render(&content, ExportFormat::Json).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hash_content_format() {
        let hash = hash_content(b"Hello, World!");
        assert!(hash.starts_with("sha256:"));
        assert_eq!(hash.len(), 71);
    }

    #[test]
    fn atomic_write_creates_parents_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.json");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn fresh_export_plans_create() {
        let dir = tempdir().unwrap();
        let options = ExportOptions::default();
        let manifest = Manifest::default();

        let plan = plan_export(&content(), dir.path(), &manifest, &options).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].status, FileStatus::Create);
        assert_eq!(plan[0].name, "content.json");
    }

    #[test]
    fn export_then_reexport_is_unchanged() {
        let dir = tempdir().unwrap();
        let options = ExportOptions::default();
        let content = content();

        let mut manifest = Manifest::load(dir.path()).unwrap();
        let plan = plan_export(&content, dir.path(), &manifest, &options).unwrap();
        let result = execute_export(&plan, dir.path(), &mut manifest, &options).unwrap();
        assert_eq!(result.written, vec!["content.json".to_string()]);
        assert!(dir.path().join(MANIFEST_FILE).is_file());

        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.version, "1");
        let plan = plan_export(&content, dir.path(), &manifest, &options).unwrap();
        assert_eq!(plan[0].status, FileStatus::Unchanged);
    }

    #[test]
    fn hand_edited_artifact_is_skipped_without_force() {
        let dir = tempdir().unwrap();
        let options = ExportOptions::default();
        let content = content();

        let mut manifest = Manifest::load(dir.path()).unwrap();
        let plan = plan_export(&content, dir.path(), &manifest, &options).unwrap();
        execute_export(&plan, dir.path(), &mut manifest, &options).unwrap();

        // Hand edit after export.
        std::fs::write(dir.path().join("content.json"), "{ \"edited\": true }").unwrap();

        let manifest = Manifest::load(dir.path()).unwrap();
        let plan = plan_export(&content, dir.path(), &manifest, &options).unwrap();
        assert_eq!(plan[0].status, FileStatus::SkippedModified);

        let forced = ExportOptions {
            force: true,
            ..options
        };
        let plan = plan_export(&content, dir.path(), &manifest, &forced).unwrap();
        assert_eq!(plan[0].status, FileStatus::Update);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let options = ExportOptions {
            dry_run: true,
            ..ExportOptions::default()
        };

        let mut manifest = Manifest::default();
        let plan = plan_export(&content(), dir.path(), &manifest, &options).unwrap();
        let result = execute_export(&plan, dir.path(), &mut manifest, &options).unwrap();

        assert_eq!(result.written.len(), 1);
        assert!(!dir.path().join("content.json").exists());
        assert!(!dir.path().join(MANIFEST_FILE).exists());
    }
}
