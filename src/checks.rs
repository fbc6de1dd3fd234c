//! Load-time content checks.
//!
//! Content problems are authoring bugs, not runtime conditions: the
//! checks run once over a parsed `Content`, produce a report, and the
//! loader aborts when any check errors. `werdegang check` renders the
//! same report for humans and CI.

use std::collections::{BTreeSet, HashSet};

use crate::content::Content;
use crate::models::{Lang, Localized, Project};

/// Status of a single content check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "✓"),
            CheckStatus::Warning => write!(f, "⚠"),
            CheckStatus::Error => write!(f, "✗"),
        }
    }
}

/// One content check result
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCheck {
    /// Content section this check belongs to (projects, skills, ...).
    pub section: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
    pub details: Vec<String>,
}

fn make_check(
    section: &str,
    name: &str,
    status: CheckStatus,
    message: &str,
    recommendation: Option<&str>,
) -> ContentCheck {
    ContentCheck {
        section: section.to_string(),
        name: name.to_string(),
        status,
        message: message.to_string(),
        recommendation: recommendation.map(String::from),
        details: Vec::new(),
    }
}

pub trait ReportSink {
    fn add_check(&mut self, check: ContentCheck);

    fn add_pass(&mut self, section: &str, name: &str, message: &str) {
        self.add_check(make_check(section, name, CheckStatus::Pass, message, None));
    }

    fn add_warning(
        &mut self,
        section: &str,
        name: &str,
        message: &str,
        recommendation: Option<&str>,
    ) {
        self.add_check(make_check(
            section,
            name,
            CheckStatus::Warning,
            message,
            recommendation,
        ));
    }

    fn add_error(
        &mut self,
        section: &str,
        name: &str,
        message: &str,
        recommendation: Option<&str>,
    ) {
        self.add_check(make_check(
            section,
            name,
            CheckStatus::Error,
            message,
            recommendation,
        ));
    }
}

/// Content validation results
#[derive(Debug, Clone, Default)]
pub struct ContentReport {
    pub checks: Vec<ContentCheck>,
}

impl ContentReport {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

impl ReportSink for ContentReport {
    fn add_check(&mut self, check: ContentCheck) {
        self.checks.push(check);
    }
}

/// Run all content checks.
pub fn run_checks(content: &Content) -> ContentReport {
    let mut report = ContentReport::new();
    run_checks_into(content, &mut report);
    report
}

pub fn run_checks_into(content: &Content, sink: &mut impl ReportSink) {
    check_projects(content, sink);
    check_skills(content, sink);
    check_contact(content, sink);
    check_ui(content, sink);
}

fn check_projects(content: &Content, sink: &mut impl ReportSink) {
    if content.projects.is_empty() {
        sink.add_error(
            "projects",
            "collection",
            "no projects defined",
            Some("add at least one [[project]] to projects.toml"),
        );
        return;
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (index, project) in content.projects.iter().enumerate() {
        let slug = if project.id.is_empty() {
            format!("project #{}", index + 1)
        } else {
            project.id.clone()
        };

        let mut clean = check_project(project, &slug, sink);

        if project.id.is_empty() {
            sink.add_error(
                "projects",
                &slug,
                "empty project id",
                Some("give every project a unique slug"),
            );
            clean = false;
        } else if !seen_ids.insert(project.id.as_str()) {
            sink.add_error(
                "projects",
                &slug,
                "duplicate project id",
                Some("slugs must be unique across the collection"),
            );
            clean = false;
        } else if !is_kebab_case(&project.id) {
            sink.add_warning(
                "projects",
                &slug,
                "id is not kebab-case",
                Some("use lowercase letters, digits and single hyphens"),
            );
            clean = false;
        }

        if clean {
            sink.add_pass("projects", &slug, "bilingual fields complete");
        }
    }
}

/// Per-project field checks. Returns false if anything was reported.
fn check_project(project: &Project, slug: &str, sink: &mut impl ReportSink) -> bool {
    let mut clean = true;

    for (field, value) in [
        ("role", &project.role),
        ("timespan", &project.timespan),
        ("summary", &project.summary),
    ] {
        for (lang, side) in value.iter() {
            if side.trim().is_empty() {
                sink.add_error(
                    "projects",
                    slug,
                    &format!("empty {} value for '{}'", lang, field),
                    None,
                );
                clean = false;
            }
        }
    }

    let de_len = project.responsibilities.de.len();
    let en_len = project.responsibilities.en.len();
    if de_len != en_len {
        sink.add_error(
            "projects",
            slug,
            &format!(
                "responsibilities bullet count differs: {} de vs {} en",
                de_len, en_len
            ),
            Some("bullets are translated one-to-one; keep both lists in sync"),
        );
        clean = false;
    }
    for (lang, bullets) in project.responsibilities.iter() {
        if bullets.iter().any(|b| b.trim().is_empty()) {
            sink.add_error(
                "projects",
                slug,
                &format!("empty {} responsibility bullet", lang),
                None,
            );
            clean = false;
        }
    }

    if project.key_tech.is_empty() {
        sink.add_error(
            "projects",
            slug,
            "keyTech is empty",
            Some("list the headline technologies"),
        );
        clean = false;
    }

    let full: HashSet<&str> = project.full_tech_stack.iter().map(String::as_str).collect();
    let missing: Vec<&str> = project
        .key_tech
        .iter()
        .map(String::as_str)
        .filter(|t| !full.contains(t))
        .collect();
    if !missing.is_empty() {
        let mut check = make_check(
            "projects",
            slug,
            CheckStatus::Warning,
            "keyTech entries missing from fullTechStack",
            Some("fullTechStack is expected to be a superset of keyTech"),
        );
        check.details = missing.iter().map(|t| t.to_string()).collect();
        sink.add_check(check);
        clean = false;
    }

    if let Some(dup) = first_duplicate(&project.full_tech_stack) {
        sink.add_warning(
            "projects",
            slug,
            &format!("duplicate fullTechStack entry '{}'", dup),
            None,
        );
        clean = false;
    }

    clean
}

fn check_skills(content: &Content, sink: &mut impl ReportSink) {
    if content.skills.is_empty() {
        sink.add_error(
            "skills",
            "list",
            "skills list is empty",
            Some("add skills to skills.toml"),
        );
        return;
    }

    if content.skills.iter().any(|s| s.trim().is_empty()) {
        sink.add_error("skills", "list", "empty skill entry", None);
        return;
    }

    if let Some(dup) = first_duplicate(&content.skills) {
        sink.add_warning("skills", "list", &format!("duplicate skill '{}'", dup), None);
        return;
    }

    sink.add_pass(
        "skills",
        "list",
        &format!("{} skills listed", content.skills.len()),
    );
}

fn check_contact(content: &Content, sink: &mut impl ReportSink) {
    let mut clean = true;

    if !content.contact.email.starts_with("mailto:") {
        sink.add_error(
            "contact",
            "email",
            "email link does not use the mailto: scheme",
            Some("prefix the address with mailto:"),
        );
        clean = false;
    }

    for (name, link) in [
        ("github", &content.contact.github),
        ("linkedin", &content.contact.linkedin),
    ] {
        if !link.starts_with("https://") {
            sink.add_warning(
                "contact",
                name,
                "link does not use https://",
                None,
            );
            clean = false;
        }
    }

    if clean {
        sink.add_pass("contact", "links", "all channels well-formed");
    }
}

fn check_ui(content: &Content, sink: &mut impl ReportSink) {
    let ui = &content.ui;
    let mut clean = true;

    for lang in Lang::ALL {
        if ui.language_name(lang).is_none() {
            sink.add_error(
                "i18n",
                "languages",
                &format!("missing display name for '{}'", lang),
                Some("add the language to [languages] in ui.toml"),
            );
            clean = false;
        }
    }

    if ui.languages.get(&ui.default_lang).is_none() {
        sink.add_error(
            "i18n",
            "defaultLang",
            &format!("default language '{}' not listed in languages", ui.default_lang),
            None,
        );
        clean = false;
    }

    for (lang, table) in ui.table.iter() {
        for (key, value) in table {
            if value.trim().is_empty() {
                sink.add_error(
                    "i18n",
                    key,
                    &format!("empty {} translation", lang),
                    None,
                );
                clean = false;
            }
        }
    }

    if !check_key_parity(&ui.table, sink) {
        clean = false;
    }

    if clean {
        sink.add_pass(
            "i18n",
            "table",
            &format!("{} keys, both languages in sync", ui.table.de.len()),
        );
    }
}

/// Key-set parity between the two language sides, drift listed per side.
fn check_key_parity(
    table: &Localized<std::collections::BTreeMap<String, String>>,
    sink: &mut impl ReportSink,
) -> bool {
    let de_keys: BTreeSet<&str> = table.de.keys().map(String::as_str).collect();
    let en_keys: BTreeSet<&str> = table.en.keys().map(String::as_str).collect();
    if de_keys == en_keys {
        return true;
    }

    let mut check = make_check(
        "i18n",
        "table",
        CheckStatus::Error,
        "translation key sets differ between de and en",
        Some("every key needs a translation in both languages"),
    );
    for key in de_keys.difference(&en_keys) {
        check.details.push(format!("only in de: {}", key));
    }
    for key in en_keys.difference(&de_keys) {
        check.details.push(format!("only in en: {}", key));
    }
    sink.add_check(check);
    false
}

fn is_kebab_case(id: &str) -> bool {
    !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    items.iter().map(String::as_str).find(|s| !seen.insert(s))
}
