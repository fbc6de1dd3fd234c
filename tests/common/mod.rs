//! Common test utilities for werdegang CLI tests.
//!
//! Provides `TestEnv` (isolated work and home directories plus a CLI
//! runner) and content-directory fixtures used by the external-content
//! tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a werdegang CLI command.
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// The work dir is the process cwd so that `werdegang.toml` and `dist/`
/// lookups stay inside the sandbox; HOME and XDG_CONFIG_HOME point at a
/// second temp dir so no user config leaks in.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("create work dir"),
            home_dir: TempDir::new().expect("create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_werdegang")),
        }
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("WERDEGANG_LANG")
            .env_remove("WERDEGANG_COLOR")
            .env_remove("WERDEGANG_ASCII")
            .env_remove("WERDEGANG_FORMAT")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute werdegang");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write the four documents of a small but fully valid content dir.
    pub fn write_valid_content(&self, relative: &str) -> PathBuf {
        let dir = self.work_path(relative);
        write_content_dir(&dir, VALID_PROJECTS, VALID_SKILLS, VALID_CONTACT, VALID_UI);
        dir
    }

    /// Write a content dir whose projects document has check errors
    /// (duplicate id, unequal bullet counts).
    pub fn write_broken_content(&self, relative: &str) -> PathBuf {
        let dir = self.work_path(relative);
        write_content_dir(
            &dir,
            BROKEN_PROJECTS,
            VALID_SKILLS,
            VALID_CONTACT,
            VALID_UI,
        );
        dir
    }
}

fn write_content_dir(dir: &Path, projects: &str, skills: &str, contact: &str, ui: &str) {
    std::fs::create_dir_all(dir).expect("create content dir");
    std::fs::write(dir.join("projects.toml"), projects).expect("write projects.toml");
    std::fs::write(dir.join("skills.toml"), skills).expect("write skills.toml");
    std::fs::write(dir.join("contact.toml"), contact).expect("write contact.toml");
    std::fs::write(dir.join("ui.toml"), ui).expect("write ui.toml");
}

pub const VALID_PROJECTS: &str = r#"
[[project]]
id = "acme-2024"
company = "Acme GmbH"
keyTech = ["Rust"]
fullTechStack = ["Rust", "PostgreSQL"]

[project.role]
de = "Entwickler"
en = "Developer"

[project.timespan]
de = "2024"
en = "2024"

[project.summary]
de = "Backend-Entwicklung."
en = "Backend development."

[project.responsibilities]
de = ["Entwicklung von Services"]
en = ["Development of services"]
"#;

pub const BROKEN_PROJECTS: &str = r#"
[[project]]
id = "acme-2024"
company = "Acme GmbH"
keyTech = ["Rust"]
fullTechStack = ["Rust"]

[project.role]
de = "Entwickler"
en = "Developer"

[project.timespan]
de = "2024"
en = "2024"

[project.summary]
de = "Backend-Entwicklung."
en = "Backend development."

[project.responsibilities]
de = ["Entwicklung von Services", "Code Reviews"]
en = ["Development of services"]

[[project]]
id = "acme-2024"
company = "Acme GmbH"
keyTech = ["Rust"]
fullTechStack = ["Rust"]

[project.role]
de = "Entwickler"
en = "Developer"

[project.timespan]
de = "2023"
en = "2023"

[project.summary]
de = "Frontend-Entwicklung."
en = "Frontend development."

[project.responsibilities]
de = ["Komponenten gebaut"]
en = ["Built components"]
"#;

pub const VALID_SKILLS: &str = r#"
skills = ["Rust", "PostgreSQL"]
"#;

pub const VALID_CONTACT: &str = r#"
github = "https://github.com/example"
linkedin = "https://linkedin.com/in/example"
email = "mailto:dev@example.com"
"#;

pub const VALID_UI: &str = r#"
defaultLang = "de"

[languages]
de = "Deutsch"
en = "English"

[ui.de]
"hero.name" = "EXAMPLE"
"hero.cta" = "Meine Projekte ansehen"

[ui.en]
"hero.name" = "EXAMPLE"
"hero.cta" = "View My Work"
"#;
