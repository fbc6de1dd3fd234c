//! Terminal capability probing: color, unicode, CI, and size.

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

/// Probe the real terminal attached to stdout.
pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::probe(
        &OsEnv,
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

/// Environment access, swappable so the probing logic stays testable.
trait Env {
    fn get(&self, key: &str) -> Option<String>;
}

struct OsEnv;

impl Env for OsEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
    "TEAMCITY_VERSION",
];

const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

impl TerminalCapabilities {
    fn probe(env: &impl Env, is_tty: bool, size: Option<(u16, u16)>) -> Self {
        let dumb_term = env
            .get("TERM")
            .is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        let (width, height) = size.unwrap_or((80, 24));

        Self {
            is_tty,
            // NO_COLOR is honored regardless of its value.
            supports_color: is_tty && !dumb_term && env.get("NO_COLOR").is_none(),
            supports_unicode: !dumb_term && locale_is_utf8(env),
            is_ci: CI_MARKERS.iter().any(|k| env.get(k).is_some()),
            width,
            height,
        }
    }
}

fn locale_is_utf8(env: &impl Env) -> bool {
    for var in LOCALE_VARS {
        if let Some(value) = env.get(var) {
            let v = value.to_lowercase();
            return v.contains("utf-8") || v.contains("utf8");
        }
    }
    // No locale set: assume a modern terminal.
    true
}
