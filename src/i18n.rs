//! UI string table: per-language translation keys, language display
//! names, and the default language.
//!
//! The catalog only supplies data; the fallback rule (requested
//! language, then default language, then the key itself) lives with the
//! consuming view code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Lang, Localized};

/// The i18n table as declared in `content/ui.toml`.
///
/// Using `Localized` for the table makes both language sides a parse
/// requirement; key-set parity between them is verified by the content
/// checks instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiCatalog {
    /// Fallback language; must appear in `languages`.
    #[serde(rename = "defaultLang")]
    pub default_lang: Lang,
    /// Display name per language code (`de` -> `Deutsch`).
    pub languages: BTreeMap<Lang, String>,
    #[serde(rename = "ui")]
    pub table: Localized<BTreeMap<String, String>>,
}

impl UiCatalog {
    /// Raw lookup without fallback.
    pub fn get(&self, lang: Lang, key: &str) -> Option<&str> {
        self.table.get(lang).get(key).map(String::as_str)
    }

    pub fn language_name(&self, lang: Lang) -> Option<&str> {
        self.languages.get(&lang).map(String::as_str)
    }

    /// Translation keys of one language side, sorted.
    pub fn keys(&self, lang: Lang) -> impl Iterator<Item = &str> {
        self.table.get(lang).keys().map(String::as_str)
    }
}
