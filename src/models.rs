//! Core data model: language codes, bilingual values, and the
//! project/skills/contact records the presentation layer consumes.
//!
//! Serialized field names stay camelCase (`keyTech`, `fullTechStack`)
//! so the exported documents keep the shape the site reads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of supported language codes.
///
/// Adding a language is a source change: a new variant here, a display
/// name in `languages`, and a complete key-for-key UI table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    De,
    En,
}

impl Lang {
    /// All supported languages, in display order.
    pub const ALL: [Lang; 2] = [Lang::De, Lang::En];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" => Ok(Lang::De),
            "en" => Ok(Lang::En),
            other => Err(format!("unknown language code '{}'", other)),
        }
    }
}

/// A bilingual value with both locale sides always present.
///
/// Representing bilingual fields as a record (not a map) makes "both
/// languages present" a structural guarantee: a document missing one
/// side fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub de: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn new(de: T, en: T) -> Self {
        Self { de, en }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::De => &self.de,
            Lang::En => &self.en,
        }
    }

    /// Both sides with their language, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Lang, &T)> {
        [(Lang::De, &self.de), (Lang::En, &self.en)].into_iter()
    }
}

/// One professional engagement in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable slug, unique across the collection.
    pub id: String,
    pub role: Localized<String>,
    /// Locale-independent company name.
    pub company: String,
    pub timespan: Localized<String>,
    pub summary: Localized<String>,
    /// Translated bullet lists; both sides should have the same length.
    pub responsibilities: Localized<Vec<String>>,
    /// Headline technologies shown on the timeline.
    pub key_tech: Vec<String>,
    /// Complete technology list for the detail view.
    pub full_tech_stack: Vec<String>,
}

/// Fixed set of contact channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub github: String,
    pub linkedin: String,
    /// Uses the `mailto:` scheme.
    pub email: String,
}
