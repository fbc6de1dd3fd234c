//! Property tests for content parsing and the check engine.

use proptest::prelude::*;

use werdegang::checks::run_checks;
use werdegang::{ContactLinks, Content, Lang, Localized, Project};

fn arb_text() -> impl Strategy<Value = String> {
    // Printable-ish strings, including empty and whitespace-only ones.
    proptest::string::string_regex("[A-Za-z0-9 äöüß\\-_.]{0,24}").unwrap()
}

fn arb_localized() -> impl Strategy<Value = Localized<String>> {
    (arb_text(), arb_text()).prop_map(|(de, en)| Localized::new(de, en))
}

fn arb_project() -> impl Strategy<Value = Project> {
    (
        arb_text(),
        arb_localized(),
        arb_text(),
        arb_localized(),
        arb_localized(),
        (
            proptest::collection::vec(arb_text(), 0..4),
            proptest::collection::vec(arb_text(), 0..4),
        ),
        proptest::collection::vec(arb_text(), 0..4),
        proptest::collection::vec(arb_text(), 0..6),
    )
        .prop_map(
            |(id, role, company, timespan, summary, (de, en), key_tech, full_tech_stack)| {
                Project {
                    id,
                    role,
                    company,
                    timespan,
                    summary,
                    responsibilities: Localized::new(de, en),
                    key_tech,
                    full_tech_stack,
                }
            },
        )
}

fn arb_content() -> impl Strategy<Value = Content> {
    (
        proptest::collection::vec(arb_project(), 0..5),
        proptest::collection::vec(arb_text(), 0..8),
        (arb_text(), arb_text(), arb_text()),
        proptest::collection::btree_map(arb_text(), arb_text(), 0..6),
        proptest::collection::btree_map(arb_text(), arb_text(), 0..6),
    )
        .prop_map(|(projects, skills, (github, linkedin, email), de, en)| {
            let ui = Content::embedded().unwrap().ui;
            Content {
                projects,
                skills,
                contact: ContactLinks {
                    github,
                    linkedin,
                    email,
                },
                ui: werdegang::UiCatalog {
                    default_lang: ui.default_lang,
                    languages: ui.languages,
                    table: Localized::new(de, en),
                },
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing a directory of arbitrary TOML-ish documents
    /// never panics; it parses or returns an error.
    #[test]
    fn property_from_dir_never_panics(
        projects in "(?s).{0,200}",
        skills in "(?s).{0,100}",
        contact in "(?s).{0,100}",
        ui in "(?s).{0,200}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("projects.toml"), projects).unwrap();
        std::fs::write(dir.path().join("skills.toml"), skills).unwrap();
        std::fs::write(dir.path().join("contact.toml"), contact).unwrap();
        std::fs::write(dir.path().join("ui.toml"), ui).unwrap();

        let _ = Content::from_dir(dir.path());
    }

    /// PROPERTY: the check engine never panics, whatever the content
    /// looks like, and its counters always add up.
    #[test]
    fn property_run_checks_never_panics(content in arb_content()) {
        let report = run_checks(&content);
        prop_assert_eq!(
            report.checks.len(),
            report.passes() + report.warnings() + report.errors()
        );
    }

    /// PROPERTY: a report with zero errors means every project id is
    /// unique and non-empty.
    #[test]
    fn property_error_free_report_implies_unique_ids(content in arb_content()) {
        let report = run_checks(&content);
        if report.errors() == 0 {
            let mut seen = std::collections::BTreeSet::new();
            for project in &content.projects {
                prop_assert!(!project.id.is_empty());
                prop_assert!(seen.insert(project.id.clone()));
            }
        }
    }

    /// PROPERTY: bilingual values always return the side they were
    /// built from.
    #[test]
    fn property_localized_get_matches_side(de in arb_text(), en in arb_text()) {
        let value = Localized::new(de.clone(), en.clone());
        prop_assert_eq!(value.get(Lang::De), &de);
        prop_assert_eq!(value.get(Lang::En), &en);
    }
}
