//! Property tests for the export path.

use proptest::prelude::*;

use werdegang::content::ContentSource;
use werdegang::export::{hash_content, render};
use werdegang::{Content, ExportFormat};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: artifact hashes are deterministic and keep the
    /// `sha256:<64 hex>` shape for any input.
    #[test]
    fn property_hash_is_stable_and_well_formed(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let first = hash_content(&bytes);
        let second = hash_content(&bytes);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), "sha256:".len() + 64);
        prop_assert!(first.starts_with("sha256:"));
        prop_assert!(first["sha256:".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// PROPERTY: distinct inputs virtually never collide; at minimum,
    /// a one-byte change always changes the hash.
    #[test]
    fn property_hash_changes_with_content(bytes in proptest::collection::vec(any::<u8>(), 1..256), flip in any::<u8>()) {
        let mut mutated = bytes.clone();
        mutated[0] ^= flip | 1;
        prop_assert_ne!(hash_content(&bytes), hash_content(&mutated));
    }
}

#[test]
fn rendered_json_parses_back_with_all_sections() {
    let content = Content::load(&ContentSource::Embedded).unwrap();
    let raw = render(&content, ExportFormat::Json).unwrap();

    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for key in ["projects", "skills", "contactLinks", "ui", "languages", "defaultLang"] {
        assert!(document.get(key).is_some(), "missing key {key}");
    }
    assert!(raw.ends_with('\n'));
}

#[test]
fn rendered_yaml_parses_back() {
    let content = Content::load(&ContentSource::Embedded).unwrap();
    let raw = render(&content, ExportFormat::Yaml).unwrap();

    let document: serde_yaml_ng::Value = serde_yaml_ng::from_str(&raw).unwrap();
    assert!(document.get("projects").is_some());
    assert_eq!(
        document["projects"].as_sequence().unwrap().len(),
        content.projects.len()
    );
}
