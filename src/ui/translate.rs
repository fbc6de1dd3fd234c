//! The fallback rule for UI strings: requested language, then the
//! content's default language, then the key itself.
//!
//! The catalog only stores data; this is the one place the consuming
//! views resolve it.

use werdegang::{Lang, UiCatalog};

pub fn tr<'a>(ui: &'a UiCatalog, lang: Lang, key: &'a str) -> &'a str {
    ui.get(lang, key)
        .or_else(|| ui.get(ui.default_lang, key))
        .unwrap_or(key)
}
