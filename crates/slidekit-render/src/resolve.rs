//! Language resolution.
//!
//! Renderers (and exporters, which share this path) consume content as
//! plain single-language strings. Table renderers surface missing
//! translations with a visible placeholder instead of rendering blank -
//! translation gaps are meant to be seen, not hidden.

use slidekit_model::{Language, LocalizedText, Page, TranslatableField};

/// Placeholder shown where a translation is missing
pub const NO_TRANSLATION: &str = "[no translation]";

/// Resolve a field to its text in `lang`; empty stays empty
pub fn field_text(field: &TranslatableField, lang: Language) -> &str {
    field.get(lang)
}

/// Resolve a field, substituting the placeholder when empty
pub fn field_text_or_placeholder(field: &TranslatableField, lang: Language) -> &str {
    let text = field.get(lang);
    if text.is_empty() {
        NO_TRANSLATION
    } else {
        text
    }
}

/// Resolve a sub-document text in `lang`; empty stays empty
pub fn local_text(text: &LocalizedText, lang: Language) -> &str {
    text.get(lang)
}

/// Resolve a sub-document text, substituting the placeholder when empty
pub fn local_text_or_placeholder(text: &LocalizedText, lang: Language) -> &str {
    let value = text.get(lang);
    if value.is_empty() {
        NO_TRANSLATION
    } else {
        value
    }
}

/// Resolve a page's translatable field by key; absent resolves to ""
pub fn page_text(page: &Page, key: &str, lang: Language) -> String {
    page.field(key)
        .map(|f| f.get(lang).to_string())
        .unwrap_or_default()
}
