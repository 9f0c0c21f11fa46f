//! Translatable field values.
//!
//! A `TranslatableField` is the versioned trilingual value type used for
//! page content: English is authoritative, and each translated language
//! carries a review status. A `LocalizedText` is the lighter shape used
//! inside sub-document records, which store per-language strings without
//! status tracking.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Review status of one translated language of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationStatus {
    /// No translation has been entered yet
    #[default]
    Empty,

    /// Machine-produced translation, not yet reviewed
    AutoTranslated,

    /// A human reviewed and approved the translation
    Reviewed,

    /// The English source changed after the translation was reviewed
    Outdated,
}

/// Per-language review statuses for the translated languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationMarks {
    #[serde(rename = "zh-tw", default)]
    pub zh_tw: TranslationStatus,

    #[serde(rename = "zh-cn", default)]
    pub zh_cn: TranslationStatus,
}

impl TranslationMarks {
    /// Get the status for a translated language; `None` for the source
    pub fn get(&self, lang: Language) -> Option<TranslationStatus> {
        match lang {
            Language::En => None,
            Language::ZhTw => Some(self.zh_tw),
            Language::ZhCn => Some(self.zh_cn),
        }
    }

    fn set(&mut self, lang: Language, status: TranslationStatus) {
        match lang {
            Language::En => {}
            Language::ZhTw => self.zh_tw = status,
            Language::ZhCn => self.zh_cn = status,
        }
    }
}

/// A trilingual content value with translation status tracking.
///
/// The English value is authoritative. Editing it invalidates any
/// translation whose status is `Reviewed` by moving it to `Outdated`;
/// editing a translated language never changes status by itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslatableField {
    #[serde(default)]
    pub en: String,

    #[serde(rename = "zh-tw", default)]
    pub zh_tw: String,

    #[serde(rename = "zh-cn", default)]
    pub zh_cn: String,

    #[serde(rename = "translationStatus", default)]
    pub status: TranslationMarks,
}

impl TranslatableField {
    /// Create an empty field with `Empty` statuses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a field from an English source value
    pub fn from_en(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ..Self::default()
        }
    }

    /// Get the value for a language
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::ZhTw => &self.zh_tw,
            Language::ZhCn => &self.zh_cn,
        }
    }

    /// Produce a copy with `lang` set to `value`.
    ///
    /// Editing English moves every `Reviewed` translation status to
    /// `Outdated`. Editing a translated language leaves statuses alone.
    pub fn with_value(&self, lang: Language, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match lang {
            Language::En => {
                next.en = value.into();
                for translated in Language::TRANSLATED {
                    if next.status.get(translated) == Some(TranslationStatus::Reviewed) {
                        next.status.set(translated, TranslationStatus::Outdated);
                    }
                }
            }
            Language::ZhTw => next.zh_tw = value.into(),
            Language::ZhCn => next.zh_cn = value.into(),
        }
        next
    }

    /// Produce a copy with the status of a translated language replaced.
    ///
    /// Setting a status for the source language is a no-op copy.
    pub fn with_status(&self, lang: Language, status: TranslationStatus) -> Self {
        let mut next = self.clone();
        next.status.set(lang, status);
        next
    }

    /// Whether every language is blank
    pub fn is_blank(&self) -> bool {
        self.en.is_empty() && self.zh_tw.is_empty() && self.zh_cn.is_empty()
    }
}

/// Per-language strings without status tracking.
///
/// Sub-document records (table cells, card text, node labels) use this
/// lighter shape; statuses are only synthesized at display time via
/// [`LocalizedText::wrap_as_translatable`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,

    #[serde(rename = "zh-tw", default)]
    pub zh_tw: String,

    #[serde(rename = "zh-cn", default)]
    pub zh_cn: String,
}

impl LocalizedText {
    /// Create from an English value
    pub fn from_en(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ..Self::default()
        }
    }

    /// Get the value for a language
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::ZhTw => &self.zh_tw,
            Language::ZhCn => &self.zh_cn,
        }
    }

    /// Set the value for a language in place
    pub fn set(&mut self, lang: Language, value: impl Into<String>) {
        match lang {
            Language::En => self.en = value.into(),
            Language::ZhTw => self.zh_tw = value.into(),
            Language::ZhCn => self.zh_cn = value.into(),
        }
    }

    /// Adapt to a [`TranslatableField`] for editor display.
    ///
    /// Statuses are synthesized as `Empty` for the translated languages,
    /// always. This is a one-way, display-time adapter: a real status is
    /// never round-tripped back into the sub-document.
    pub fn wrap_as_translatable(&self) -> TranslatableField {
        TranslatableField {
            en: self.en.clone(),
            zh_tw: self.zh_tw.clone(),
            zh_cn: self.zh_cn.clone(),
            status: TranslationMarks::default(),
        }
    }
}
