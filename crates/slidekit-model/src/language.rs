//! Presentation languages.
//!
//! Every piece of user-visible text exists in three languages: English
//! (the authoritative source), Traditional Chinese, and Simplified
//! Chinese.

use serde::{Deserialize, Serialize};

/// A supported presentation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English - the authoritative source language
    #[default]
    #[serde(rename = "en")]
    En,

    /// Traditional Chinese (Taiwan)
    #[serde(rename = "zh-tw")]
    ZhTw,

    /// Simplified Chinese (Mainland China)
    #[serde(rename = "zh-cn")]
    ZhCn,
}

impl Language {
    /// All supported languages, source language first
    pub const ALL: [Language; 3] = [Language::En, Language::ZhTw, Language::ZhCn];

    /// The translated (non-source) languages
    pub const TRANSLATED: [Language; 2] = [Language::ZhTw, Language::ZhCn];

    /// Get the wire/tag form (e.g., "zh-tw")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhTw => "zh-tw",
            Self::ZhCn => "zh-cn",
        }
    }

    /// Parse from the wire/tag form
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Self::En),
            "zh-tw" => Some(Self::ZhTw),
            "zh-cn" => Some(Self::ZhCn),
            _ => None,
        }
    }

    /// Whether this is the authoritative source language
    pub fn is_source(&self) -> bool {
        matches!(self, Self::En)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Error returned when parsing an unrecognized language tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl std::fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown language tag: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(Language::from_tag("fr"), None);
    }

    #[test]
    fn test_source_language() {
        assert!(Language::En.is_source());
        assert!(!Language::ZhTw.is_source());
        assert!(!Language::ZhCn.is_source());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("zh-cn".parse::<Language>(), Ok(Language::ZhCn));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&Language::ZhTw).unwrap();
        assert_eq!(json, "\"zh-tw\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
