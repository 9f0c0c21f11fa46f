//! Render theme configuration.
//!
//! Colors and fonts are loaded from a TOML theme file so decks can be
//! re-skinned without touching templates. Every field has a default,
//! so a partial theme file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Theme configuration for slide rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderTheme {
    /// Slide background color
    #[serde(default = "default_background")]
    pub background: String,

    /// Card/panel surface color
    #[serde(default = "default_surface")]
    pub surface: String,

    /// Brand accent color
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Primary text color
    #[serde(default = "default_text")]
    pub text: String,

    /// Secondary/caption text color
    #[serde(default = "default_muted")]
    pub muted: String,

    /// Heading font family
    #[serde(default = "default_heading_font")]
    pub heading_font: String,

    /// Body font family
    #[serde(default = "default_body_font")]
    pub body_font: String,

    /// Table-specific colors
    #[serde(default)]
    pub table: TableTheme,
}

/// Table styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableTheme {
    /// Header row fill
    #[serde(default = "default_header_fill")]
    pub header_fill: String,

    /// Header row text color
    #[serde(default = "default_header_text")]
    pub header_text: String,

    /// Alternating body row fill
    #[serde(default = "default_row_stripe")]
    pub row_stripe: String,
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}
fn default_surface() -> String {
    "#F4F6F8".to_string()
}
fn default_accent() -> String {
    "#0F6CBD".to_string()
}
fn default_text() -> String {
    "#1A1A1A".to_string()
}
fn default_muted() -> String {
    "#6B7280".to_string()
}
fn default_heading_font() -> String {
    "Noto Sans TC".to_string()
}
fn default_body_font() -> String {
    "Noto Sans TC".to_string()
}
fn default_header_fill() -> String {
    "#0F6CBD".to_string()
}
fn default_header_text() -> String {
    "#FFFFFF".to_string()
}
fn default_row_stripe() -> String {
    "#F4F6F8".to_string()
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self {
            background: default_background(),
            surface: default_surface(),
            accent: default_accent(),
            text: default_text(),
            muted: default_muted(),
            heading_font: default_heading_font(),
            body_font: default_body_font(),
            table: TableTheme::default(),
        }
    }
}

impl Default for TableTheme {
    fn default() -> Self {
        Self {
            header_fill: default_header_fill(),
            header_text: default_header_text(),
            row_stripe: default_row_stripe(),
        }
    }
}

impl RenderTheme {
    /// Parse a theme from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a theme from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RenderError::theme_not_found(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let theme = RenderTheme::default();
        assert_eq!(theme.background, "#FFFFFF");
        assert_eq!(theme.table.header_text, "#FFFFFF");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let theme = RenderTheme::from_toml_str(
            r##"
accent = "#CC0000"

[table]
header_fill = "#CC0000"
"##,
        )
        .unwrap();
        assert_eq!(theme.accent, "#CC0000");
        assert_eq!(theme.table.header_fill, "#CC0000");
        // Unnamed fields keep their defaults
        assert_eq!(theme.background, "#FFFFFF");
        assert_eq!(theme.table.row_stripe, "#F4F6F8");
    }

    #[test]
    fn test_missing_file_is_theme_not_found() {
        let err = RenderTheme::from_file("definitely/not/here.toml").unwrap_err();
        assert_eq!(err.code(), "RND001");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = RenderTheme::from_toml_str("accent = [broken").unwrap_err();
        assert_eq!(err.code(), "RND002");
    }
}
