//! Error types for rendering.

use thiserror::Error;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while preparing a render
#[derive(Error, Debug)]
pub enum RenderError {
    /// Theme file not found or inaccessible
    #[error("theme not found: {path}")]
    ThemeNotFound { path: String },

    /// Theme file is not valid TOML for a theme
    #[error("invalid theme: {0}")]
    ThemeParse(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Create a theme-not-found error
    pub fn theme_not_found(path: impl Into<String>) -> Self {
        Self::ThemeNotFound { path: path.into() }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ThemeNotFound { .. } => "RND001",
            Self::ThemeParse(_) => "RND002",
            Self::Io(_) => "RND003",
        }
    }
}
