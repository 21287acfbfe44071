//! Error handling for Arabic Math
//!
//! Malformed math is never an error: translation, validation and
//! classification always return a best-effort value. This type covers the
//! collaborator boundary only (render targets, configuration files).

use thiserror::Error;

/// Arabic Math error type
#[derive(Debug, Error)]
pub enum ArabicMathError {
    /// No render target was supplied and none is configured
    #[error("Target element not found")]
    TargetNotFound,
    /// The render target rejected the job
    #[error("Render failed: {message}")]
    RenderFailed { message: String },
    /// A configuration value could not be read
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
    /// A font could not be loaded
    #[error("Font '{name}' could not be loaded: {message}")]
    FontLoad { name: String, message: String },
    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Arabic Math operations
pub type Result<T> = std::result::Result<T, ArabicMathError>;

// Convenience constructors for errors
impl ArabicMathError {
    pub fn render(message: impl Into<String>) -> Self {
        ArabicMathError::RenderFailed {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ArabicMathError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn font(name: impl Into<String>, message: impl Into<String>) -> Self {
        ArabicMathError::FontLoad {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ArabicMathError {
    fn from(err: serde_json::Error) -> Self {
        ArabicMathError::config(err.to_string())
    }
}
