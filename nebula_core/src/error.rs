//! Centralized error handling for the Nebula menu
//!
//! Library code returns [`MenuError`] through [`MenuResult`]. The desktop
//! binary wraps these in `anyhow` at the application boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while starting the menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// None of the candidate font files could be read
    #[error("no usable font (tried: {})", display_paths(.tried))]
    NoUsableFont { tried: Vec<PathBuf> },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Helper to create a configuration error
pub fn config_error(message: impl Into<String>) -> MenuError {
    MenuError::Config(message.into())
}
