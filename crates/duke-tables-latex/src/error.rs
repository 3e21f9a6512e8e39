//! Rendering error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for rendering operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a table
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template file or built-in template matches the name
    #[error("Template not found: {name} (searched: {})", join_paths(.searched))]
    TemplateNotFound { name: String, searched: Vec<PathBuf> },

    /// Template text lacks the table placeholder
    #[error("Template {0} has no {{{{table}}}} placeholder")]
    MissingPlaceholder(String),

    /// A renderer asked for a hook that does not exist
    #[error("Unknown hook: {0}")]
    UnknownHook(String),

    /// A hook argument could not be used
    #[error("Invalid argument for hook {hook}: {message}")]
    InvalidArgument { hook: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "built-in templates only".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
