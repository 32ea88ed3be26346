//! Typed errors for loading navigation trees

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a navigation tree from disk or text
///
/// The renderer never produces these; they belong to the loading step
/// that turns site configuration into a [`NavTree`](super::NavTree).
#[derive(Debug, Error)]
pub enum NavError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON input did not match the `[title, urlOrChildren, icon]` shape
    #[error("Invalid JSON navigation tree: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML input did not match the `[title, urlOrChildren, icon]` shape
    #[error("Invalid TOML navigation tree: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither `.json` nor `.toml`
    #[error("Unsupported navigation file format: {0}")]
    UnsupportedFormat(String),

    /// No file was given and the config names none
    #[error("No sidebar file given (pass a path or set site.sidebar in config)")]
    MissingSidebar,
}
