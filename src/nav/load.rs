//! Loading navigation trees from site configuration files

use super::error::NavError;
use super::model::NavTree;
use serde::Deserialize;
use std::path::Path;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavFormat {
    /// Top-level JSON array of triples
    Json,
    /// TOML document with a top-level `sidebar = [...]` array
    Toml,
}

impl NavFormat {
    pub fn from_path(path: &Path) -> Result<Self, NavError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(NavFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(NavFormat::Toml),
            other => Err(NavError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// TOML cannot hold a bare top-level array, so the tree lives under a key
#[derive(Deserialize)]
struct TomlDocument {
    #[serde(default)]
    sidebar: NavTree,
}

/// Parse a tree from text in the given format
pub fn parse_str(content: &str, format: NavFormat) -> Result<NavTree, NavError> {
    let tree: NavTree = match format {
        NavFormat::Json => serde_json::from_str(content)?,
        NavFormat::Toml => toml::from_str::<TomlDocument>(content)?.sidebar,
    };
    Ok(tree)
}

/// Read and parse a tree, picking the format from the file extension
pub fn load_file(path: &Path) -> Result<NavTree, NavError> {
    let format = NavFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| NavError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_str(&content, format)?;
    tracing::debug!(
        "Loaded sidebar from {:?}: {} entries, depth {}",
        path,
        tree.count(),
        tree.depth()
    );
    Ok(tree)
}
