//! Loading the documentation index.
//!
//! The source directory holds the generated document list and, optionally,
//! a `config.toml`:
//!
//! ```text
//! docs/
//! ├── documents.json     # { "latest": "2.1", "documents": [ ... ] }
//! └── config.toml        # Optional, see [`crate::config`]
//! ```
//!
//! The index is read once and handed to [`Catalog::new`]; nothing downstream
//! reaches back into the file.

use crate::catalog::Catalog;
use crate::collate;
use crate::config::{self, SiteConfig};
use crate::types::Document;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const INDEX_FILE: &str = "documents.json";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Contents of `documents.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Index {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Index {
    /// The latest version: config override, then the index field, then
    /// the highest version present. Empty when there are no documents.
    pub fn resolve_latest(&self, config: &SiteConfig) -> String {
        config
            .site
            .latest
            .clone()
            .or_else(|| self.latest.clone().filter(|l| !l.is_empty()))
            .or_else(|| {
                collate::sort_versions(self.documents.iter().map(|d| d.version.clone()).collect())
                    .pop()
            })
            .unwrap_or_default()
    }
}

/// An index plus the config that goes with it.
#[derive(Debug, Clone)]
pub struct Source {
    pub catalog: Catalog,
    pub config: SiteConfig,
}

pub fn load_index(path: &Path) -> Result<Index, IndexError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read `documents.json` and `config.toml` from `dir` into a catalog.
pub fn load_source(dir: &Path) -> Result<Source, IndexError> {
    let config = config::load_config(dir)?;
    let index = load_index(&dir.join(INDEX_FILE))?;
    let latest = index.resolve_latest(&config);
    Ok(Source {
        catalog: Catalog::new(index.documents, latest),
        config,
    })
}
