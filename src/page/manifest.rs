//! JSON content manifest.
//!
//! Stands in for the host generator's content model: the list of generated
//! items plus the table of static files they may reference.
//!
//! ```json
//! {
//!   "items": [{"url": "posts/hello.html", "metadata": {"title": "Hello"}}],
//!   "static": {"images/a.png": "images/a.png"}
//! }
//! ```

use super::ContentItem;
use crate::unfurl::StaticAssets;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{fs, path::Path};

/// Static source path → URL relative to the site root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticContent(FxHashMap<String, String>);

impl StaticContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl StaticAssets for StaticContent {
    fn lookup(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticContent {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything the host hands over for one generation pass.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub items: Vec<ContentItem>,
    #[serde(rename = "static")]
    pub assets: StaticContent,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    ///
    /// Items without a `save_as` are saved at their URL.
    pub fn from_str(content: &str) -> Result<Self> {
        let mut manifest: Self = serde_json::from_str(content)?;
        for item in manifest.items.iter_mut().filter(|i| i.save_as.is_empty()) {
            item.save_as.clone_from(&item.url);
        }
        Ok(manifest)
    }

    /// Load a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }
}
