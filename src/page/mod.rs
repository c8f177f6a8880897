//! Content items: metadata, kind, and attached unfurl output.

pub mod manifest;
mod value;

pub use manifest::{Manifest, StaticContent};
pub use value::{DATE_KEYS, MetaValue};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-item metadata mapping.
pub type Metadata = FxHashMap<String, MetaValue>;

/// A namespaced tag set (`og:title` → `Hello`).
pub type Tags = BTreeMap<String, String>;

/// Deserialize metadata from a JSON object, dropping values no tag can use.
fn deserialize_metadata<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<serde_json::Map<String, serde_json::Value>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| MetaValue::from_json(&key, value).map(|v| (key, v)))
        .collect())
}

/// Kind of content item supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A dated article.
    #[default]
    Article,
    /// A translation of an article.
    Translation,
    /// A standalone page (about, 404, ...). Never unfurled.
    Page,
}

impl ContentKind {
    /// Articles and their translations are the only unfurled kinds.
    #[inline]
    pub fn is_article_like(self) -> bool {
        matches!(self, Self::Article | Self::Translation)
    }
}

/// Location of an item's oEmbed sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OEmbedLink {
    /// Output path relative to the output root.
    pub save_as: String,
    /// Absolute URL of the sidecar.
    pub url: String,
}

/// Tags and links attached to an item by the tagging stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Unfurl {
    /// Open Graph tags. Set whenever tagging ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oembed: Option<OEmbedLink>,
}

/// One generated page.
///
/// # Manifest Fields
///
/// | Field          | Type          | Description                          |
/// |----------------|---------------|--------------------------------------|
/// | `kind`         | `ContentKind` | article (default), translation, page |
/// | `url`          | `String`      | URL relative to the site root        |
/// | `save_as`      | `String`      | Output path relative to output root  |
/// | `metadata`     | object        | Explicit metadata                    |
/// | `content`      | `String`      | Rendered HTML body                   |
/// | `static_links` | `Vec<String>` | Linked static files, in order        |
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub url: String,
    pub save_as: String,
    #[serde(deserialize_with = "deserialize_metadata")]
    pub metadata: Metadata,
    pub content: String,
    pub static_links: Vec<String>,
    /// Derived by the tagging stage; never read from the manifest.
    #[serde(skip)]
    pub unfurl: Unfurl,
}

impl ContentItem {
    /// New article at `url`, saved to the same relative path.
    pub fn article(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            save_as: url.clone(),
            url,
            ..Default::default()
        }
    }

    /// Builder-style metadata insert.
    pub fn with_meta(mut self, key: &str, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.to_owned(), value.into());
        self
    }

    /// Text metadata lookup.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetaValue::as_str)
    }
}
