//! `[site]` section configuration.
//!
//! Site context the unfurl stages need from the host generator.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! name = "Example"
//! locale = ["en_US.UTF8"]
//! summary_max_words = 50
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Default word budget for generated summaries.
pub const DEFAULT_SUMMARY_MAX_WORDS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site root URL (e.g., "https://example.com"). Tags requiring a full
    /// URL are skipped when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Site name, used as the oEmbed `provider_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Locale list; only the first entry is used (e.g., "en_US.UTF8").
    pub locale: Vec<String>,

    /// Word budget for summaries generated from the page body.
    pub summary_max_words: usize,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            locale: Vec::new(),
            summary_max_words: DEFAULT_SUMMARY_MAX_WORDS,
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Site root URL, treating an empty string as unset.
    pub fn site_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Site name, treating an empty string as unset.
    pub fn site_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with an http(s) scheme and a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = self.site_url() else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
