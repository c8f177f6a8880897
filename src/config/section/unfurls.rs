//! `[unfurls]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [unfurls]
//! default_lede = "{static}/images/lede.png"
//! default_card_type = "summary"
//! first_image_lede = true
//! facebook = true
//! twitter = true
//! oembed = true
//! ```

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};

/// Unfurl behavior switches. Every option is optional; booleans default to
/// `false`, and an absent flag behaves exactly like an explicit `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnfurlsConfig {
    /// Fallback lede image: `{static}/...` reference or absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lede: Option<String>,

    /// Fallback card type (e.g., "summary", "player").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card_type: Option<String>,

    /// Use the first linked image as lede when none is declared.
    pub first_image_lede: bool,

    /// Attach Facebook tags (`fb:app_id`).
    pub facebook: bool,

    /// Attach Twitter Card tags.
    pub twitter: bool,

    /// Derive oEmbed paths and write sidecar files.
    pub oembed: bool,
}

impl UnfurlsConfig {
    pub const DEFAULT_LEDE: FieldPath = FieldPath::new("unfurls.default_lede");
    pub const OEMBED: FieldPath = FieldPath::new("unfurls.oembed");

    /// Configured default lede, treating an empty string as unset.
    pub fn default_lede(&self) -> Option<&str> {
        self.default_lede.as_deref().filter(|s| !s.is_empty())
    }

    /// Configured default card type, treating an empty string as unset.
    pub fn default_card_type(&self) -> Option<&str> {
        self.default_card_type.as_deref().filter(|s| !s.is_empty())
    }
}
