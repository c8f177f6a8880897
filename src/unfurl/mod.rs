//! Unfurl metadata and tag generation.
//!
//! # Stages
//!
//! ```text
//! enrich_batch ──► insert_tags ──► OEmbedGenerator (generator/oembed.rs)
//!   (defaults)     (og/fb/twitter)     (sidecar JSON)
//! ```
//!
//! - `enrich`: derive defaults (`type`, `url`, `domain`, `locale`, `lede`, ...)
//! - `summary`: plain-text descriptions
//! - `tags`: metadata → namespaced tag maps
//! - `head`: tag maps → `<meta>` markup

mod enrich;
mod head;
mod summary;
mod tags;
mod url;

pub use enrich::{
    BatchNotices, EnrichContext, IMAGE_EXTENSIONS, NoAssets, STATIC_MARKER, StaticAssets,
    derive_metadata, enrich_batch, enrich_item, resolve_lede,
};
pub use head::render_head;
pub use summary::{Summarizer, WordSummarizer};
pub use tags::{
    FB_TAGS, OG_TAGS, TWITTER_TAGS, TagContext, TagMap, insert_tags, map_to_tags, oembed_save_as,
};
pub use url::{join_url, netloc};
