//! Auxiliary output generators.
//!
//! - **oEmbed**: per-article `link` documents next to the rendered page
//!   (`posts/a.json`, `posts/a/oembed.json`)

pub mod oembed;

pub use oembed::{OEmbedGenerator, OEmbedInfo};
