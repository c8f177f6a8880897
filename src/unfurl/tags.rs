//! Metadata → namespaced tag mapping.
//!
//! Tag maps are declarative `(metadata key, tag name)` lists. Mapping never
//! invents values: a metadata key that is absent simply yields no tag.

use super::summary::Summarizer;
use super::url::join_url;
use crate::config::UnfurlsConfig;
use crate::page::{ContentItem, Metadata, OEmbedLink, Tags};
use std::path::Path;

/// A declarative tag map: `(source metadata key, destination tag)`.
pub type TagMap = [(&'static str, &'static str)];

/// Open Graph tags, always attached.
pub const OG_TAGS: &TagMap = &[
    ("type", "og:type"),
    ("url", "og:url"),
    ("title", "og:title"),
    ("summary", "og:description"),
    ("lede", "og:image"),
    ("locale", "og:locale"),
    ("date", "article:published_time"),
    ("modified", "article:modified_time"),
];

/// Facebook tags, attached when `facebook` is enabled.
pub const FB_TAGS: &TagMap = &[("fb_app_id", "fb:app_id")];

/// Twitter Card tags, attached when `twitter` is enabled.
pub const TWITTER_TAGS: &TagMap = &[
    ("card_type", "twitter:card"),
    ("url", "twitter:url"),
    ("title", "twitter:title"),
    ("summary", "twitter:description"),
    ("lede", "twitter:image"),
    ("lede_desc", "twitter:image:alt"),
    ("author_twitter", "twitter:creator"),
    ("site_twitter", "twitter:site"),
    ("domain", "twitter:domain"),
    ("tl1", "twitter:label1"),
    ("td1", "twitter:data1"),
    ("tl2", "twitter:label2"),
    ("td2", "twitter:data2"),
];

/// Map metadata onto tags. Dates render as `YYYY-MM-DD`.
pub fn map_to_tags(metadata: &Metadata, tag_map: &[(&str, &str)]) -> Tags {
    tag_map
        .iter()
        .filter_map(|&(src, dst)| {
            metadata
                .get(src)
                .map(|value| (dst.to_owned(), value.to_tag_value()))
        })
        .collect()
}

/// Where the oEmbed sidecar for a page saved at `save_as` goes.
///
/// - `posts/x/index.html` → `posts/x/oembed.json`
/// - `posts/x.html`       → `posts/x.json`
/// - `posts/x`            → none
pub fn oembed_save_as(save_as: &str) -> Option<String> {
    let path = Path::new(save_as);

    let oembed = if path.file_name().is_some_and(|name| name == "index.html") {
        path.with_file_name("oembed.json")
    } else if path.extension().is_some() {
        path.with_extension("json")
    } else {
        return None;
    };

    Some(oembed.to_string_lossy().into_owned())
}

/// Inputs to the per-item tagging stage.
#[derive(Clone, Copy)]
pub struct TagContext<'a> {
    pub settings: &'a UnfurlsConfig,
    pub site_url: Option<&'a str>,
    pub summarizer: &'a dyn Summarizer,
}

/// Attach unfurl tags (and the oEmbed link, if enabled) to one item.
///
/// Requires the item to have been enriched first.
pub fn insert_tags(item: &mut ContentItem, ctx: &TagContext<'_>) {
    let settings = ctx.settings;

    if let Some(site_url) = ctx.site_url
        && let Some(summary) = ctx.summarizer.summarize(item, site_url)
    {
        item.metadata.insert("summary".into(), summary.into());
    }

    item.unfurl.og = Some(map_to_tags(&item.metadata, OG_TAGS));

    if settings.facebook {
        let tags = map_to_tags(&item.metadata, FB_TAGS);
        if !tags.is_empty() {
            item.unfurl.fb = Some(tags);
        }
    }

    if settings.twitter {
        let tags = map_to_tags(&item.metadata, TWITTER_TAGS);
        if !tags.is_empty() {
            item.unfurl.twitter = Some(tags);
        }
    }

    if settings.oembed
        && let Some(site_url) = ctx.site_url
        && let Some(save_as) = oembed_save_as(&item.save_as)
    {
        item.unfurl.oembed = Some(OEmbedLink {
            url: join_url(site_url, &save_as),
            save_as,
        });
    }
}
