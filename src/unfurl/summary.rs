//! Plain-text summaries for `og:description` / `twitter:description`.

use super::enrich::{STATIC_MARKER, StaticAssets};
use super::url::join_url;
use crate::page::ContentItem;
use crate::utils::html::unescape;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Produces the summary stored in an item's `summary` metadata.
pub trait Summarizer {
    /// Summary of `item`, with site-relative references made absolute
    /// against `site_url`. `None` leaves the item's metadata untouched.
    fn summarize(&self, item: &ContentItem, site_url: &str) -> Option<String>;
}

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static STATIC_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\{static\}/?([^ \t\r\n"'<>]+)"#).unwrap());

/// Summarizer that flattens HTML to text and keeps the first `max_words`
/// words of the body.
///
/// An explicit `summary` in the metadata is used as-is (flattened, never
/// truncated). A `max_words` of 0 disables truncation.
pub struct WordSummarizer<'a> {
    pub max_words: usize,
    pub assets: &'a dyn StaticAssets,
}

impl<'a> WordSummarizer<'a> {
    pub fn new(max_words: usize, assets: &'a dyn StaticAssets) -> Self {
        Self { max_words, assets }
    }

    /// Rewrite `{static}/path` references to absolute URLs.
    fn absolutize<'t>(&self, text: &'t str, site_url: &str) -> std::borrow::Cow<'t, str> {
        if !text.contains(STATIC_MARKER) {
            return text.into();
        }
        STATIC_REF_RE.replace_all(text, |caps: &Captures<'_>| {
            match self.assets.lookup(&caps[1]) {
                Some(url) => join_url(site_url, url),
                None => caps[0].to_string(),
            }
        })
    }
}

impl Summarizer for WordSummarizer<'_> {
    fn summarize(&self, item: &ContentItem, site_url: &str) -> Option<String> {
        let (source, truncate) = match item.meta_str("summary") {
            Some(explicit) => (explicit, false),
            None => (item.content.as_str(), self.max_words > 0),
        };

        let text = self.absolutize(source, site_url);
        let text = TAG_RE.replace_all(&text, " ");
        let text = unescape(&text);

        let mut words = text.split_whitespace();
        let mut summary = if truncate {
            words.by_ref().take(self.max_words).collect::<Vec<_>>().join(" ")
        } else {
            words.by_ref().collect::<Vec<_>>().join(" ")
        };

        if words.next().is_some() {
            summary.push('…');
        }

        (!summary.is_empty()).then_some(summary)
    }
}
