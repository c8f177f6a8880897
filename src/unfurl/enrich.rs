//! Metadata enrichment.
//!
//! Fills the gaps in each article's metadata before tagging:
//!
//! | Key         | Derived from                                             |
//! |-------------|----------------------------------------------------------|
//! | `lede`      | declared lede → `default_lede` → first linked image      |
//! | `type`      | always `article`                                         |
//! | `card_type` | `default_card_type` → `summary_large_image` / `summary`  |
//! | `locale`    | first locale, encoding suffix dropped                    |
//! | `url`       | site root + item URL                                     |
//! | `domain`    | authority of the site root as written, minus userinfo    |
//!
//! Explicit metadata always wins, except `lede`: a declared `{static}`
//! reference is replaced by its absolute URL, or dropped if it cannot be
//! resolved.

use super::url::{join_url, netloc};
use crate::config::{SiteConfig, UnfurlsConfig};
use crate::log;
use crate::page::{ContentItem, Metadata};
use serde::Serialize;

/// Marker prefix for site-relative static asset references.
pub const STATIC_MARKER: &str = "{static}";

/// Extensions accepted when picking the first linked image as lede.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Lookup of static files known to the host generator.
pub trait StaticAssets {
    /// Site-relative URL of the static file at `path`, if it exists.
    fn lookup(&self, path: &str) -> Option<&str>;
}

/// Resolver that knows no assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl StaticAssets for NoAssets {
    fn lookup(&self, _path: &str) -> Option<&str> {
        None
    }
}

/// Everything enrichment reads besides the item itself.
#[derive(Clone, Copy)]
pub struct EnrichContext<'a> {
    pub settings: &'a UnfurlsConfig,
    pub site_url: Option<&'a str>,
    pub locale: &'a [String],
    pub assets: &'a dyn StaticAssets,
}

impl<'a> EnrichContext<'a> {
    pub fn new(config: &'a SiteConfig, assets: &'a dyn StaticAssets) -> Self {
        Self {
            settings: &config.unfurls,
            site_url: config.site_url(),
            locale: &config.site.locale,
            assets,
        }
    }
}

/// Batch-level notices, each emitted at most once per `enrich_batch` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchNotices {
    /// Site URL unset; URL-dependent tags are skipped.
    pub missing_site_url: bool,
    /// Default lede without the `{static}` marker, used as an absolute URL.
    pub absolute_default_lede: bool,
}

impl BatchNotices {
    fn warn_missing_site_url(&mut self) {
        if !self.missing_site_url {
            log!("warning"; "site url not defined; tags requiring full URL will not be generated");
            self.missing_site_url = true;
        }
    }

    fn note_absolute_default_lede(&mut self) {
        if !self.absolute_default_lede {
            log!("note"; "default lede images not using {} assumed to be full URLs", STATIC_MARKER);
            self.absolute_default_lede = true;
        }
    }
}

/// Resolve a lede reference to an absolute URL.
///
/// `{static}` references need both a site URL and a matching static file;
/// anything else is taken as already absolute and returned unchanged.
pub fn resolve_lede(reference: &str, ctx: &EnrichContext<'_>) -> Option<String> {
    match reference.strip_prefix(STATIC_MARKER) {
        Some(path) => {
            let path = path.trim_start_matches('/');
            let site_url = ctx.site_url?;
            let url = ctx.assets.lookup(path)?;
            Some(join_url(site_url, url))
        }
        None => Some(reference.to_owned()),
    }
}

/// First linked static file with an image extension, as an absolute URL.
fn first_image_lede(item: &ContentItem, site_url: Option<&str>) -> Option<String> {
    let site_url = site_url?;
    item.static_links
        .iter()
        .find(|link| {
            link.rsplit('.')
                .next()
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
        })
        .map(|link| join_url(site_url, link))
}

/// Compute the metadata enrichment would add to `item`.
///
/// Pure: the item is not modified.
pub fn derive_metadata(item: &ContentItem, ctx: &EnrichContext<'_>) -> Metadata {
    let settings = ctx.settings;
    let existing = &item.metadata;
    let mut metadata = Metadata::default();

    let lede = match existing.get("lede") {
        Some(declared) => declared.as_str().and_then(|r| resolve_lede(r, ctx)),
        None => match settings.default_lede() {
            Some(default) => resolve_lede(default, ctx),
            None if settings.first_image_lede => first_image_lede(item, ctx.site_url),
            None => None,
        },
    };
    let has_lede = lede.is_some();
    if let Some(lede) = lede {
        metadata.insert("lede".into(), lede.into());
    }

    if !existing.contains_key("type") {
        metadata.insert("type".into(), "article".into());
    }

    if !existing.contains_key("card_type") {
        let card_type = match settings.default_card_type() {
            Some(card_type) => card_type,
            None if has_lede => "summary_large_image",
            None => "summary",
        };
        metadata.insert("card_type".into(), card_type.into());
    }

    if !existing.contains_key("locale")
        && let Some(locale) = ctx.locale.first().filter(|l| !l.is_empty())
    {
        let locale = locale.split('.').next().unwrap_or(locale);
        metadata.insert("locale".into(), locale.into());
    }

    if let Some(site_url) = ctx.site_url {
        metadata.insert("url".into(), join_url(site_url, &item.url).into());
        if let Some(domain) = netloc(site_url) {
            metadata.insert("domain".into(), domain.into());
        }
    }

    metadata
}

/// Merge derived metadata into `item`.
pub fn enrich_item(item: &mut ContentItem, ctx: &EnrichContext<'_>) {
    let mut derived = derive_metadata(item, ctx);

    match derived.remove("lede") {
        Some(lede) => {
            item.metadata.insert("lede".into(), lede);
        }
        None => {
            let unresolved = item
                .meta_str("lede")
                .is_some_and(|r| r.starts_with(STATIC_MARKER));
            if unresolved {
                item.metadata.remove("lede");
            }
        }
    }

    for (key, value) in derived {
        item.metadata.entry(key).or_insert(value);
    }
}

/// Enrich every article-like item; other kinds are left untouched.
pub fn enrich_batch(items: &mut [ContentItem], ctx: &EnrichContext<'_>) -> BatchNotices {
    let mut notices = BatchNotices::default();

    if ctx.site_url.is_none() {
        notices.warn_missing_site_url();
    }

    if let Some(lede) = ctx.settings.default_lede()
        && !lede.starts_with(STATIC_MARKER)
    {
        notices.note_absolute_default_lede();
    }

    for item in items.iter_mut().filter(|i| i.kind.is_article_like()) {
        enrich_item(item, ctx);
    }

    notices
}
