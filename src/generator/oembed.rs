//! oEmbed sidecar generation.
//!
//! Writes one `link`-type oEmbed document per tagged article:
//!
//! ```json
//! {"type":"link","version":"1.0","url":"http://example.com/posts/a.html","title":"A","provider_name":"Blog"}
//! ```

use crate::{config::SiteConfig, debug, log, page::ContentItem, utils::plural_count};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// oEmbed document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OEmbedInfo<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: &'static str,
    pub url: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<&'a str>,
}

impl<'a> OEmbedInfo<'a> {
    pub fn link(url: &'a str, title: &'a str, provider_name: Option<&'a str>) -> Self {
        Self {
            kind: "link",
            version: "1.0",
            url,
            title,
            provider_name,
        }
    }
}

/// Writes oEmbed sidecars under an output root.
#[derive(Debug, Clone)]
pub struct OEmbedGenerator<'a> {
    out_root: PathBuf,
    provider_name: Option<&'a str>,
    enabled: bool,
}

impl<'a> OEmbedGenerator<'a> {
    pub fn new(config: &'a SiteConfig, out_root: impl Into<PathBuf>) -> Self {
        Self {
            out_root: out_root.into(),
            provider_name: config.site.site_name(),
            enabled: config.unfurls.oembed,
        }
    }

    /// Document for one item, if it qualifies for a sidecar.
    ///
    /// Returns the sidecar's save path alongside the document.
    pub fn document<'i>(&self, item: &'i ContentItem) -> Option<(&'i str, OEmbedInfo<'i>)>
    where
        'a: 'i,
    {
        if !item.kind.is_article_like() {
            return None;
        }
        let url = item.meta_str("url")?;
        let title = item.meta_str("title")?;
        let oembed = item.unfurl.oembed.as_ref()?;

        Some((
            oembed.save_as.as_str(),
            OEmbedInfo::link(url, title, self.provider_name),
        ))
    }

    /// Write sidecars for every qualifying item. Returns the number written.
    pub fn generate_output(&self, items: &[ContentItem]) -> Result<usize> {
        if !self.enabled {
            return Ok(0);
        }

        let mut written = 0;
        for (save_as, info) in items.iter().filter_map(|item| self.document(item)) {
            let path = self.out_root.join(save_as);
            write_json(&path, &info)?;
            debug!("oembed"; "{}", path.display());
            written += 1;
        }

        if written > 0 {
            log!("oembed"; "wrote {}", plural_count(written, "sidecar"));
        }
        Ok(written)
    }
}

fn write_json(path: &Path, info: &OEmbedInfo<'_>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string(info)
        .with_context(|| format!("Failed to serialize oEmbed for {}", info.url))?;
    fs::write(path, json).with_context(|| format!("Failed to write oEmbed to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ContentKind, OEmbedLink};
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn config(name: Option<&str>) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = Some("http://example.com".into());
        config.site.name = name.map(String::from);
        config.unfurls.oembed = true;
        config
    }

    fn tagged(save_as: &str, oembed: &str) -> ContentItem {
        let mut item = ContentItem::article(save_as)
            .with_meta("url", format!("http://example.com/{save_as}"))
            .with_meta("title", "Test Article");
        item.unfurl.oembed = Some(OEmbedLink {
            save_as: oembed.into(),
            url: format!("http://example.com/{oembed}"),
        });
        item
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_writes_with_provider_name() {
        let temp = TempDir::new().unwrap();
        let config = config(Some("Test Site"));
        let generator = OEmbedGenerator::new(&config, temp.path());

        let items = [tagged("posts/test-article.html", "posts/test-article.json")];
        assert_eq!(generator.generate_output(&items).unwrap(), 1);

        assert_eq!(
            read_json(&temp.path().join("posts/test-article.json")),
            json!({
                "type": "link",
                "version": "1.0",
                "url": "http://example.com/posts/test-article.html",
                "title": "Test Article",
                "provider_name": "Test Site",
            })
        );
    }

    #[test]
    fn test_provider_name_absent() {
        let temp = TempDir::new().unwrap();
        let config = config(None);
        let generator = OEmbedGenerator::new(&config, temp.path());

        let items = [tagged("posts/x/index.html", "posts/x/oembed.json")];
        generator.generate_output(&items).unwrap();

        let json = read_json(&temp.path().join("posts/x/oembed.json"));
        assert!(json.get("provider_name").is_none());
        assert_eq!(json["type"], "link");
    }

    #[test]
    fn test_empty_site_name_omitted() {
        let temp = TempDir::new().unwrap();
        let config = config(Some(""));
        let generator = OEmbedGenerator::new(&config, temp.path());

        generator
            .generate_output(&[tagged("a.html", "a.json")])
            .unwrap();
        assert!(read_json(&temp.path().join("a.json")).get("provider_name").is_none());
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut config = config(Some("Test Site"));
        config.unfurls.oembed = false;
        let generator = OEmbedGenerator::new(&config, temp.path());

        assert_eq!(generator.generate_output(&[tagged("a.html", "a.json")]).unwrap(), 0);
        assert!(!temp.path().join("a.json").exists());
    }

    #[test]
    fn test_skips_unqualified_items() {
        let temp = TempDir::new().unwrap();
        let config = config(None);
        let generator = OEmbedGenerator::new(&config, temp.path());

        let mut no_title = tagged("a.html", "a.json");
        no_title.metadata.remove("title");
        let no_link = ContentItem::article("b.html")
            .with_meta("url", "http://example.com/b.html")
            .with_meta("title", "B");
        let mut page = tagged("c.html", "c.json");
        page.kind = ContentKind::Page;
        let mut translation = tagged("d.html", "d.json");
        translation.kind = ContentKind::Translation;

        let items = [no_title, no_link, page, translation];
        assert_eq!(generator.generate_output(&items).unwrap(), 1);
        assert!(!temp.path().join("a.json").exists());
        assert!(!temp.path().join("c.json").exists());
        assert!(temp.path().join("d.json").exists());
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        // A file where a directory is needed
        fs::write(temp.path().join("posts"), "").unwrap();

        let config = config(None);
        let generator = OEmbedGenerator::new(&config, temp.path());
        let err = generator
            .generate_output(&[tagged("posts/a.html", "posts/a.json")])
            .unwrap_err();
        assert!(format!("{err:#}").contains("posts"));
    }
}
