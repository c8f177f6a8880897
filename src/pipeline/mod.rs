//! Build pipeline.
//!
//! Runs the unfurl stages over a loaded site in lifecycle order:
//!
//! ```text
//! ┌─────────┐   ┌─────────┐   ┌─────────┐
//! │ enrich  │──►│   tag   │──►│  emit   │
//! │ (batch) │   │ (item)  │   │ (oEmbed)│
//! └─────────┘   └─────────┘   └─────────┘
//! ```
//!
//! Each stage is also exposed on [`Site`] so hosts can bind them to their
//! own lifecycle.

use crate::{
    config::SiteConfig,
    generator::OEmbedGenerator,
    page::{ContentItem, Manifest, StaticContent},
    unfurl::{
        BatchNotices, EnrichContext, Summarizer, TagContext, WordSummarizer, enrich_batch,
        insert_tags,
    },
};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// A loaded site: configuration, content items, and static assets.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub items: Vec<ContentItem>,
    pub assets: StaticContent,
    /// Output root for generated files.
    pub output: PathBuf,
}

impl Site {
    pub fn new(config: SiteConfig, manifest: Manifest, output: impl Into<PathBuf>) -> Self {
        Self {
            config,
            items: manifest.items,
            assets: manifest.assets,
            output: output.into(),
        }
    }

    /// Stage 1: fill in derived metadata for all article-like items.
    pub fn enrich(&mut self) -> BatchNotices {
        let ctx = EnrichContext::new(&self.config, &self.assets);
        enrich_batch(&mut self.items, &ctx)
    }

    /// Stage 2: attach tags using the default word summarizer.
    pub fn tag(&mut self) -> usize {
        let summarizer = WordSummarizer::new(self.config.site.summary_max_words, &self.assets);
        tag_items(&mut self.items, &self.config, &summarizer)
    }

    /// Stage 2 with a caller-provided summarizer.
    pub fn tag_with(&mut self, summarizer: &dyn Summarizer) -> usize {
        tag_items(&mut self.items, &self.config, summarizer)
    }

    /// Stage 3: write oEmbed sidecars.
    pub fn emit(&self) -> Result<usize> {
        OEmbedGenerator::new(&self.config, &self.output).generate_output(&self.items)
    }
}

fn tag_items(items: &mut [ContentItem], config: &SiteConfig, summarizer: &dyn Summarizer) -> usize {
    let ctx = TagContext {
        settings: &config.unfurls,
        site_url: config.site_url(),
        summarizer,
    };

    let mut tagged = 0;
    for item in items.iter_mut().filter(|i| i.kind.is_article_like()) {
        insert_tags(item, &ctx);
        tagged += 1;
    }
    tagged
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub notices: BatchNotices,
    /// Items that received tags.
    pub tagged: usize,
    /// oEmbed files written.
    pub sidecars: usize,
}

/// Ordered driver for the three stages.
#[derive(Default)]
pub struct Pipeline<'s> {
    summarizer: Option<&'s dyn Summarizer>,
}

impl<'s> Pipeline<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default word summarizer.
    pub fn with_summarizer(mut self, summarizer: &'s dyn Summarizer) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn run(&self, site: &mut Site) -> Result<BuildReport> {
        let notices = site.enrich();
        let tagged = match self.summarizer {
            Some(summarizer) => site.tag_with(summarizer),
            None => site.tag(),
        };
        let sidecars = site.emit()?;

        Ok(BuildReport {
            notices,
            tagged,
            sidecars,
        })
    }
}
