//! `unfurls build`.
//!
//! - **Load** - read the content manifest
//! - **Run** - enrich → tag → oEmbed sidecars
//! - **Report** - optional JSON dump of attached tags and `<head>` markup

use crate::{
    cli::BuildArgs,
    config::SiteConfig,
    log,
    page::{Manifest, Unfurl},
    pipeline::{BuildReport, Pipeline, Site},
    unfurl::render_head,
    utils::plural_count,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Per-item entry in the `--tags` report.
#[derive(Serialize)]
struct TagReportEntry<'a> {
    #[serde(flatten)]
    unfurl: &'a Unfurl,
    head: String,
}

/// Build the manifest described by `args`.
pub fn build_site(config: SiteConfig, args: &BuildArgs) -> Result<BuildReport> {
    let manifest = Manifest::from_path(&args.manifest)?;
    let mut site = Site::new(config, manifest, &args.output);

    let report = Pipeline::new().run(&mut site)?;
    log!("build"; "tagged {}", plural_count(report.tagged, "item"));

    if let Some(path) = &args.tags {
        write_tag_report(&site, path)?;
        log!("build"; "tags written to {}", path.display());
    }

    Ok(report)
}

/// Tagged items keyed by URL, in manifest order.
fn tag_report(site: &Site) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut report = serde_json::Map::new();
    for item in site.items.iter().filter(|item| item.unfurl.og.is_some()) {
        let entry = TagReportEntry {
            unfurl: &item.unfurl,
            head: render_head(&item.unfurl),
        };
        report.insert(item.url.clone(), serde_json::to_value(entry)?);
    }
    Ok(report)
}

fn write_tag_report(site: &Site, path: &Path) -> Result<()> {
    let report = tag_report(site)?;
    let json = serde_json::to_string_pretty(&report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write tags to {}", path.display()))
}
