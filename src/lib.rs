//! Unfurls - social-sharing tags and oEmbed sidecars for static sites.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── cli/        # clap definitions, build and check commands
//! ├── config/     # unfurls.toml ([site], [unfurls])
//! ├── generator/  # oEmbed sidecar writer
//! ├── page/       # content items, metadata values, manifest
//! ├── pipeline/   # enrich → tag → emit driver
//! ├── unfurl/     # enrichment, summaries, tag maps, <head> markup
//! └── utils/      # dates, HTML escaping, pluralization
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logger;
pub mod page;
pub mod pipeline;
pub mod unfurl;
pub mod utils;
