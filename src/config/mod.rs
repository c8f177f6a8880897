//! Site configuration management for `unfurls.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] and [unfurls]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[site]`    | Site URL, name, locale list, summary length     |
//! | `[unfurls]` | Lede defaults, card type, network/oEmbed flags  |

pub mod section;
pub mod types;
mod util;

pub use section::{DEFAULT_SUMMARY_MAX_WORDS, SiteSectionConfig, UnfurlsConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};
pub use util::{find_config_file, find_config_file_from};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing unfurls.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site context (url, name, locale)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Unfurl settings
    #[serde(default)]
    pub unfurls: UnfurlsConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file, applies command
    /// overrides, then validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::NotFound(cli.config.clone()));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Site root URL, if configured and non-empty.
    pub fn site_url(&self) -> Option<&str> {
        self.site.site_url()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                crate::logger::set_verbose(build_args.verbose);

                // Override site URL if provided via CLI
                if let Some(ref url) = build_args.site_url {
                    self.site.url = Some(url.clone());
                }
            }
            Commands::Check => {}
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect all diagnostics without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);

        if self.unfurls.oembed && self.site_url().is_none() {
            diag.warn(
                UnfurlsConfig::OEMBED,
                format!(
                    "oEmbed is enabled but {} is not configured; no sidecars will be written",
                    SiteSectionConfig::URL
                ),
            );
        }

        if self.site_url().is_none()
            && self
                .unfurls
                .default_lede()
                .is_some_and(|lede| lede.starts_with(crate::unfurl::STATIC_MARKER))
        {
            diag.warn(
                UnfurlsConfig::DEFAULT_LEDE,
                format!(
                    "{} references a static file but {} is not configured; it will not resolve",
                    UnfurlsConfig::DEFAULT_LEDE,
                    SiteSectionConfig::URL
                ),
            );
        }

        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================
