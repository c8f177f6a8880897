//! `unfurls check`: validate configuration and print effective settings.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};

/// Effective configuration as TOML, defaults filled in.
pub fn effective_config(config: &SiteConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Print the effective configuration of an already validated config.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    log!("check"; "{} is valid", config.config_path.display());
    print!("{}", effective_config(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_config_fills_defaults() {
        let config = SiteConfig::from_str("[site]\nurl = \"http://example.com\"").unwrap();
        let toml = effective_config(&config).unwrap();

        assert!(toml.contains("url = \"http://example.com\""));
        assert!(toml.contains("summary_max_words = 50"));
        assert!(toml.contains("oembed = false"));
        assert!(!toml.contains("default_lede"));
    }

    #[test]
    fn test_effective_config_round_trips() {
        let config = SiteConfig::from_str(
            "[site]\nname = \"Blog\"\nlocale = [\"en_US\"]\n[unfurls]\ntwitter = true",
        )
        .unwrap();
        let parsed = SiteConfig::from_str(&effective_config(&config).unwrap()).unwrap();

        assert_eq!(parsed.site, config.site);
        assert_eq!(parsed.unfurls, config.unfurls);
    }
}
