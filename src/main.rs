//! Unfurls - social-sharing tags and oEmbed sidecars for static sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use unfurls::cli::{self, Cli, Commands};
use unfurls::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => cli::build::build_site(config, build_args).map(|_| ()),
        Commands::Check => cli::check::check_config(&config),
    }
}
