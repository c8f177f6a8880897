//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Social unfurl tags and oEmbed sidecars for generated sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: unfurls.toml)
    #[arg(short = 'C', long, default_value = "unfurls.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Enrich, tag and write oEmbed sidecars for a content manifest
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Validate the configuration and print effective settings
    #[command(visible_alias = "c")]
    Check,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Content manifest (JSON) listing items and static files
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub manifest: PathBuf,

    /// Output root for oEmbed sidecars
    #[arg(short, long, default_value = "output", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Override site URL.
    ///
    /// Useful when the production URL differs from the one in unfurls.toml:
    ///   unfurls build --manifest content.json --site-url "https://example.com"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Write attached tags and rendered <head> markup per item to this JSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub tags: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
