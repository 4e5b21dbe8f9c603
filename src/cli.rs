use std::path::PathBuf;

use assetgen::DEFAULT_CONFIG_FILE;
use clap::Parser;

/// assetgen - generate Dart constants for Flutter assets
#[derive(Parser, Debug)]
#[command(name = "assetgen")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Reads assetgen.yaml from the working directory; a missing file means defaults."
)]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print a summary, warnings and the manifest report
    #[arg(short, long)]
    pub verbose: bool,

    /// Render and compare without writing (with --verbose, show a diff)
    #[arg(long)]
    pub dry_run: bool,

    /// Keep running and regenerate when assets change
    #[arg(short, long)]
    pub watch: bool,

    /// Skip the pubspec.yaml check
    #[arg(long)]
    pub no_validate: bool,

    /// Output NDJSON events
    #[arg(long)]
    pub json: bool,
}
