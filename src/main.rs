//! assetgen CLI
//!
//! Usage: assetgen [--config=<path>] [--verbose] [--dry-run] [--watch] [--no-validate] [--json]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use assetgen::GeneratorConfig;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose);

    let (config, warnings) = GeneratorConfig::load_with_warnings(&cli.config)?;
    if !warnings.is_empty() {
        if ui.json {
            for warning in &warnings {
                let _ = ui::json::emit_tagged("config", "config_warning", warning);
            }
        } else {
            ui::output::print_config_warnings(&cli.config, &warnings, ui.style);
        }
    }

    let config = if cli.no_validate {
        config.with_validate_pubspec(false)
    } else {
        config
    };

    if cli.watch || config.watch_mode {
        commands::watch::cmd_watch(config, &ui)
    } else {
        commands::generate::cmd_generate(&config, &cli.config, cli.dry_run, &ui)
    }
}
