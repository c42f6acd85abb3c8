//! # darkroom
//!
//! Command-line front end for [`darkroom_exposure`] and [`darkroom_catalog`].
//!
//! ## Commands
//!
//! - `stops <base> <new>`: difference between two times.
//! - `adjust <base> --stops N | --points N`: a time moved by a delta.
//! - `multiplier --stops N | --points N`: the factor a delta applies.
//! - `resize <old> <new> [--time T]`: compensation for a new print size.
//! - `catalog [--file F] check | prints | reprint <label> <size>`.
//!
//! Logging goes to stderr and follows `RUST_LOG`, falling back to the
//! `log_level` in the config file.

mod cli;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use darkroom_catalog::Catalog;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CatalogAction, Cli, Command};
use config::DarkroomConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = DarkroomConfig::resolve(cli.config.as_deref())?;
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &source {
        Some(path) => debug!(path = %path.display(), "config loaded"),
        None => debug!("using default config"),
    }

    let output = run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}

fn run(command: Command, config: &DarkroomConfig) -> Result<String> {
    let precision = usize::from(config.precision);
    match command {
        Command::Stops { base, new } => commands::stops(base, new, precision),
        Command::Adjust { base, delta } => commands::adjust(base, delta.delta()?, precision),
        Command::Multiplier { delta } => Ok(commands::multiplier(delta.delta()?, precision)),
        Command::Resize { old, new, time } => commands::resize(old, new, time, precision),
        Command::Catalog { file, action } => {
            let path = catalog_path(file, config)?;
            let catalog = Catalog::load_json(&path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            match action {
                CatalogAction::Check => {
                    info!(path = %path.display(), "catalog is valid");
                    Ok(commands::catalog_check(&catalog))
                }
                CatalogAction::Prints => commands::catalog_prints(&catalog, precision),
                CatalogAction::Reprint { label, new } => {
                    commands::catalog_reprint(&catalog, &label, new, precision)
                }
            }
        }
    }
}

/// `--file` wins over the configured catalog.
fn catalog_path(file: Option<PathBuf>, config: &DarkroomConfig) -> Result<PathBuf> {
    file.or_else(|| config.catalog.clone())
        .context("no catalog file: pass --file or set `catalog` in darkroom.toml")
}
