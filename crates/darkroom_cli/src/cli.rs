//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use darkroom_exposure::PrintSize;

use crate::commands::Delta;

#[derive(Debug, Parser)]
#[command(
    name = "darkroom",
    version,
    about = "Exposure arithmetic and print catalog for the darkroom"
)]
pub struct Cli {
    /// Config file (defaults to $DARKROOM_CONFIG, then ./darkroom.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal places in printed numbers
    #[arg(long, global = true, value_parser = clap::value_parser!(u16))]
    pub precision: Option<u16>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Difference between two exposure times, in stops and points
    Stops {
        /// Reference time in seconds
        base: f64,
        /// Compared time in seconds
        new: f64,
    },

    /// Move an exposure time by some stops or points
    Adjust {
        /// Time in seconds
        base: f64,
        #[command(flatten)]
        delta: DeltaArgs,
    },

    /// Time multiplier for a change in stops or points
    Multiplier {
        #[command(flatten)]
        delta: DeltaArgs,
    },

    /// Exposure change when printing at a different size
    Resize {
        /// Current print size, e.g. 4x6
        old: PrintSize,
        /// Target print size, e.g. 8x10
        new: PrintSize,
        /// Current exposure time, to compute the new one
        #[arg(long)]
        time: Option<f64>,
    },

    /// Work with a JSON catalog snapshot
    Catalog {
        /// Catalog file (overrides `catalog` in the config)
        #[arg(short, long, global = true)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// Validate the catalog and show record counts
    Check,
    /// List prints by date and sequence
    Prints,
    /// Exposure for re-printing a catalogued print at another size
    Reprint {
        /// Print label, e.g. 20160325-1
        label: String,
        /// Target print size
        new: PrintSize,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct DeltaArgs {
    /// Change in stops
    #[arg(long, allow_negative_numbers = true)]
    pub stops: Option<f64>,

    /// Change in points (12 per stop)
    #[arg(long, allow_negative_numbers = true)]
    pub points: Option<f64>,
}

impl DeltaArgs {
    pub fn delta(&self) -> anyhow::Result<Delta> {
        Delta::from_flags(self.stops, self.points)
    }
}
