//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::Decimal;

/// Placemark CLI
#[derive(Debug, Parser)]
#[command(name = "placemark")]
#[command(author, version, about = "Coordinate distances, ratings and nearby search", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./placemark.toml when present)
    #[arg(short, long, global = true, env = "PLACEMARK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Great-circle distance between two coordinates
    ///
    /// Example: placemark distance 37.5665 126.9780 35.1796 129.0756
    #[command(allow_negative_numbers = true)]
    Distance {
        /// Latitude of the first point
        lat1: Decimal,
        /// Longitude of the first point
        lon1: Decimal,
        /// Latitude of the second point
        lat2: Decimal,
        /// Longitude of the second point
        lon2: Decimal,
    },

    /// Validate and display ratings
    Rating {
        #[command(subcommand)]
        action: RatingCommand,
    },

    /// List catalog locations nearest to a point
    ///
    /// Example: placemark nearby --catalog places.json --lat 37.5665 --lon 126.978 --radius 2000
    #[command(allow_negative_numbers = true)]
    Nearby {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Latitude of the search center
        #[arg(long)]
        lat: Decimal,

        /// Longitude of the search center
        #[arg(long)]
        lon: Decimal,

        /// Search radius in meters (configured default when omitted)
        #[arg(short, long)]
        radius: Option<f64>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregate rating of a catalog location
    Summary {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Location ID or name
        #[arg(long)]
        location: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Subcommand)]
pub enum RatingCommand {
    /// Show the star display of a single score
    Show {
        /// Score between 1.0 and 5.0
        score: Decimal,
    },

    /// Average several scores
    Average {
        /// Scores between 1.0 and 5.0
        scores: Vec<Decimal>,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
