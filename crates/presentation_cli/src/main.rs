//! Placemark CLI
//!
//! Coordinate distances, rating display and nearby search over a JSON catalog.

#![allow(clippy::print_stdout)]

use clap::Parser;
use infrastructure::{AppConfig, init_telemetry};
use presentation_cli::cli::{Cli, Commands, RatingCommand, log_filter_from_verbosity};
use presentation_cli::commands::{self, NearbyArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.telemetry = config.telemetry.with_filter(filter);
    }
    init_telemetry(&config.telemetry)?;

    let output = match cli.command {
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => commands::distance(lat1, lon1, lat2, lon2)?,
        Commands::Rating { action } => match action {
            RatingCommand::Show { score } => commands::rating_show(score)?,
            RatingCommand::Average { scores } => commands::rating_average(&scores)?,
        },
        Commands::Nearby {
            catalog,
            lat,
            lon,
            radius,
            limit,
            json,
        } => commands::nearby(
            &config,
            &catalog,
            NearbyArgs {
                lat,
                lon,
                radius,
                limit,
                json,
            },
        )?,
        Commands::Summary { catalog, location } => commands::summary(&catalog, &location)?,
        Commands::Config => commands::show_config(&config)?,
    };

    println!("{output}");
    Ok(())
}
