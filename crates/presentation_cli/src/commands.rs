//! Command handlers
//!
//! Each handler returns the text to print so it can be tested without a
//! terminal.

use std::path::Path;

use anyhow::{Context, bail};
use application::{
    NearbyQuery, NearbySearchService, RatingSummaryService, format_distance,
    format_location_line, format_location_with_link,
};
use domain::{Decimal, GeoCoordinate, Rating};
use infrastructure::{AppConfig, LocationCatalog};
use tracing::debug;

/// Distance between two points, in meters and human-readable form
pub fn distance(
    lat1: Decimal,
    lon1: Decimal,
    lat2: Decimal,
    lon2: Decimal,
) -> anyhow::Result<String> {
    let from = GeoCoordinate::new(lat1, lon1).context("first coordinate")?;
    let to = GeoCoordinate::new(lat2, lon2).context("second coordinate")?;
    let meters = from.distance_to(&to);
    debug!(%from, %to, meters, "Distance computed");
    Ok(format!(
        "📏 {from} → {to}\n   {meters:.1} m ({})",
        format_distance(meters)
    ))
}

/// Star display of one score
pub fn rating_show(score: Decimal) -> anyhow::Result<String> {
    let rating = Rating::new(score)?;
    Ok(format!("{rating} · {} stars", rating.to_stars()))
}

/// Average of several scores
pub fn rating_average(scores: &[Decimal]) -> anyhow::Result<String> {
    let ratings = scores
        .iter()
        .enumerate()
        .map(|(i, score)| Rating::new(*score).with_context(|| format!("score #{}", i + 1)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(match Rating::average(&ratings) {
        Some(average) => format!("{average} from {} ratings", ratings.len()),
        None => "No ratings given".to_string(),
    })
}

/// Nearby search parameters taken from the command line
#[derive(Debug, Clone, Copy)]
pub struct NearbyArgs {
    pub lat: Decimal,
    pub lon: Decimal,
    pub radius: Option<f64>,
    pub limit: Option<usize>,
    pub json: bool,
}

/// Locations from a catalog ranked by distance
pub fn nearby(config: &AppConfig, catalog: &Path, args: NearbyArgs) -> anyhow::Result<String> {
    let catalog = LocationCatalog::from_path(catalog)?;
    let center = GeoCoordinate::new(args.lat, args.lon).context("search center")?;

    let mut query = NearbyQuery::new(center);
    query.radius_meters = args.radius;
    query.limit = args.limit;

    let service = NearbySearchService::new(config.search.clone())?;
    let hits = service.search(catalog.locations(), &query)?;

    if args.json {
        return Ok(serde_json::to_string_pretty(&hits)?);
    }
    if hits.is_empty() {
        return Ok(format!("No locations found near {center}"));
    }
    Ok(hits
        .iter()
        .map(|hit| format_location_with_link(&hit.location, Some(hit.distance_meters)))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Aggregate rating of one catalog location
pub fn summary(catalog: &Path, location: &str) -> anyhow::Result<String> {
    let catalog = LocationCatalog::from_path(catalog)?;
    let location = catalog.find(location)?;
    let summary = RatingSummaryService::new().summarize(location.id(), catalog.reviews());
    Ok(format!(
        "{}\n⭐ {summary} ({} reviews)",
        format_location_line(location, None),
        summary.review_count
    ))
}

/// Effective configuration rendered as TOML
pub fn show_config(config: &AppConfig) -> anyhow::Result<String> {
    let rendered = toml::to_string_pretty(config)?;
    if rendered.trim().is_empty() {
        bail!("configuration rendered empty");
    }
    Ok(rendered)
}
