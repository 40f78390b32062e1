//! Application services - Use case implementations

pub mod location_helper;
mod nearby_search;
mod rating_summary;

pub use location_helper::{format_distance, format_location_line, format_location_with_link};
pub use nearby_search::{NearbyLocation, NearbyQuery, NearbySearchService, SearchConfig};
pub use rating_summary::{RatingSummary, RatingSummaryService};
