//! Location helper utilities
//!
//! Pure functions for formatting distances and generating maps links for
//! response payloads.

use domain::{GeoCoordinate, Location};

/// Distances below this are shown in meters
const METERS_THRESHOLD: f64 = 1_000.0;

/// Format a distance for display: whole meters below 1 km, one decimal above
///
/// The threshold applies to the rounded value, so 999.6 m shows as `1.0 km`.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters.round() < METERS_THRESHOLD {
        format!("{meters:.0} m")
    } else {
        format!("{:.1} km", meters / 1_000.0)
    }
}

/// Generate a Google Maps link from a coordinate
#[must_use]
pub fn generate_maps_link(coordinate: &GeoCoordinate) -> String {
    format!(
        "https://maps.google.com/maps?q={},{}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}

/// Format a location as a single line, with its distance when known
#[must_use]
pub fn format_location_line(location: &Location, distance_meters: Option<f64>) -> String {
    let mut line = format!("📍 {}", location.name());
    if let Some(category) = location.category() {
        line.push_str(&format!(" [{category}]"));
    }
    if let Some(meters) = distance_meters {
        line.push_str(&format!(" · {}", format_distance(meters)));
    }
    line
}

/// Format a location with a maps link on a second line
#[must_use]
pub fn format_location_with_link(location: &Location, distance_meters: Option<f64>) -> String {
    let line = format_location_line(location, distance_meters);
    match location.coordinate() {
        Some(coordinate) => format!("{line}\n🗺️ {}", generate_maps_link(&coordinate)),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_hall() -> Location {
        Location::with_coordinate(
            "Seoul City Hall",
            GeoCoordinate::from_degrees(37.5663, 126.9779).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_distance_meters() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(849.6), "850 m");
    }

    #[test]
    fn test_format_distance_kilometers() {
        assert_eq!(format_distance(1_000.0), "1.0 km");
        assert_eq!(format_distance(3_240.0), "3.2 km");
        assert_eq!(format_distance(325_000.0), "325.0 km");
    }

    #[test]
    fn test_format_distance_near_threshold() {
        assert_eq!(format_distance(999.4), "999 m");
        assert_eq!(format_distance(999.5), "1.0 km");
        assert_eq!(format_distance(999.6), "1.0 km");
    }

    #[test]
    fn test_generate_maps_link() {
        let coordinate = GeoCoordinate::from_degrees(52.52, 13.405).unwrap();
        assert_eq!(
            generate_maps_link(&coordinate),
            "https://maps.google.com/maps?q=52.52,13.405"
        );
    }

    #[test]
    fn test_format_location_line() {
        let location = city_hall().with_category("landmark");
        assert_eq!(
            format_location_line(&location, Some(24.4)),
            "📍 Seoul City Hall [landmark] · 24 m"
        );
        assert_eq!(format_location_line(&location, None), "📍 Seoul City Hall [landmark]");
    }

    #[test]
    fn test_format_location_with_link() {
        let formatted = format_location_with_link(&city_hall(), Some(1_500.0));
        assert!(formatted.starts_with("📍 Seoul City Hall · 1.5 km"));
        assert!(formatted.contains("🗺️ https://maps.google.com/maps?q=37.5663,126.9779"));
    }

    #[test]
    fn test_format_location_without_coordinate_has_no_link() {
        let location = Location::new("Somewhere").unwrap();
        assert_eq!(format_location_with_link(&location, None), "📍 Somewhere");
    }
}
