// Shared fixture gazetteer for integration tests. Injected via
// `Gazetteer::from_records` so tests never depend on the bundled dataset.
#![allow(dead_code)]

use nearcity_core::raw::CityRaw;
use nearcity_core::DefaultGazetteer;

pub fn record(name: &str, state: &str, lat: f64, lng: f64) -> CityRaw {
    CityRaw {
        name: name.to_string(),
        country: Some("US".to_string()),
        admin1: Some(state.to_string()),
        lat: Some(lat.to_string()),
        lng: Some(lng.to_string()),
        population: None,
    }
}

/// Texas metros (Houston, Austin, DFW) plus a few out-of-state cities.
/// Coordinates are real city centroids; distance expectations in the tests
/// are derived from these exact values.
pub fn fixture() -> DefaultGazetteer {
    DefaultGazetteer::from_records(vec![
        // Houston metro
        record("Houston", "TX", 29.7604, -95.3698),
        record("Pasadena", "TX", 29.6911, -95.2091), // ~10.8 mi
        record("Pearland", "TX", 29.5636, -95.2860), // ~14.5 mi
        record("Sugar Land", "TX", 29.6197, -95.6349), // ~18.7 mi
        record("Baytown", "TX", 29.7355, -94.9774),  // ~23.6 mi
        record("League City", "TX", 29.5075, -95.0949), // ~24.0 mi
        record("Katy", "TX", 29.7858, -95.8245),     // ~27.3 mi
        record("The Woodlands", "TX", 30.1658, -95.4613), // ~28.5 mi
        record("Conroe", "TX", 30.3118, -95.4560),   // ~38.5 mi
        record("Galveston", "TX", 29.3013, -94.7977), // ~46.8 mi
        // Austin metro
        record("Austin", "TX", 30.2672, -97.7431),
        record("Pflugerville", "TX", 30.4394, -97.6200), // ~14.0 mi
        record("Cedar Park", "TX", 30.5052, -97.8203),   // ~17.1 mi
        record("Round Rock", "TX", 30.5083, -97.6789),   // ~17.1 mi
        record("Georgetown", "TX", 30.6333, -97.6770),   // ~25.6 mi
        record("San Marcos", "TX", 29.8833, -97.9414),   // ~29.1 mi
        record("New Braunfels", "TX", 29.7030, -98.1245), // ~45.2 mi
        // DFW
        record("Dallas", "TX", 32.7767, -96.7970),
        record("Plano", "TX", 33.0198, -96.6989),
        record("Fort Worth", "TX", 32.7555, -97.3308),
        record("North Richland Hills", "TX", 32.8343, -97.2289),
        // Out of state
        record("Memphis", "TN", 35.1495, -90.0490),
        record("Nashville", "TN", 36.1627, -86.7816),
        record("St. Petersburg", "FL", 27.7676, -82.6403),
    ])
}

pub fn names(hits: &[nearcity_core::NearbyCity]) -> Vec<&str> {
    hits.iter().map(|c| c.name.as_str()).collect()
}
