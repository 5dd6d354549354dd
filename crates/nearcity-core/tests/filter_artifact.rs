mod common;

use chrono::{Duration, Utc};
use common::fixture;
use nearcity_core::BuyerFilter;

#[test]
fn houston_artifact_shape() {
    let gaz = fixture();
    let filter = gaz.build_buyer_filter("Houston", "TX", 30.0);

    assert!(filter.nearby_cities.contains(&"Houston".to_string()));
    assert_eq!(filter.nearby_cities_count, filter.nearby_cities.len());
    assert_eq!(filter.radius_miles, 30.0);

    let bbox = filter.bounding_box.expect("bounding box present");
    let origin = gaz.resolve_city("Houston", "TX").unwrap();
    assert!(bbox.min_lat < origin.lat && origin.lat < bbox.max_lat);
    assert!(bbox.min_lng < origin.lng && origin.lng < bbox.max_lng);

    let prefix = filter.geohash_prefix.expect("geohash present");
    assert!(prefix.starts_with("9v"), "Houston cell is 9v*, got {prefix}");
}

#[test]
fn count_invariant_holds_across_inputs() {
    let gaz = fixture();
    for (city, state, radius) in [
        ("Houston", "TX", 30.0),
        ("Austin", "TX", 10.0),
        ("Memphis", "TN", 50.0),
        ("Unknownville", "ZZ", 30.0),
        ("Dallas", "TX", 0.0),
        ("Dallas", "TX", -1.0),
    ] {
        let filter = gaz.build_buyer_filter(city, state, radius);
        assert_eq!(
            filter.nearby_cities_count,
            filter.nearby_cities.len(),
            "invariant violated for {city}, {state} @ {radius}"
        );
    }
}

#[test]
fn self_inclusion_for_gazetteer_origins() {
    let gaz = fixture();
    for (city, state) in [("Houston", "TX"), ("Austin", "TX"), ("Memphis", "TN")] {
        for radius in [0.0, 10.0, 30.0] {
            let filter = gaz.build_buyer_filter(city, state, radius);
            assert!(
                filter
                    .nearby_cities
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(city)),
                "{city} missing from its own filter at radius {radius}"
            );
        }
    }
}

#[test]
fn unknown_origin_yields_empty_artifact() {
    let gaz = fixture();
    let filter = gaz.build_buyer_filter("Unknownville", "ZZ", 30.0);

    assert!(filter.nearby_cities.is_empty());
    assert_eq!(filter.nearby_cities_count, 0);
    assert_eq!(filter.radius_miles, 30.0);
    assert!(filter.bounding_box.is_none());
    assert!(filter.geohash_prefix.is_none());
}

#[test]
fn bounding_box_contains_every_accepted_city() {
    let gaz = fixture();
    let filter = gaz.build_buyer_filter("Austin", "TX", 50.0);
    let bbox = filter.bounding_box.unwrap();

    for city in &filter.nearby_cities {
        let coords = gaz.resolve_city(city, "TX").unwrap();
        assert!(
            bbox.contains(coords.lat, coords.lng),
            "{city} outside the artifact bounding box"
        );
    }
}

#[test]
fn subset_across_radii() {
    let gaz = fixture();
    let narrow = gaz.build_buyer_filter("Austin", "TX", 10.0);
    let wide = gaz.build_buyer_filter("Austin", "TX", 50.0);
    for city in &narrow.nearby_cities {
        assert!(wide.nearby_cities.contains(city));
    }
}

#[test]
fn zero_and_negative_radius() {
    let gaz = fixture();
    let at_zero = gaz.build_buyer_filter("Dallas", "TX", 0.0);
    assert_eq!(at_zero.nearby_cities, vec!["Dallas".to_string()]);

    let negative = gaz.build_buyer_filter("Dallas", "TX", -10.0);
    assert!(negative.nearby_cities.is_empty());
    assert_eq!(negative.nearby_cities_count, 0);
}

#[test]
fn refresh_triggers() {
    let gaz = fixture();
    let filter = gaz.build_buyer_filter("Houston", "TX", 30.0);
    let now = Utc::now();

    // Same city, fresh artifact: keep it.
    assert!(!filter.needs_refresh("Houston", now));
    assert!(!filter.needs_refresh("houston", now));
    // Nearby city the user "moved" to is still covered.
    assert!(!filter.needs_refresh("Pearland", now));

    // Moved outside the covered set.
    assert!(filter.needs_refresh("Dallas", now));

    // Aged past the refresh window.
    assert!(filter.needs_refresh("Houston", now + Duration::days(31)));

    // Empty artifacts always regenerate.
    let empty = gaz.build_buyer_filter("Unknownville", "ZZ", 30.0);
    assert!(empty.needs_refresh("Unknownville", now));
}

#[test]
fn serializes_in_document_store_shape() {
    let gaz = fixture();
    let filter = gaz.build_buyer_filter("Houston", "TX", 30.0);

    let value = serde_json::to_value(&filter).unwrap();
    assert!(value.get("nearbyCities").is_some());
    assert!(value.get("nearbyCitiesCount").is_some());
    assert!(value.get("radiusMiles").is_some());
    assert!(value.get("lastCityUpdate").is_some());
    assert!(value["boundingBox"].get("minLat").is_some());
    assert!(value["geohashPrefix"].is_string());

    let back: BuyerFilter = serde_json::from_value(value).unwrap();
    assert_eq!(back, filter);
}

#[test]
fn summary_reports_count_and_radius() {
    let gaz = fixture();
    let filter = gaz.build_buyer_filter("Houston", "TX", 30.0);
    let summary = filter.summary();
    assert!(summary.contains("cities within 30 miles"));
}
