// crates/nearcity-core/src/geo.rs
//
// Great-circle distance, radius bounding boxes and geohash bucketing.

use serde::{Deserialize, Serialize};

/// Earth radius used by the distance math, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Degrees of latitude per mile is effectively constant; longitude degrees
/// shrink with the cosine of the latitude.
const MILES_PER_DEGREE_LAT: f64 = 69.0;

/// Geohash precision for filter artifacts. A 3-character cell is roughly
/// ±78 km, which covers the 25–30 mile radii buyer filters use. The prefix
/// is a coarse storage bucket key only; it plays no part in accept/reject.
pub const GEOHASH_PRECISION: usize = 3;

/// A decimal lat/lng pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Haversine distance between two lat/lng points, in miles.
///
/// # Examples
///
/// ```rust
/// use nearcity_core::geo::haversine_miles;
///
/// // Houston -> Pearland, TX: roughly 14.5 miles.
/// let d = haversine_miles(29.7604, -95.3698, 29.5636, -95.2860);
/// assert!((d - 14.5).abs() < 0.1);
/// ```
#[inline]
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Axis-aligned lat/lng rectangle used as a cheap pre-filter before the exact
/// distance check, and persisted on filter artifacts for storage-layer range
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// The box covering `center` expanded outward by `radius_miles`.
    ///
    /// Latitude converts directly; longitude degrees are scaled by
    /// `1 / cos(lat)` to account for meridian convergence, otherwise the box
    /// under-covers east-west away from the equator. A negative radius is
    /// clamped to the degenerate point box.
    pub fn around(center: Coordinates, radius_miles: f64) -> Self {
        let radius = radius_miles.max(0.0);
        let lat_delta = radius / MILES_PER_DEGREE_LAT;
        // cos() approaches zero toward the poles; the gazetteer is CONUS so
        // the minimum clamp never fires in practice.
        let lng_scale = center.lat.to_radians().cos().abs().max(1e-6);
        let lng_delta = radius / (MILES_PER_DEGREE_LAT * lng_scale);

        BoundingBox {
            min_lat: center.lat - lat_delta,
            max_lat: center.lat + lat_delta,
            min_lng: center.lng - lng_delta,
            max_lng: center.lng + lng_delta,
        }
    }

    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Geohash of a coordinate at [`GEOHASH_PRECISION`].
///
/// Returns `None` for coordinates the encoder rejects (out of range); filter
/// artifacts carry the prefix as an optional field for exactly that reason.
pub fn origin_geohash(center: Coordinates) -> Option<String> {
    geohash::encode(
        geohash::Coord {
            x: center.lng,
            y: center.lat,
        },
        GEOHASH_PRECISION,
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUSTON: Coordinates = Coordinates {
        lat: 29.7604,
        lng: -95.3698,
    };

    #[test]
    fn houston_to_dallas() {
        let d = haversine_miles(29.7604, -95.3698, 32.7767, -96.7970);
        assert!((d - 224.8).abs() < 1.0, "expected ~224.8 miles, got {d}");
    }

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(haversine_miles(29.7604, -95.3698, 29.7604, -95.3698), 0.0);
    }

    #[test]
    fn bounding_box_spans_center() {
        let bb = BoundingBox::around(HOUSTON, 30.0);
        assert!(bb.min_lat < HOUSTON.lat && HOUSTON.lat < bb.max_lat);
        assert!(bb.min_lng < HOUSTON.lng && HOUSTON.lng < bb.max_lng);
        // Longitude span must exceed latitude span off the equator.
        assert!((bb.max_lng - bb.min_lng) > (bb.max_lat - bb.min_lat));
    }

    #[test]
    fn bounding_box_contains_points_within_radius() {
        let bb = BoundingBox::around(HOUSTON, 30.0);
        // Katy, ~27.3 miles west.
        assert!(bb.contains(29.7858, -95.8245));
        // Dallas, ~225 miles away.
        assert!(!bb.contains(32.7767, -96.7970));
    }

    #[test]
    fn negative_radius_degenerates_to_point() {
        let bb = BoundingBox::around(HOUSTON, -5.0);
        assert_eq!(bb.min_lat, bb.max_lat);
        assert!(bb.contains(HOUSTON.lat, HOUSTON.lng));
    }

    #[test]
    fn geohash_matches_known_cells() {
        assert_eq!(origin_geohash(HOUSTON).as_deref(), Some("9vk"));
        let nyc = Coordinates {
            lat: 40.7128,
            lng: -74.0060,
        };
        assert_eq!(origin_geohash(nyc).as_deref(), Some("dr5"));
    }
}
