// crates/nearcity-core/src/filter.rs
//
// Pre-computed buyer filters.
//
// A buyer's nearby-cities set is computed ONCE at signup and stored with the
// profile, instead of being recomputed on every property-search request. The
// host application persists the artifact and later expands a city-equality
// query into membership over `nearby_cities`.

use crate::geo::{origin_geohash, BoundingBox};
use crate::model::Gazetteer;
use crate::text::{fold_key, primary_city_token};
use crate::traits::GeoBackend;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

/// Artifacts older than this are regenerated on next profile touch; the
/// gazetteer dataset may have been updated underneath them.
pub const MAX_FILTER_AGE_DAYS: i64 = 30;

/// The persisted filter artifact, attached 1:1 to a buyer profile.
///
/// Invariant: `nearby_cities_count == nearby_cities.len()`, always — the
/// builder is the only constructor and downstream code reads the count field
/// without re-checking.
// camelCase on the wire: the host application stores this artifact verbatim
// on buyer/realtor profile documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerFilter {
    /// Nearby city names, ascending by distance from the origin. Includes
    /// the origin city itself.
    pub nearby_cities: Vec<String>,
    pub nearby_cities_count: usize,
    pub radius_miles: f64,
    /// Origin expanded by the radius; a cheap storage-layer pre-filter.
    /// Absent when the origin could not be resolved.
    pub bounding_box: Option<BoundingBox>,
    /// Coarse spatial bucket key for the origin (see
    /// [`crate::geo::GEOHASH_PRECISION`]).
    pub geohash_prefix: Option<String>,
    pub last_city_update: DateTime<Utc>,
}

impl BuyerFilter {
    fn empty(radius_miles: f64) -> Self {
        BuyerFilter {
            nearby_cities: Vec::new(),
            nearby_cities_count: 0,
            radius_miles,
            bounding_box: None,
            geohash_prefix: None,
            last_city_update: Utc::now(),
        }
    }

    /// Whether this artifact should be regenerated for a profile currently
    /// set to `current_city`.
    ///
    /// Regenerate when the list is empty, the city is no longer in the list
    /// (the user moved), or the artifact has aged past
    /// [`MAX_FILTER_AGE_DAYS`].
    pub fn needs_refresh(&self, current_city: &str, now: DateTime<Utc>) -> bool {
        if self.nearby_cities.is_empty() {
            return true;
        }

        let current = fold_key(primary_city_token(current_city));
        if !self.nearby_cities.iter().any(|c| fold_key(c) == current) {
            return true;
        }

        (now - self.last_city_update).num_days() > MAX_FILTER_AGE_DAYS
    }

    /// One-line human-readable stats for monitoring output.
    pub fn summary(&self) -> String {
        let days = (Utc::now() - self.last_city_update).num_days();
        format!(
            "{} cities within {} miles (updated {} days ago)",
            self.nearby_cities_count, self.radius_miles, days
        )
    }
}

impl<B: GeoBackend> Gazetteer<B> {
    /// Build the pre-computed filter for a buyer.
    ///
    /// Total: never fails. An unresolvable origin produces a well-formed
    /// empty artifact (no bounding box, no geohash) — a failed filter must
    /// not block profile creation; the application degrades to an
    /// empty-nearby-cities search instead. Radius zero matches the origin
    /// alone; a negative radius matches nothing.
    pub fn build_buyer_filter(
        &self,
        origin_city: &str,
        origin_state: &str,
        radius_miles: f64,
    ) -> BuyerFilter {
        let started = Instant::now();

        let Some(origin) = self.resolve_city(origin_city, origin_state) else {
            warn!(
                city = origin_city,
                state = origin_state,
                "origin not in gazetteer, emitting empty filter"
            );
            return BuyerFilter::empty(radius_miles);
        };

        let hits = self.cities_within_radius_of(origin, origin_state, radius_miles);
        let nearby_cities: Vec<String> = hits.into_iter().map(|c| c.name).collect();

        debug!(
            city = origin_city,
            state = origin_state,
            radius_miles,
            count = nearby_cities.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated buyer filter"
        );

        BuyerFilter {
            nearby_cities_count: nearby_cities.len(),
            nearby_cities,
            radius_miles,
            bounding_box: Some(BoundingBox::around(origin, radius_miles)),
            geohash_prefix: origin_geohash(origin),
            last_city_update: Utc::now(),
        }
    }
}
