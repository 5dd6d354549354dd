// crates/nearcity-core/src/search.rs
//
// Coordinate resolution and radius search over the flat gazetteer.

use crate::geo::{haversine_miles, BoundingBox, Coordinates};
use crate::model::{CityRecord, Gazetteer, StateEntry};
use crate::text::{fold_key, normalize_city_name, primary_city_token, CITY_SUFFIXES};
use crate::traits::GeoBackend;
use serde::Serialize;

/// A radius-scan hit. Ephemeral; the persisted artifact keeps names only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyCity {
    pub name: String,
    pub state_code: String,
    pub distance_miles: f64,
    pub lat: f64,
    pub lng: f64,
}

/// Escalation ladder when a radius turns up too few cities (rural origins).
const EXPANSION_STEPS: &[f64] = &[60.0, 120.0, 200.0];

/// Property-side escalation stops earlier; a 200-mile "nearby" list is not
/// useful on a listing.
const PROPERTY_EXPANSION_STEPS: &[f64] = &[60.0, 120.0];

impl<B: GeoBackend> Gazetteer<B> {
    /// Resolve `(city, state)` to coordinates.
    ///
    /// `None` means the city is absent from the gazetteer — an expected,
    /// non-exceptional outcome. Matching is case/accent-insensitive and a
    /// comma-separated region suffix is stripped before lookup.
    pub fn resolve_city(&self, city: &str, state: &str) -> Option<Coordinates> {
        self.find_city(city, state).map(CityRecord::coordinates)
    }

    /// Fuzzy city lookup within a state.
    ///
    /// Stages, cheapest first:
    /// 1. exact folded match
    /// 2. normalized match (Saint/St., Fort/Ft., directionals)
    /// 3. normalized match with a common suffix appended ("Pompano" →
    ///    "Pompano Beach")
    /// 4. normalized match with a common suffix stripped
    /// 5. prefix match in either direction
    pub fn find_city(&self, city: &str, state: &str) -> Option<&CityRecord<B>> {
        let state = self.find_state(state)?;
        let cities = self.cities_for_state(state);

        let primary = primary_city_token(city);
        let q = fold_key(primary);
        if q.is_empty() {
            return None;
        }

        if let Some(hit) = cities.iter().find(|c| fold_key(c.name()) == q) {
            return Some(hit);
        }

        let qn = normalize_city_name(primary);
        if let Some(hit) = cities.iter().find(|c| normalize_city_name(c.name()) == qn) {
            return Some(hit);
        }

        for suffix in CITY_SUFFIXES {
            let candidate = format!("{qn} {suffix}");
            if let Some(hit) = cities
                .iter()
                .find(|c| normalize_city_name(c.name()) == candidate)
            {
                return Some(hit);
            }
        }

        for suffix in CITY_SUFFIXES {
            if let Some(stripped) = qn.strip_suffix(&format!(" {suffix}")) {
                if let Some(hit) = cities
                    .iter()
                    .find(|c| normalize_city_name(c.name()) == stripped)
                {
                    return Some(hit);
                }
            }
        }

        cities.iter().find(|c| {
            let n = normalize_city_name(c.name());
            n.starts_with(&qn) || qn.starts_with(&n)
        })
    }

    /// All same-state gazetteer cities within `radius_miles` of the origin
    /// city, sorted by ascending distance (ties broken by name). The origin
    /// city itself is included at distance zero.
    ///
    /// An unresolvable origin yields an empty vector, never an error.
    pub fn cities_within_radius(
        &self,
        origin_city: &str,
        origin_state: &str,
        radius_miles: f64,
    ) -> Vec<NearbyCity> {
        match self.resolve_city(origin_city, origin_state) {
            Some(origin) => self.cities_within_radius_of(origin, origin_state, radius_miles),
            None => Vec::new(),
        }
    }

    /// Radius scan from explicit coordinates. Entry point for callers that
    /// geocoded the origin elsewhere (the origin city need not be a
    /// gazetteer entry).
    pub fn cities_within_radius_of(
        &self,
        origin: Coordinates,
        state_code: &str,
        radius_miles: f64,
    ) -> Vec<NearbyCity> {
        if radius_miles < 0.0 {
            return Vec::new();
        }
        let Some(state) = self.find_state(state_code) else {
            return Vec::new();
        };

        let bbox = BoundingBox::around(origin, radius_miles);
        let code = state.code().to_string();
        let mut out = Vec::new();

        for city in self.cities_for_state(state) {
            let (lat, lng) = (city.lat(), city.lng());
            // Cheap reject before the trig-heavy exact check.
            if !bbox.contains(lat, lng) {
                continue;
            }
            let distance = haversine_miles(origin.lat, origin.lng, lat, lng);
            if distance <= radius_miles {
                out.push(NearbyCity {
                    name: city.name().to_string(),
                    state_code: code.clone(),
                    distance_miles: distance,
                    lat,
                    lng,
                });
            }
        }

        out.sort_by(|a, b| {
            a.distance_miles
                .total_cmp(&b.distance_miles)
                .then_with(|| a.name.cmp(&b.name))
        });
        out
    }

    /// Radius scan that widens through 60 / 120 / 200 miles until at least
    /// `min_cities` are found. Returns the hits and the radius actually used.
    pub fn cities_within_radius_expanding(
        &self,
        origin_city: &str,
        origin_state: &str,
        initial_radius: f64,
        min_cities: usize,
    ) -> (Vec<NearbyCity>, f64) {
        let mut hits = self.cities_within_radius(origin_city, origin_state, initial_radius);
        let mut radius_used = initial_radius;

        for &step in EXPANSION_STEPS {
            if hits.len() >= min_cities {
                break;
            }
            if step <= radius_used {
                continue;
            }
            hits = self.cities_within_radius(origin_city, origin_state, step);
            radius_used = step;
        }

        (hits, radius_used)
    }

    /// Nearby city names for storage on a property record. Excludes the
    /// property's own city, caps the list, and widens the radius when the
    /// initial scan finds at most the city itself.
    pub fn nearby_city_names_for_property(
        &self,
        property_city: &str,
        property_state: &str,
        radius_miles: f64,
        max_cities: usize,
    ) -> Vec<String> {
        let mut hits = self.cities_within_radius(property_city, property_state, radius_miles);
        let mut current = radius_miles;

        for &step in PROPERTY_EXPANSION_STEPS {
            if hits.len() > 1 || step <= current {
                continue;
            }
            hits = self.cities_within_radius(property_city, property_state, step);
            current = step;
        }

        let own = fold_key(primary_city_token(property_city));
        hits.into_iter()
            .filter(|c| fold_key(&c.name) != own)
            .take(max_cities)
            .map(|c| c.name)
            .collect()
    }

    /// Ranked substring search: exact folded match, then prefix, then
    /// substring. Scoped to a state when a code is given. Queries shorter
    /// than two characters return nothing.
    pub fn search_cities(
        &self,
        query: &str,
        state_code: Option<&str>,
        limit: usize,
    ) -> Vec<(&CityRecord<B>, &StateEntry<B>)> {
        let q = fold_key(query.trim());
        if q.chars().count() < 2 {
            return Vec::new();
        }

        let mut scored: Vec<(u8, &CityRecord<B>, &StateEntry<B>)> = Vec::new();

        for state in self.states() {
            if let Some(code) = state_code {
                if !state.code().eq_ignore_ascii_case(code.trim()) {
                    continue;
                }
            }
            for city in self.cities_for_state(state) {
                let name = fold_key(city.name());
                let score = if name == q {
                    100
                } else if name.starts_with(&q) {
                    80
                } else if name.contains(&q) {
                    60
                } else {
                    0
                };
                if score > 0 {
                    scored.push((score, city, state));
                }
            }
        }

        // Stable sort: within a score band, gazetteer order (state code,
        // folded name) is already deterministic.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, city, state)| (city, state))
            .collect()
    }

    /// Haversine distance between two gazetteer cities, rounded to one
    /// decimal. `None` when either side is missing from the gazetteer —
    /// callers skip those pairs rather than failing.
    pub fn city_distance(
        &self,
        a_city: &str,
        a_state: &str,
        b_city: &str,
        b_state: &str,
    ) -> Option<f64> {
        let a = self.resolve_city(a_city, a_state)?;
        let b = self.resolve_city(b_city, b_state)?;
        let distance = haversine_miles(a.lat, a.lng, b.lat, b.lng);
        Some((distance * 10.0).round() / 10.0)
    }
}
