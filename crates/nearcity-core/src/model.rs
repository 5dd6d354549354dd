// crates/nearcity-core/src/model.rs
use crate::geo::Coordinates;
use crate::raw::{parse_opt_f64, CitiesRaw};
use crate::text::fold_key;
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

pub use crate::traits::DefaultBackend;

/// The dataset is US-only; rows for other countries are skipped at build time.
const COUNTRY: &str = "US";

/// The in-memory gazetteer. Structure-of-arrays layout:
/// a flat city vector grouped by state, with each state owning a contiguous
/// `Range` into it. Radius search is restricted to the origin's state, so the
/// candidate set is always a single contiguous slice.
///
/// Loaded once, never mutated; concurrent readers need no locking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gazetteer<B: GeoBackend> {
    /// Sorted by state code. Indices match `StateEntry::id`.
    pub states: Vec<StateEntry<B>>,
    /// Grouped by state, sorted by folded city name within each state.
    pub cities: Vec<CityRecord<B>>,
}

/// A state index entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateEntry<B: GeoBackend> {
    pub id: u16,
    /// Two-letter code, uppercase ("TX").
    pub code: B::Str,
    /// Range of this state's cities in the master city vector.
    pub cities_range: Range<u32>,
}

/// An immutable gazetteer city entry. City-centroid precision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityRecord<B: GeoBackend> {
    pub state_id: u16,
    pub name: B::Str,
    pub lat: B::Float,
    pub lng: B::Float,
    pub population: Option<u32>,
}

/// Simple aggregate statistics for the materialized gazetteer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub states: usize,
    pub cities: usize,
}

/// Convenient alias for the default backend.
pub type DefaultGazetteer = Gazetteer<DefaultBackend>;
/// Alias kept for parity with the loader examples.
pub type StandardBackend = DefaultBackend;

impl<B: GeoBackend> Gazetteer<B> {
    /// Build a gazetteer from raw dataset rows.
    ///
    /// Rows outside the US, without a state code, or with missing/unparseable
    /// coordinates are dropped. Within a state, duplicate names (folded
    /// comparison) keep the first row. The result is deterministically
    /// ordered: states by code, cities by folded name.
    pub fn from_records(raw: CitiesRaw) -> Self {
        let mut by_state: BTreeMap<String, Vec<(String, f64, f64, Option<u32>)>> = BTreeMap::new();

        for row in raw {
            if row.name.trim().is_empty() {
                continue;
            }
            if let Some(country) = &row.country {
                if !country.eq_ignore_ascii_case(COUNTRY) {
                    continue;
                }
            }
            let Some(code) = row.admin1.as_deref().map(str::trim).filter(|c| !c.is_empty())
            else {
                continue;
            };
            let (Some(lat), Some(lng)) = (parse_opt_f64(&row.lat), parse_opt_f64(&row.lng))
            else {
                continue;
            };

            by_state.entry(code.to_ascii_uppercase()).or_default().push((
                row.name.trim().to_string(),
                lat,
                lng,
                row.population,
            ));
        }

        let mut gaz = Gazetteer {
            states: Vec::with_capacity(by_state.len()),
            cities: Vec::new(),
        };

        for (code, mut rows) in by_state {
            rows.sort_by(|a, b| fold_key(&a.0).cmp(&fold_key(&b.0)));
            rows.dedup_by(|a, b| fold_key(&a.0) == fold_key(&b.0));

            let state_id = gaz.states.len() as u16;
            let city_start = gaz.cities.len() as u32;

            for (name, lat, lng, population) in rows {
                gaz.cities.push(CityRecord {
                    state_id,
                    name: B::str_from(&name),
                    lat: B::float_from(lat),
                    lng: B::float_from(lng),
                    population,
                });
            }

            gaz.states.push(StateEntry {
                id: state_id,
                code: B::str_from(&code),
                cities_range: city_start..(gaz.cities.len() as u32),
            });
        }

        gaz
    }

    /// Aggregate statistics for the gazetteer.
    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            states: self.states.len(),
            cities: self.cities.len(),
        }
    }

    /// All state index entries, sorted by code.
    pub fn states(&self) -> &[StateEntry<B>] {
        &self.states
    }

    /// The full flat city vector.
    pub fn cities(&self) -> &[CityRecord<B>] {
        &self.cities
    }

    /// Find a state entry by two-letter code, case-insensitive.
    pub fn find_state(&self, code: &str) -> Option<&StateEntry<B>> {
        let code = code.trim();
        self.states
            .iter()
            .find(|s| s.code.as_ref().eq_ignore_ascii_case(code))
    }

    /// The contiguous city slice belonging to a state.
    pub fn cities_for_state<'a>(&'a self, state: &StateEntry<B>) -> &'a [CityRecord<B>] {
        let range = state.cities_range.start as usize..state.cities_range.end as usize;
        &self.cities[range]
    }

    /// Per-state city counts, largest first. Used for monitoring output.
    pub fn state_city_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .states
            .iter()
            .map(|s| (B::str_to_string(&s.code), s.cities_range.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

impl<B: GeoBackend> CityRecord<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn lat(&self) -> f64 {
        B::float_to_f64(self.lat)
    }

    pub fn lng(&self) -> f64 {
        B::float_to_f64(self.lng)
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat(),
            lng: self.lng(),
        }
    }
}

impl<B: GeoBackend> StateEntry<B> {
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }
}

impl<B: GeoBackend> NameMatch for CityRecord<B> {
    fn name_str(&self) -> &str {
        self.name.as_ref()
    }
}
