// crates/nearcity-core/src/lib.rs

//! # nearcity-core
//!
//! US city gazetteer with radius search and pre-computed buyer filter
//! artifacts.
//!
//! The crate owns two things:
//! - a **coordinate resolver** over an immutable in-memory gazetteer
//!   (`(city, state)` → lat/lng, fuzzy and case-insensitive), and
//! - a **nearby-cities filter builder** that scans the origin's state for
//!   cities within a radius (bounding-box pre-filter + Haversine) and
//!   packages the result as a persistable [`BuyerFilter`] artifact.
//!
//! Persistence, search-query expansion and everything HTTP-shaped belong to
//! the host application.

pub mod error;
pub mod filter;
pub mod geo;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;
// Raw input rows (used by the loader and by tests injecting fixtures).
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GeoError, Result};
pub use crate::filter::{BuyerFilter, MAX_FILTER_AGE_DAYS};
pub use crate::geo::{haversine_miles, BoundingBox, Coordinates};
pub use crate::model::{
    CityRecord, DefaultBackend, DefaultGazetteer, Gazetteer, GazetteerStats, StandardBackend,
    StateEntry,
};
pub use crate::search::NearbyCity;
pub use crate::traits::{GeoBackend, NameMatch};

/// Everything a typical caller needs.
pub mod prelude {
    pub use crate::error::{GeoError, Result};
    pub use crate::filter::BuyerFilter;
    pub use crate::geo::{BoundingBox, Coordinates};
    pub use crate::model::{DefaultGazetteer, Gazetteer, StandardBackend};
    pub use crate::search::NearbyCity;
    pub use crate::traits::{GeoBackend, NameMatch};
}
