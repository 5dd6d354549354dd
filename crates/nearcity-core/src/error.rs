// crates/nearcity-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the gazetteer loader.
///
/// Lookup misses are *not* errors: the resolver and search APIs return
/// `Option`/empty collections for absent cities, and the filter builder is
/// total. `GeoError` only covers the physical layer (I/O, parsing, caching).
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
