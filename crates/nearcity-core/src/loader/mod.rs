// crates/nearcity-core/src/loader/mod.rs

//! # Gazetteer Loader
//!
//! Handles the physical layer (I/O, decompression, binary caching) and
//! delegates row parsing to the raw model. The source of truth is a JSON
//! dataset in the upstream `cities.json` row shape; a bincode snapshot is
//! written next to it on first load and wins on subsequent loads while
//! fresh.

use crate::error::{GeoError, Result};
use crate::model::{DefaultBackend, Gazetteer};
use bincode::Options;
use once_cell::sync::OnceCell;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

mod common_io;

/// Suffix of the binary cache written next to the source JSON.
pub const CACHE_SUFFIX: &str = "flat.bin";

/// Deserialization ceiling for cached snapshots.
const MAX_CACHE_BYTES: u64 = 256 * 1024 * 1024;

static GAZETTEER_CACHE: OnceCell<Gazetteer<DefaultBackend>> = OnceCell::new();

fn bincode_options() -> impl Options {
    // One config for both read and write; mixing configs silently corrupts
    // round-trips.
    bincode::DefaultOptions::new()
        .with_limit(MAX_CACHE_BYTES)
        .allow_trailing_bytes()
}

impl Gazetteer<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "us_cities.json"
    }

    /// Process-wide load of the bundled dataset. The first call pays the
    /// parse; later calls clone the cached value. The cached gazetteer is
    /// read-only after initialization.
    pub fn load() -> Result<Self> {
        GAZETTEER_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                Self::load_from_path(dir.join(Self::default_dataset_filename()))
            })
            .cloned()
    }

    /// **Smart load:** a fresh binary cache wins; otherwise build from the
    /// JSON source and write the cache for next time (best effort — a
    /// read-only data dir is not an error).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // A .bin path IS the snapshot; nothing to build or cache.
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bin")) {
            return Self::load_binary_file(path);
        }

        let cache = common_io::cache_path(path, CACHE_SUFFIX);

        if Self::is_cache_fresh(path, &cache) {
            if let Ok(gaz) = Self::load_binary_file(&cache) {
                debug!(cache = %cache.display(), "loaded gazetteer from binary cache");
                return Ok(gaz);
            }
        }

        let gaz = Self::build_from_source(path)?;
        gaz.save_as(&cache).ok();
        Ok(gaz)
    }

    /// Parse the JSON source directly, skipping the cache entirely.
    #[cfg(feature = "json")]
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        Self::build_from_source(path.as_ref())
    }

    /// Write a binary snapshot of this gazetteer.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        bincode_options().serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    #[cfg(feature = "json")]
    fn build_from_source(path: &Path) -> Result<Self> {
        let reader = common_io::open_stream(path)?;
        let raw: crate::raw::CitiesRaw = serde_json::from_reader(reader)?;
        let gaz = Self::from_records(raw);
        if gaz.cities.is_empty() {
            return Err(GeoError::InvalidData(format!(
                "no usable city rows in {}",
                path.display()
            )));
        }
        debug!(
            source = %path.display(),
            states = gaz.states.len(),
            cities = gaz.cities.len(),
            "built gazetteer from source"
        );
        Ok(gaz)
    }

    #[cfg(not(feature = "json"))]
    fn build_from_source(path: &Path) -> Result<Self> {
        Err(GeoError::InvalidData(format!(
            "cannot parse {}: the `json` feature is disabled and no binary cache exists",
            path.display()
        )))
    }

    fn load_binary_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| GeoError::NotFound(format!("cache not found at {}: {e}", path.display())))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(bincode_options().deserialize(&data)?)
    }

    fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
        let cache_mtime = match fs::metadata(cache).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        match fs::metadata(source).and_then(|m| m.modified()) {
            Ok(source_mtime) => source_mtime <= cache_mtime,
            // Cache-only deployment: no source file to compare against.
            Err(_) => true,
        }
    }
}
