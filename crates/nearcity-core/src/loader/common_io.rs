// crates/nearcity-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// carries a `.gz` extension. Returns a generic reader so the caller doesn't
/// care about the transport.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("dataset not found at {}: {e}", path.display()))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

/// Path of the binary cache written next to a source dataset.
pub fn cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}
