// crates/nearcity-core/src/raw.rs
use serde::Deserialize;

/// Raw city row as it comes from the upstream `cities.json` dataset.
///
/// Coordinates are string-typed in the source data; rows with unparseable or
/// missing coordinates are dropped during normalization, not rejected as
/// errors. NOTE: this type mirrors the external dataset shape and is not part
/// of the public API surface.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRaw {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Two-letter state/province code ("TX", "TN", ...).
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    #[serde(default)]
    pub population: Option<u32>,
}

pub type CitiesRaw = Vec<CityRaw>;

/// Parses an `Option<String>` into an `Option<f64>`.
///
/// - Trims leading and trailing whitespace before parsing.
/// - Returns `None` if the input is `None` or if parsing fails.
pub fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_floats() {
        assert_eq!(parse_opt_f64(&Some(" 29.7604 ".to_string())), Some(29.7604));
        assert_eq!(parse_opt_f64(&Some("N/A".to_string())), None);
        assert_eq!(parse_opt_f64(&None), None);
    }
}
