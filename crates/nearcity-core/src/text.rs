// crates/nearcity-core/src/text.rs
//
// Text folding and city-name normalization. Everything here is pure and
// allocation-light; the resolver calls these on every lookup stage.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use nearcity_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("HOUSTON"), "houston");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use nearcity_core::text::equals_folded;
///
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Strip a comma-separated region suffix down to the primary city token.
///
/// Signup forms and scraped listings frequently carry trailing descriptors
/// ("Houston, Harris County", "Austin, TX Metro"); the gazetteer only knows
/// the primary name.
pub fn primary_city_token(s: &str) -> &str {
    match s.split_once(',') {
        Some((head, _)) => head.trim(),
        None => s.trim(),
    }
}

/// Normalize a city name to a canonical form tolerant of common variations:
/// - "Saint" / "St" → "st."
/// - "Fort" / "Ft" → "ft."
/// - "Mount" / "Mt" → "mt."
/// - single-letter directionals ("N Richland Hills" → "north richland hills")
/// - collapsed whitespace
///
/// Both the query and the gazetteer entry are normalized before comparison,
/// so either spelling matches either spelling.
pub fn normalize_city_name(s: &str) -> String {
    let folded = fold_key(s);
    let collapsed = collapse_whitespace(folded.trim());

    for (variants, canonical) in PREFIX_RULES {
        for v in *variants {
            if let Some(rest) = strip_word_prefix(&collapsed, v) {
                return format!("{canonical} {rest}");
            }
        }
    }
    collapsed
}

// Leading-word rewrites applied after folding. First match wins; each
// canonical form is also listed as a variant so normalization is idempotent.
const PREFIX_RULES: &[(&[&str], &str)] = &[
    (&["saint", "st.", "st"], "st."),
    (&["fort", "ft.", "ft"], "ft."),
    (&["mount", "mt.", "mt"], "mt."),
    (&["n"], "north"),
    (&["s"], "south"),
    (&["e"], "east"),
    (&["w"], "west"),
];

/// Common descriptive suffixes the resolver tries adding/removing when an
/// exact lookup misses ("Pompano" vs "Pompano Beach").
pub const CITY_SUFFIXES: &[&str] = &[
    "beach", "city", "park", "heights", "springs", "falls", "lake", "lakes", "hills", "village",
    "township",
];

fn strip_word_prefix<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(word)?;
    // Must be a whole leading word, not "stockton" matching "st".
    rest.strip_prefix(' ').map(str::trim_start)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_accents() {
        assert_eq!(fold_key("São Paulo"), "sao paulo");
        assert!(equals_folded("HOUSTON", "houston"));
    }

    #[test]
    fn strips_comma_suffix() {
        assert_eq!(primary_city_token("Houston, Harris County"), "Houston");
        assert_eq!(primary_city_token("  Austin  "), "Austin");
        assert_eq!(primary_city_token("Plano"), "Plano");
    }

    #[test]
    fn normalizes_saint_and_fort() {
        assert_eq!(normalize_city_name("Saint Petersburg"), "st. petersburg");
        assert_eq!(normalize_city_name("St Petersburg"), "st. petersburg");
        assert_eq!(normalize_city_name("St. Petersburg"), "st. petersburg");
        assert_eq!(normalize_city_name("Fort Worth"), "ft. worth");
        assert_eq!(normalize_city_name("Ft Worth"), "ft. worth");
    }

    #[test]
    fn normalizes_directionals() {
        assert_eq!(
            normalize_city_name("N Richland Hills"),
            "north richland hills"
        );
        assert_eq!(normalize_city_name("W Palm Beach"), "west palm beach");
    }

    #[test]
    fn prefix_rules_need_word_boundary() {
        // "Stockton" must not be rewritten to "st. ockton".
        assert_eq!(normalize_city_name("Stockton"), "stockton");
        assert_eq!(normalize_city_name("Norwalk"), "norwalk");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_city_name("  Sugar   Land "), "sugar land");
    }
}
