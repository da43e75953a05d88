//! Canonicalization tables.
//!
//! Every lookup the grammar or the normalization pipeline needs lives here:
//! street types, directionals, secondary-unit designators and
//! state/province names. The grammar builds its alternations *from* these
//! tables (see `rules::slots`), so a word is recognized by the matcher if and
//! only if the pipeline can canonicalize it.
//!
//! Keys are matched case-insensitively. Lookups strip periods and collapse
//! whitespace first, so `"S.E."`, `"se"` and `"SE"` all hit the same entry and
//! multi-word keys (`"north east"`, `"new york"`) work regardless of spacing.
//!
//! A [`Tables`] value is built once per parser and is read-only afterwards.

pub(crate) mod directions;
pub(crate) mod regions;
pub(crate) mod street_types;
pub(crate) mod units;

use crate::api::Country;
use std::collections::HashMap;

/// Case-insensitive `key -> canonical` map.
#[derive(Debug, Clone, Default)]
pub(crate) struct Lookup {
    map: HashMap<String, &'static str>,
}

impl Lookup {
    /// Build a lookup from `(variant, canonical)` pairs. Canonical values are
    /// also registered as keys so abbreviations map onto themselves.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut map = HashMap::with_capacity(entries.len() * 2);
        for &(variant, canonical) in entries {
            map.insert(lookup_key(variant), canonical);
            map.entry(lookup_key(canonical)).or_insert(canonical);
        }
        Lookup { map }
    }

    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.map.get(&lookup_key(token)).copied()
    }

    /// All recognized keys (variants and canonical forms).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

/// Immutable per-country table set handed to the grammar builder and the
/// normalization pipeline.
#[derive(Debug, Clone)]
pub(crate) struct Tables {
    pub country: Country,
    pub street_types: Lookup,
    pub directions: Lookup,
    pub regions: Lookup,
}

impl Tables {
    pub fn for_country(country: Country) -> Self {
        let (types, regions) = match country {
            Country::UnitedStates => (street_types::US, regions::US_STATES),
            Country::Canada => (street_types::CA, regions::CA_PROVINCES),
        };

        Tables {
            country,
            street_types: Lookup::from_entries(types),
            directions: Lookup::from_entries(directions::ENTRIES),
            regions: Lookup::from_entries(regions),
        }
    }

    /// Canonical street-type abbreviation for `token`, capitalized for output
    /// (`"highway"` -> `"Hwy"`).
    pub fn street_type(&self, token: &str) -> Option<String> {
        self.street_types.get(token).map(capitalize)
    }

    /// Canonical directional code (`"Southeast"` -> `"SE"`).
    pub fn direction(&self, token: &str) -> Option<String> {
        self.directions.get(token).map(str::to_uppercase)
    }

    /// Two-letter state/province code for a full name or an existing code.
    pub fn region(&self, token: &str) -> Option<String> {
        self.regions.get(token).map(str::to_uppercase)
    }
}

/// Normalize a token for table lookups: lowercase, drop periods, collapse
/// internal whitespace.
pub(crate) fn lookup_key(token: &str) -> String {
    token.to_lowercase().replace('.', "").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character and lowercase the rest.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Build a `(?:a|b|...)` alternation from table keys.
///
/// Longer keys come first so a key never loses to one of its own prefixes.
/// Multi-word keys accept any run of whitespace between words.
pub(crate) fn alternation<'a>(keys: impl IntoIterator<Item = &'a str>) -> String {
    alternation_by(keys, word_pattern)
}

/// Like [`alternation`], with `to_pattern` turning each key into its regex.
pub(crate) fn alternation_by<'a>(keys: impl IntoIterator<Item = &'a str>, to_pattern: impl Fn(&str) -> String) -> String {
    let mut keys: Vec<&str> = keys.into_iter().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys.dedup();

    let alts: Vec<String> = keys.into_iter().map(to_pattern).collect();
    format!("(?:{})", alts.join("|"))
}

/// Escaped key, any whitespace run between words.
pub(crate) fn word_pattern(key: &str) -> String {
    key.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+")
}
