//! Compass directionals.

use super::Lookup;

/// `(variant, canonical code)`; lowercase, period-free.
pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("north", "n"),
    ("south", "s"),
    ("east", "e"),
    ("west", "w"),
    ("northeast", "ne"),
    ("north east", "ne"),
    ("north-east", "ne"),
    ("northwest", "nw"),
    ("north west", "nw"),
    ("north-west", "nw"),
    ("southeast", "se"),
    ("south east", "se"),
    ("south-east", "se"),
    ("southwest", "sw"),
    ("south west", "sw"),
    ("south-west", "sw"),
];

/// Full word for a canonical code, used when a code prefixes a city name:
/// the single-word variant in [`ENTRIES`], capitalized.
pub(crate) fn full_name(code: &str) -> Option<String> {
    let code = code.to_ascii_lowercase();
    ENTRIES
        .iter()
        .find(|(variant, canonical)| *canonical == code && variant.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|(variant, _)| super::capitalize(variant))
}

/// Directional sub-pattern over every key of the directions lookup. Codes may
/// carry a period after each letter (`S.E.`). Longer keys come first so
/// `"North"` never stops at `"N"`.
pub(crate) fn pattern(directions: &Lookup) -> String {
    super::alternation_by(directions.keys(), |key| {
        if key.len() <= 2 {
            key.chars().map(|c| format!(r"{}\.?", regex::escape(&c.to_string()))).collect()
        } else {
            super::word_pattern(key)
        }
    })
}
