//! Normalization pipeline.
//!
//! A matched rule's raw captures are loaded into a [`Draft`] and passed
//! through the country's ordered list of [`Stage`]s. Every stage is total: it
//! no-ops when the fields it reads are absent, and it never fails. Unknown
//! tokens are kept as written.

use crate::engine::RawCaptures;
use crate::record::PostalCode;
use crate::tables::{Tables, directions};

/// A pipeline step.
pub(crate) type Stage = fn(&mut Draft, &Tables);

/// Mutable field set between matching and record assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Draft {
    pub number: Option<String>,
    pub number_suffix: Option<String>,
    pub prefix: Option<String>,
    pub street: Option<String>,
    pub street_type: Option<String>,
    pub suffix: Option<String>,
    pub sec_unit_type: Option<String>,
    pub sec_unit_num: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Postal code as captured; consumed by the split stages.
    pub postal_code: Option<String>,
    pub postal: Option<PostalCode>,
    pub street1: Option<String>,
    pub type1: Option<String>,
    pub street2: Option<String>,
    pub type2: Option<String>,
}

impl Draft {
    pub fn from_captures(captures: &RawCaptures) -> Self {
        let get = |key: &str| captures.get(key).cloned();
        Draft {
            number: get("number"),
            prefix: get("prefix"),
            street: get("street"),
            street_type: get("street_type"),
            suffix: get("suffix"),
            sec_unit_type: get("sec_unit_type"),
            sec_unit_num: get("sec_unit_num"),
            city: get("city"),
            state: get("state"),
            postal_code: get("postal_code"),
            street1: get("street1"),
            type1: get("type1"),
            street2: get("street2"),
            type2: get("type2"),
            ..Default::default()
        }
    }

    /// Every field except the city, which keeps its inner punctuation.
    fn plain_fields_mut(&mut self) -> [&mut Option<String>; 14] {
        [
            &mut self.number,
            &mut self.number_suffix,
            &mut self.prefix,
            &mut self.street,
            &mut self.street_type,
            &mut self.suffix,
            &mut self.sec_unit_type,
            &mut self.sec_unit_num,
            &mut self.state,
            &mut self.postal_code,
            &mut self.street1,
            &mut self.type1,
            &mut self.street2,
            &mut self.type2,
        ]
    }
}

// --- Stages ------------------------------------------------------------------

/// Drop stray punctuation and collapse whitespace; empty fields become absent.
///
/// Inside fields only `- # & / '` survive (`10-123`, `#`, `1/2`, `O'Brien`).
/// City names only lose leading and trailing punctuation (`St. John's`).
pub(crate) fn trim_fields(draft: &mut Draft, _tables: &Tables) {
    for field in draft.plain_fields_mut() {
        let cleaned = field.as_deref().map(|v| {
            let kept: String =
                v.chars().filter(|c| c.is_alphanumeric() || c.is_whitespace() || "-#&/'".contains(*c)).collect();
            collapse_whitespace(&kept)
        });
        *field = cleaned.filter(|v| !v.is_empty());
    }

    draft.city = draft
        .city
        .as_deref()
        .map(|v| collapse_whitespace(v.trim_matches(|c: char| !c.is_alphanumeric())))
        .filter(|v| !v.is_empty());
}

/// `60606-6306`, `606066306` and `60606 6306` all become `60606` + `6306`.
pub(crate) fn split_zip(draft: &mut Draft, _tables: &Tables) {
    let Some(raw) = draft.postal_code.take() else { return };
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    draft.postal = match digits.len() {
        9 => Some(PostalCode::Zip { code: digits[..5].to_string(), plus4: Some(digits[5..].to_string()) }),
        _ => Some(PostalCode::Zip { code: digits, plus4: None }),
    };
}

/// `k1b 1l8` becomes FSA `K1B` + LDU `1L8`.
pub(crate) fn split_canadian_postal(draft: &mut Draft, _tables: &Tables) {
    let Some(raw) = draft.postal_code.take() else { return };
    let chars: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase).collect();

    if chars.len() == 6 {
        draft.postal = Some(PostalCode::Canadian {
            fsa: chars[..3].iter().collect(),
            ldu: chars[3..].iter().collect(),
        });
    } else {
        draft.postal_code = Some(raw);
    }
}

/// Split a trailing fraction (`10-123 1/2`, `10-123 1/2A`) or letter
/// (`10-123A`) off the civic number. Suffix letters are uppercased.
pub(crate) fn split_civic_suffix(draft: &mut Draft, _tables: &Tables) {
    let Some(number) = draft.number.as_deref() else { return };
    let Some(caps) =
        regex!(r"^(?P<civic>[0-9]+(?:-[0-9]+)?)(?:\s+(?P<fraction>[0-9]+/[0-9]+[A-Za-z]?)|(?P<letter>[A-Za-z]))$")
            .captures(number)
    else {
        return;
    };

    let suffix = caps.name("fraction").or_else(|| caps.name("letter")).map(|m| m.as_str().to_ascii_uppercase());
    let civic = caps["civic"].to_string();
    draft.number = Some(civic);
    draft.number_suffix = suffix;
}

/// Replace directional words and abbreviations with their code (`S.E.`,
/// `southeast` -> `SE`).
pub(crate) fn canonicalize_directionals(draft: &mut Draft, tables: &Tables) {
    for field in [&mut draft.prefix, &mut draft.suffix] {
        if let Some(canonical) = field.as_deref().and_then(|v| tables.direction(v)) {
            *field = Some(canonical);
        }
    }
}

/// Replace street types with their abbreviation. An unrecognized type is
/// folded back into the street name.
pub(crate) fn canonicalize_street_types(draft: &mut Draft, tables: &Tables) {
    if let Some(raw) = draft.street_type.take() {
        match tables.street_type(&raw) {
            Some(canonical) => draft.street_type = Some(canonical),
            None => {
                draft.street = Some(match draft.street.take() {
                    Some(street) => format!("{street} {raw}"),
                    None => raw,
                });
            }
        }
    }

    for field in [&mut draft.type1, &mut draft.type2] {
        if let Some(canonical) = field.as_deref().and_then(|v| tables.street_type(v)) {
            *field = Some(canonical);
        }
    }
}

/// A leading directional code in the city name is spelled out (`N Sebastopol`
/// -> `North Sebastopol`).
pub(crate) fn expand_compass_city(draft: &mut Draft, tables: &Tables) {
    let Some(city) = draft.city.as_deref() else { return };
    let Some((first, rest)) = city.split_once(' ') else { return };

    let expanded = tables.direction(first).as_deref().and_then(directions::full_name);
    if let Some(word) = expanded {
        draft.city = Some(format!("{word} {rest}"));
    }
}

/// `Mission and Valencia Sts`: with no type on the first street, a plural
/// type on the second applies, singular, to both.
pub(crate) fn propagate_plural_type(draft: &mut Draft, tables: &Tables) {
    if draft.type1.is_some() {
        return;
    }
    let Some(type2) = draft.type2.as_deref() else { return };
    let Some(singular) = type2.strip_suffix(['s', 'S']) else { return };

    if tables.street_type(singular).is_some() {
        let singular = singular.to_string();
        draft.type1 = Some(singular.clone());
        draft.type2 = Some(singular);
    }
}

/// Full state and province names become their code; codes are uppercased.
pub(crate) fn canonicalize_region(draft: &mut Draft, tables: &Tables) {
    if let Some(state) = draft.state.as_deref() {
        draft.state = Some(tables.region(state).unwrap_or_else(|| state.to_uppercase()));
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Country;
    use assert_matches::assert_matches;

    fn us() -> Tables {
        Tables::for_country(Country::UnitedStates)
    }

    fn ca() -> Tables {
        Tables::for_country(Country::Canada)
    }

    #[test]
    fn trim_keeps_meaningful_punctuation() {
        let mut d = Draft {
            number: Some("10-123 1/2".into()),
            sec_unit_type: Some("P.O.  box".into()),
            prefix: Some("S.E.".into()),
            city: Some(" St. John's, ".into()),
            street: Some(" , ".into()),
            ..Default::default()
        };
        trim_fields(&mut d, &us());

        assert_eq!(d.number.as_deref(), Some("10-123 1/2"));
        assert_eq!(d.sec_unit_type.as_deref(), Some("PO box"));
        assert_eq!(d.prefix.as_deref(), Some("SE"));
        assert_eq!(d.city.as_deref(), Some("St. John's"));
        assert_eq!(d.street, None);
    }

    #[test]
    fn zip_separators_are_equivalent() {
        for raw in ["60606-6306", "606066306", "60606 6306"] {
            let mut d = Draft { postal_code: Some(raw.into()), ..Default::default() };
            split_zip(&mut d, &us());
            assert_eq!(
                d.postal,
                Some(PostalCode::Zip { code: "60606".into(), plus4: Some("6306".into()) }),
                "{raw} did not split"
            );
            assert_eq!(d.postal_code, None);
        }

        let mut d = Draft { postal_code: Some("95472".into()), ..Default::default() };
        split_zip(&mut d, &us());
        assert_matches!(d.postal, Some(PostalCode::Zip { ref code, plus4: None }) if code == "95472");
    }

    #[test]
    fn canadian_postal_code_splits_and_uppercases() {
        let mut d = Draft { postal_code: Some("h3z 2y7".into()), ..Default::default() };
        split_canadian_postal(&mut d, &ca());
        assert_eq!(d.postal, Some(PostalCode::Canadian { fsa: "H3Z".into(), ldu: "2Y7".into() }));
    }

    #[test]
    fn civic_suffix_fraction_and_letter() {
        let mut d = Draft { number: Some("10-123 1/2".into()), ..Default::default() };
        split_civic_suffix(&mut d, &ca());
        assert_eq!(d.number.as_deref(), Some("10-123"));
        assert_eq!(d.number_suffix.as_deref(), Some("1/2"));

        let mut d = Draft { number: Some("10-123A".into()), ..Default::default() };
        split_civic_suffix(&mut d, &ca());
        assert_eq!(d.number.as_deref(), Some("10-123"));
        assert_eq!(d.number_suffix.as_deref(), Some("A"));

        let mut d = Draft { number: Some("123a".into()), ..Default::default() };
        split_civic_suffix(&mut d, &ca());
        assert_eq!(d.number.as_deref(), Some("123"));
        assert_eq!(d.number_suffix.as_deref(), Some("A"));

        let mut d = Draft { number: Some("10-123 1/2a".into()), ..Default::default() };
        split_civic_suffix(&mut d, &ca());
        assert_eq!(d.number.as_deref(), Some("10-123"));
        assert_eq!(d.number_suffix.as_deref(), Some("1/2A"));

        let mut d = Draft { number: Some("14205".into()), ..Default::default() };
        split_civic_suffix(&mut d, &ca());
        assert_eq!(d.number.as_deref(), Some("14205"));
        assert_eq!(d.number_suffix, None);
    }

    #[test]
    fn unknown_street_type_folds_into_street() {
        let mut d = Draft { street: Some("Old".into()), street_type: Some("Broadway".into()), ..Default::default() };
        canonicalize_street_types(&mut d, &us());
        assert_eq!(d.street.as_deref(), Some("Old Broadway"));
        assert_eq!(d.street_type, None);
    }

    #[test]
    fn compass_city_expansion() {
        let cases = [
            ("N Sebastopol", "North Sebastopol"),
            ("e San Jose", "East San Jose"),
            ("NW Edmonton", "Northwest Edmonton"),
            ("North Sebastopol", "North Sebastopol"),
            ("Sebastopol", "Sebastopol"),
            ("Eaton", "Eaton"),
            ("West", "West"),
        ];
        for (input, expected) in cases {
            let mut d = Draft { city: Some(input.into()), ..Default::default() };
            expand_compass_city(&mut d, &us());
            assert_eq!(d.city.as_deref(), Some(expected), "{input} was not expanded correctly");
        }
    }

    #[test]
    fn plural_type_propagates_only_without_first_type() {
        let mut d = Draft { type2: Some("Streets".into()), ..Default::default() };
        propagate_plural_type(&mut d, &us());
        canonicalize_street_types(&mut d, &us());
        assert_eq!((d.type1.as_deref(), d.type2.as_deref()), (Some("St"), Some("St")));

        let mut d = Draft { type1: Some("Ave".into()), type2: Some("Sts".into()), ..Default::default() };
        propagate_plural_type(&mut d, &us());
        assert_eq!((d.type1.as_deref(), d.type2.as_deref()), (Some("Ave"), Some("Sts")));
    }

    #[test]
    fn region_names_become_codes() {
        let mut d = Draft { state: Some("New Mexico".into()), ..Default::default() };
        canonicalize_region(&mut d, &us());
        assert_eq!(d.state.as_deref(), Some("NM"));

        let mut d = Draft { state: Some("qc".into()), ..Default::default() };
        canonicalize_region(&mut d, &ca());
        assert_eq!(d.state.as_deref(), Some("QC"));
    }
}
