use crate::Rule;
use crate::error::Result;
use crate::rules::normalize::{self, Stage};
use crate::rules::slots::{CountrySlots, TypeSearch};
use crate::tables::Tables;

/// Digits with an optional hyphenated part (`10-123`), then an optional
/// suffix letter (`123A`) or fraction (`123 1/2`, `123 1/2A`). The suffix is
/// split off by `normalize::split_civic_suffix`.
const NUMBER: &str = r"(?P<number>[0-9]+(?:-[0-9]+)?(?:(?-u:[A-Z])\b|\s+[0-9]+/[0-9]+(?-u:[A-Z])?\b)?)";

/// Fractions belong to the civic number.
const FRACTION: &str = "";

/// `A1A 1A1`, with or without the space. ASCII letters and digits only; rules
/// are case-insensitive, so the letters fold ASCII-only.
const POSTAL_CODE: &str = r"(?P<postal_code>(?-u:[A-Z])[0-9](?-u:[A-Z])\s?[0-9](?-u:[A-Z])[0-9])";

pub(crate) const SLOTS: CountrySlots =
    CountrySlots { number: NUMBER, fraction: FRACTION, postal_code: POSTAL_CODE, type_search: TypeSearch::Leftmost };

pub(crate) const PIPELINE: &[Stage] = &[
    normalize::trim_fields,
    normalize::split_canadian_postal,
    normalize::split_civic_suffix,
    normalize::propagate_plural_type,
    normalize::canonicalize_street_types,
    normalize::canonicalize_directionals,
    normalize::expand_compass_city,
    normalize::canonicalize_region,
];

pub(crate) fn get(tables: &Tables) -> Result<Vec<Rule>> {
    crate::rules::build(tables, SLOTS)
}
