use crate::Rule;
use crate::error::Result;
use crate::rules::normalize::{self, Stage};
use crate::rules::slots::{CountrySlots, TypeSearch};
use crate::tables::Tables;

/// Digits with an optional hyphenated part (`10-12`), or a grid address
/// (`N95W18855`).
const NUMBER: &str = r"(?P<number>[0-9]+-?[0-9]*|(?-u:[NSEW])[0-9]{1,3}(?-u:[NSEW])[0-9]{1,6})";

/// `3813 1/2 Some Road`, `3813 1/2A Some Road`: accepted, not kept.
const FRACTION: &str = r"(?:[0-9]+/[0-9]+(?-u:[A-Z])?\W+)?";

/// ZIP or ZIP+4; the extension may be joined, hyphenated or spaced. ASCII
/// digits only.
const POSTAL_CODE: &str = r"(?P<postal_code>[0-9]{5}(?:[- ]?[0-9]{4})?)";

pub(crate) const SLOTS: CountrySlots =
    CountrySlots { number: NUMBER, fraction: FRACTION, postal_code: POSTAL_CODE, type_search: TypeSearch::Rightmost };

pub(crate) const PIPELINE: &[Stage] = &[
    normalize::trim_fields,
    normalize::split_zip,
    normalize::propagate_plural_type,
    normalize::canonicalize_street_types,
    normalize::canonicalize_directionals,
    normalize::expand_compass_city,
    normalize::canonicalize_region,
];

pub(crate) fn get(tables: &Tables) -> Result<Vec<Rule>> {
    crate::rules::build(tables, SLOTS)
}
