//! Record resolution.
//!
//! The matcher (`matcher.rs`) produces a `RawMatch`: the winning rule and its
//! field captures, exactly as written in the input. Resolution turns that into
//! a user-facing `ParsedLocation`:
//!
//! ```text
//! RawMatch ──▶ Draft::from_captures ──▶ pipeline stages ──▶ ParsedLocation
//!                                        (country-specific)   (by rule family)
//! ```
//!
//! The record shape follows the winning rule's family, never the captured
//! fields, so an intersection never turns into a standard address or the
//! reverse.

use super::matcher::RawMatch;
use crate::record::{Intersection, ParsedLocation, StandardAddress};
use crate::rules::{Draft, Stage};
use crate::tables::Tables;

pub fn resolve(raw: &RawMatch<'_>, tables: &Tables, pipeline: &[Stage]) -> ParsedLocation {
    let mut draft = Draft::from_captures(&raw.captures);
    for stage in pipeline {
        stage(&mut draft, tables);
    }

    if raw.rule.family.is_intersection() { intersection(draft) } else { standard(draft) }
}

fn standard(draft: Draft) -> ParsedLocation {
    ParsedLocation::Standard(StandardAddress {
        number: draft.number,
        number_suffix: draft.number_suffix,
        prefix: draft.prefix,
        street: draft.street,
        street_type: draft.street_type,
        suffix: draft.suffix,
        sec_unit_type: draft.sec_unit_type,
        sec_unit_num: draft.sec_unit_num,
        city: draft.city,
        state: draft.state,
        postal_code: draft.postal,
    })
}

/// Types the grammar searched for but did not find become `""`.
fn intersection(draft: Draft) -> ParsedLocation {
    ParsedLocation::Intersection(Intersection {
        street1: draft.street1.unwrap_or_default(),
        type1: draft.type1.unwrap_or_default(),
        street2: draft.street2.unwrap_or_default(),
        type2: draft.type2.unwrap_or_default(),
        city: draft.city,
        state: draft.state,
    })
}
