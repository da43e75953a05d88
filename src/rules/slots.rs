//! Named sub-patterns shared by every rule.
//!
//! Table-backed slots (directionals, street types, states, units) are built
//! from `crate::tables`, so the grammar recognizes exactly the words the
//! pipeline can canonicalize. Country-specific slots come in through
//! [`CountrySlots`].

use crate::tables::{self, Tables, directions, units};

/// Which type wins when a street has several type-like words
/// (`Errol place St. John's`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeSearch {
    /// Greedy street name: the rightmost type that still lets the rest of
    /// the rule match.
    Rightmost,
    /// Lazy street name: the leftmost type.
    Leftmost,
}

/// Slots that differ between countries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CountrySlots {
    /// Must capture `number`.
    pub number: &'static str,
    /// Optional fraction between the number and the street, including its
    /// trailing separator. Not captured.
    pub fraction: &'static str,
    /// Must capture `postal_code`.
    pub postal_code: &'static str,
    pub type_search: TypeSearch,
}

/// Every sub-pattern a rule is assembled from.
#[derive(Debug, Clone)]
pub(crate) struct Slots {
    pub direction: String,
    pub street_type: String,
    /// Captures `state`.
    pub state: String,
    /// Captures `city`.
    pub city: &'static str,
    /// Captures `sec_unit_type_N` and `sec_unit_num_N`.
    pub unit: String,
    /// Captures `sec_unit_type`.
    pub postal_box: String,
    pub number: &'static str,
    pub fraction: &'static str,
    pub postal_code: &'static str,
    pub type_search: TypeSearch,
}

impl Slots {
    pub fn new(tables: &Tables, country: CountrySlots) -> Self {
        let numbered = units::alternation(units::NUMBERED);
        let unnumbered = units::alternation(units::UNNUMBERED);

        Slots {
            direction: directions::pattern(&tables.directions),
            street_type: tables::alternation(tables.street_types.keys()),
            state: format!(r"(?P<state>{})\b", tables::alternation(tables.regions.keys())),
            city: r"(?P<city>[^\d,;]+?)",
            unit: format!(
                concat!(
                    r"(?:(?P<sec_unit_type_1>{numbered})(?:(?P<sec_unit_num_1>\d[\w-]*)|\W+(?P<sec_unit_num_2>[\w-]+))",
                    r"|(?P<sec_unit_type_2>#)\W*(?P<sec_unit_num_3>[\w-]+)",
                    r"|(?P<sec_unit_type_3>{unnumbered})\b)",
                ),
                numbered = numbered,
                unnumbered = unnumbered,
            ),
            postal_box: format!(r"(?P<sec_unit_type>{})", units::POSTAL_BOX),
            number: country.number,
            fraction: country.fraction,
            postal_code: country.postal_code,
            type_search: country.type_search,
        }
    }
}
