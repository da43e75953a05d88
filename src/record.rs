//! Structured address records.
//!
//! A parse yields exactly one [`ParsedLocation`]: a standard civic/postal-box
//! address, a street intersection, or nothing. Field absence is `None`, never
//! an empty string; the one exception is an intersection street type, which
//! is `""` when the grammar looked for a type and found none.

use std::collections::BTreeMap;

/// Outcome of [`AddressParser::parse_location`](crate::AddressParser::parse_location).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsedLocation {
    Standard(StandardAddress),
    Intersection(Intersection),
    /// No rule consumed the whole input.
    Unmatched,
}

/// Civic or postal-box address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardAddress {
    /// Civic number (`"1005"`, `"10-123"`, `"N95W18855"`).
    pub number: Option<String>,
    /// Canadian civic-number suffix split off the number (`"1/2"`, `"A"`).
    pub number_suffix: Option<String>,
    /// Pre-directional code.
    pub prefix: Option<String>,
    pub street: Option<String>,
    /// Canonical street-type abbreviation (`"Hwy"`).
    pub street_type: Option<String>,
    /// Post-directional code.
    pub suffix: Option<String>,
    /// Secondary-unit designator as written (`"Apt"`, `"#"`, `"PO box"`).
    pub sec_unit_type: Option<String>,
    pub sec_unit_num: Option<String>,
    pub city: Option<String>,
    /// Two-letter state or province code.
    pub state: Option<String>,
    pub postal_code: Option<PostalCode>,
}

/// Postal code in its country-specific split form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PostalCode {
    /// US ZIP code with optional ZIP+4 extension.
    Zip { code: String, plus4: Option<String> },
    /// Canadian postal code: forward sortation area and local delivery unit.
    Canadian { fsa: String, ldu: String },
}

/// Two crossing streets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub street1: String,
    /// Canonical type of the first street, `""` when none was found.
    pub type1: String,
    pub street2: String,
    /// Canonical type of the second street, `""` when none was found.
    pub type2: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl ParsedLocation {
    /// `true` for [`ParsedLocation::Unmatched`].
    pub fn is_empty(&self) -> bool {
        matches!(self, ParsedLocation::Unmatched)
    }

    pub fn as_standard(&self) -> Option<&StandardAddress> {
        match self {
            ParsedLocation::Standard(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn as_intersection(&self) -> Option<&Intersection> {
        match self {
            ParsedLocation::Intersection(x) => Some(x),
            _ => None,
        }
    }

    /// Flat, sparse view of the record keyed by field name.
    ///
    /// Keys: `number`, `civic_number_suffix`, `prefix`, `street`, `type`,
    /// `suffix`, `sec_unit_type`, `sec_unit_num`, `city`, `state`, `zip`,
    /// `plus4`, `fsa`, `ldu` for standard addresses and `street1`, `type1`,
    /// `street2`, `type2`, `city`, `state` for intersections. Unmatched input
    /// yields an empty map.
    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        match self {
            ParsedLocation::Standard(addr) => {
                let mut put = |key: &'static str, value: &Option<String>| {
                    if let Some(v) = value {
                        out.insert(key, v.clone());
                    }
                };
                put("number", &addr.number);
                put("civic_number_suffix", &addr.number_suffix);
                put("prefix", &addr.prefix);
                put("street", &addr.street);
                put("type", &addr.street_type);
                put("suffix", &addr.suffix);
                put("sec_unit_type", &addr.sec_unit_type);
                put("sec_unit_num", &addr.sec_unit_num);
                put("city", &addr.city);
                put("state", &addr.state);
                match &addr.postal_code {
                    Some(PostalCode::Zip { code, plus4 }) => {
                        out.insert("zip", code.clone());
                        if let Some(p) = plus4 {
                            out.insert("plus4", p.clone());
                        }
                    }
                    Some(PostalCode::Canadian { fsa, ldu }) => {
                        out.insert("fsa", fsa.clone());
                        out.insert("ldu", ldu.clone());
                    }
                    None => {}
                }
            }
            ParsedLocation::Intersection(x) => {
                out.insert("street1", x.street1.clone());
                out.insert("type1", x.type1.clone());
                out.insert("street2", x.street2.clone());
                out.insert("type2", x.type2.clone());
                if let Some(city) = &x.city {
                    out.insert("city", city.clone());
                }
                if let Some(state) = &x.state {
                    out.insert("state", state.clone());
                }
            }
            ParsedLocation::Unmatched => {}
        }
        out
    }
}

impl std::fmt::Display for ParsedLocation {
    /// `key: value` lines in field order; nothing for unmatched input.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in self.fields() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
