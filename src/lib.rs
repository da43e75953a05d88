extern crate self as postal_grammar;

use regex::{Regex, RegexBuilder};

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod record;
mod rules;
mod tables;

pub use api::{AddressParser, Country, ParseDetails, RuleAttempt, parse_location};
pub use error::{Error, Result};
pub use record::{Intersection, ParsedLocation, PostalCode, StandardAddress};

use crate::engine::BucketMask;

// --- Internal types ---------------------------------------------------------

/// Compiled automata for the largest rules (full street-type alternation in
/// several slots) exceed the `regex` default size limit.
const RULE_SIZE_LIMIT: usize = 1 << 25;

/// What a rule's captures describe, and therefore which record shape the
/// resolver builds from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RuleFamily {
    /// Two streets joined by `and`/`&`.
    Intersection,
    /// Postal-box designator with a box number, no civic number.
    PostalBox,
    /// Civic number first.
    Civic,
    /// Secondary unit before the civic number.
    UnitFirst,
    /// No civic number at all.
    StreetOnly,
}

impl RuleFamily {
    pub fn is_intersection(self) -> bool {
        matches!(self, RuleFamily::Intersection)
    }
}

/// A grammar rule: one whole-string, case-insensitive regex whose named
/// groups are the raw address fields.
///
/// Group names may carry a `_N` suffix (`sec_unit_num_2`) when the same field
/// appears in more than one alternative; the matcher strips it.
pub(crate) struct Rule {
    pub name: String,
    pub family: RuleFamily,
    pub regex: Regex,
    /// Input buckets that must all be present for this rule to be tried.
    pub buckets: BucketMask,
}

impl Rule {
    /// Compile `pattern`, anchoring it to the whole input.
    pub fn compile(name: impl Into<String>, family: RuleFamily, buckets: BucketMask, pattern: &str) -> Result<Rule> {
        let name = name.into();
        let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(true)
            .size_limit(RULE_SIZE_LIMIT)
            .dfa_size_limit(RULE_SIZE_LIMIT)
            .build()
            .map_err(|source| Error::InvalidRule { rule: name.clone(), source })?;

        Ok(Rule { name, family, regex, buckets })
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("regex", &"<regex>")
            .field("buckets", &self.buckets)
            .finish()
    }
}
