use crate::engine::{self, CompiledRules, Matcher};
use crate::error::{Error, Result};
use crate::record::ParsedLocation;
use crate::rules::{self, Stage};
use crate::tables::Tables;
use log::debug;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

static US_PARSER: Lazy<Result<AddressParser>> = Lazy::new(|| AddressParser::for_country(Country::UnitedStates));
static CA_PARSER: Lazy<Result<AddressParser>> = Lazy::new(|| AddressParser::for_country(Country::Canada));

/// Supported countries.
///
/// Parses from `"us"` / `"ca"`, ignoring ASCII case and surrounding
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Country {
    UnitedStates,
    Canada,
}

impl Country {
    /// Two-letter identifier, `"us"` or `"ca"`.
    pub fn code(self) -> &'static str {
        match self {
            Country::UnitedStates => "us",
            Country::Canada => "ca",
        }
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim();
        if id.eq_ignore_ascii_case("us") {
            Ok(Country::UnitedStates)
        } else if id.eq_ignore_ascii_case("ca") {
            Ok(Country::Canada)
        } else {
            Err(Error::unsupported_country(s))
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One rule tried during a verbose parse.
#[derive(Debug, Clone)]
pub struct RuleAttempt {
    pub rule: String,
    pub matched: bool,
    pub elapsed: Duration,
}

/// Additional details returned by [`AddressParser::parse_location_verbose`].
///
/// Meant for rule debugging and performance inspection; the plain
/// [`AddressParser::parse_location`] path does not collect any of it.
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Input after punctuation trimming and whitespace collapsing; this is
    /// what the rules were matched against.
    pub normalized_input: String,
    /// Names of the rules that survived bucket gating, in try order.
    pub active_rules: Vec<String>,
    /// Every attempted rule, up to and including the winner.
    pub attempts: Vec<RuleAttempt>,
    /// Name of the accepted rule, if any.
    pub winning_rule: Option<String>,
    /// Field captures of the winning rule before normalization.
    pub raw_captures: Vec<(String, String)>,
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent trying rules.
    pub matching: Duration,
    /// Time spent normalizing and assembling the record.
    pub resolve: Duration,
}

/// A configured, immutable address parser for one country.
///
/// Construction compiles the country's whole grammar; parsing afterwards
/// only reads it, so one parser can be shared across threads.
///
/// # Example
/// ```
/// use postal_grammar::AddressParser;
///
/// let parser = AddressParser::new("us").unwrap();
/// let parsed = parser.parse_location("1005 N Gravenstein Highway, Sebastopol, CA");
/// assert_eq!(parsed.fields()["type"], "Hwy");
/// ```
pub struct AddressParser {
    tables: Tables,
    compiled: CompiledRules,
    pipeline: &'static [Stage],
}

impl AddressParser {
    /// Build a parser from a country identifier (`"us"` or `"ca"`).
    pub fn new(country: &str) -> Result<Self> {
        Self::for_country(country.parse()?)
    }

    pub fn for_country(country: Country) -> Result<Self> {
        let tables = Tables::for_country(country);
        let (rules, pipeline) = match country {
            Country::UnitedStates => (rules::us::rules::get(&tables)?, rules::us::rules::PIPELINE),
            Country::Canada => (rules::ca::rules::get(&tables)?, rules::ca::rules::PIPELINE),
        };

        debug!("compiled {} rules for country '{}'", rules.len(), country);

        Ok(AddressParser { tables, compiled: CompiledRules::new(rules), pipeline })
    }

    pub fn country(&self) -> Country {
        self.tables.country
    }

    /// Parse one free-form location string.
    ///
    /// Never fails: input no rule accepts (including empty input) yields
    /// [`ParsedLocation::Unmatched`].
    pub fn parse_location(&self, input: &str) -> ParsedLocation {
        let cleaned = engine::clean_input(input);
        if cleaned.is_empty() {
            return ParsedLocation::Unmatched;
        }

        match Matcher::new(&cleaned, &self.compiled).run() {
            Some(raw) => engine::resolve(&raw, &self.tables, self.pipeline),
            None => ParsedLocation::Unmatched,
        }
    }

    /// Parse `input` and return extra debug details alongside the record.
    pub fn parse_location_verbose(&self, input: &str) -> (ParsedLocation, ParseDetails) {
        let start = Instant::now();
        let cleaned = engine::clean_input(input);
        let matcher = Matcher::new(&cleaned, &self.compiled);
        let active_rules = matcher.active_rule_names().into_iter().map(str::to_string).collect();

        let run = if cleaned.is_empty() { None } else { Some(matcher.run_with_metrics()) };
        let (raw, metrics) = match run {
            Some(run) => (run.raw, run.metrics),
            None => (None, Default::default()),
        };

        let resolve_start = Instant::now();
        let location = match &raw {
            Some(raw) => engine::resolve(raw, &self.tables, self.pipeline),
            None => ParsedLocation::Unmatched,
        };
        let resolve = resolve_start.elapsed();

        let details = ParseDetails {
            active_rules,
            attempts: metrics
                .attempts
                .into_iter()
                .map(|a| RuleAttempt { rule: a.rule, matched: a.matched, elapsed: a.duration })
                .collect(),
            winning_rule: raw.as_ref().map(|raw| raw.rule.name.clone()),
            raw_captures: raw.map(|raw| raw.captures.into_iter().collect()).unwrap_or_default(),
            total: start.elapsed(),
            matching: metrics.matching,
            resolve,
            normalized_input: cleaned,
        };

        (location, details)
    }
}

impl fmt::Debug for AddressParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressParser")
            .field("country", &self.tables.country)
            .field("rules", &self.compiled.len())
            .finish()
    }
}

/// Parse `input` with a shared parser for `country` (`"us"` or `"ca"`).
///
/// The parser for each country is built on first use and reused afterwards.
///
/// # Example
/// ```
/// use postal_grammar::parse_location;
///
/// let parsed = parse_location("ca", "19 Miller Rd. Keswick, ON L4P 1L1").unwrap();
/// assert_eq!(parsed.fields()["fsa"], "L4P");
/// ```
pub fn parse_location(country: &str, input: &str) -> Result<ParsedLocation> {
    let parser = match country.parse::<Country>()? {
        Country::UnitedStates => &*US_PARSER,
        Country::Canada => &*CA_PARSER,
    };
    let parser = parser.as_ref().map_err(Clone::clone)?;
    Ok(parser.parse_location(input))
}
