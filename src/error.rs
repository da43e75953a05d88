//! Error types.

/// Result type alias for parser construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an [`AddressParser`](crate::AddressParser).
///
/// Parsing itself never fails: input that no rule accepts produces
/// [`ParsedLocation::Unmatched`](crate::ParsedLocation::Unmatched).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The country identifier is not one of `"us"` or `"ca"`.
    #[error("Unsupported country: '{0}' (expected \"us\" or \"ca\")")]
    UnsupportedCountry(String),

    /// A grammar rule did not compile.
    #[error("Grammar rule '{rule}' failed to compile: {source}")]
    InvalidRule {
        /// Rule name
        rule: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a new unsupported-country error
    pub fn unsupported_country(id: impl Into<String>) -> Self {
        Self::UnsupportedCountry(id.into())
    }
}
