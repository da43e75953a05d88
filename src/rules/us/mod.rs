//! United States: USPS street types, ZIP and ZIP+4, Wisconsin/Illinois grid
//! civic numbers, dropped civic fractions, rightmost street type.

pub(crate) mod rules;

#[cfg(test)]
mod tests;
