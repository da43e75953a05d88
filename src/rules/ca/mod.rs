//! Canada: Canada Post street types, FSA/LDU postal codes, civic-number
//! suffixes, leftmost street type.

pub(crate) mod rules;
