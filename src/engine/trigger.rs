//! Input cleaning and trigger scanning.
//!
//! Before any rule runs, the raw input is cleaned (`clean_input`) and
//! classified into coarse buckets (`TriggerInfo::scan`). Rules declare the
//! buckets they need, and `CompiledRules::active` drops the rest.
//!
//! The scan is a heuristic: a false positive only costs a failed regex
//! attempt, but a false negative would hide a rule that could have matched,
//! so every check errs on the side of setting the bit.

use super::compiled_rules::BucketMask;

/// Input characteristics detected from the cleaned input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if input.contains('&') || regex!(r"(?i)\band\b").is_match(input) {
            buckets |= BucketMask::CONJUNCTION;
        }

        if input.starts_with(['p', 'P']) {
            buckets |= BucketMask::BOX_LIKE;
        }

        TriggerInfo { buckets }
    }
}

/// Strip surrounding punctuation, parentheses and quotes, and collapse runs
/// of whitespace. A leading `#` survives since it is a unit designator.
pub fn clean_input(input: &str) -> String {
    let trimmed = input
        .trim_start_matches(|c: char| !(c.is_alphanumeric() || c == '#'))
        .trim_end_matches(|c: char| !c.is_alphanumeric());

    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
