//! Engine run metrics.
//!
//! Collected only by `Matcher::run_with_metrics`; the plain `run` path does
//! not time anything.

use super::matcher::RawMatch;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Time spent trying rules, winner included.
    pub matching: Duration,
    /// One entry per attempted rule, in try order.
    pub attempts: Vec<AttemptMetrics>,
}

/// Outcome and timing of a single rule attempt.
#[derive(Debug, Clone)]
pub struct AttemptMetrics {
    pub rule: String,
    pub matched: bool,
    pub duration: Duration,
}

/// Matcher output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult<'a> {
    pub raw: Option<RawMatch<'a>>,
    pub metrics: RunMetrics,
}
