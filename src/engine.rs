//! Matching and resolution engine.
//!
//! The engine is split into focused submodules under `src/engine/` and
//! re-exported here, so callers only ever name `crate::engine::*`.
//!
//! ## How the parts work together
//!
//! ```text
//! grammar rules ──┐
//!                 │  CompiledRules::new            (compiled_rules.rs)
//!                 └───────────────┬──────────────
//!                                 │
//! input ── clean_input ───────────┤
//!          TriggerInfo::scan ─────┼─ select active rules (buckets)
//!          (trigger.rs)           │
//!                                 v
//!                       Matcher::run (matcher.rs)
//!                         - try active rules in declared order
//!                         - whole-input match only
//!                         - first accepted match wins
//!                                 │
//!                                 v
//!                       resolve (resolve.rs)
//!                         - raw captures -> Draft
//!                         - country normalization pipeline
//!                         - Draft -> ParsedLocation
//! ```
//!
//! There is no scoring and no backtracking across rules: the grammar's
//! declaration order is the only tie-breaker, which keeps every parse
//! deterministic.
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: owns the ordered rule list plus per-rule metadata
//!   (bucket requirements) and answers "which rules may run for these
//!   buckets", preserving declaration order.
//! - `trigger.rs`: cleans the raw input and classifies it into coarse buckets.
//! - `matcher.rs`: runs rules against the cleaned input and extracts the raw
//!   field map from the winning match.
//! - `resolve.rs`: turns the raw field map into a record.
//! - `metrics.rs`: per-rule timing for verbose parses.
//!
//! ## Adding a bucket
//!
//! Add a `BucketMask` bit, teach `TriggerInfo::scan` to detect it, and tag the
//! rules that need it in `rules/mod.rs`. A bucket must never exclude a rule
//! that could have matched: gating is an optimization, not a semantic filter.
//!
//! ## Debugging
//!
//! Rule attempts are logged at `trace` level and winners at `debug` level
//! through the `log` facade (`RUST_LOG=postal_grammar=trace` with the CLI).

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub use compiled_rules::{BucketMask, CompiledRules};
pub use matcher::{Matcher, RawCaptures};
pub use resolve::resolve;
pub use trigger::clean_input;
