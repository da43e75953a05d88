//! Rule matching.
//!
//! The matcher is the operational core of the engine:
//!
//! - Select the rules whose bucket requirements the input satisfies
//!   (`compiled_rules.rs`, `trigger.rs`).
//! - Try them in declaration order; each rule must consume the whole
//!   cleaned input.
//! - Return the named captures of the first accepted match.
//!
//! ```text
//! rules:  [intersection, postal box, civic.., unit first.., street only..]
//!                          ^ first whole-input match wins; later rules
//!                            are never consulted
//! ```
//!
//! A match is rejected (and the next rule tried) when the `number` capture
//! ends inside a run of digits: a civic number never stops mid-number.

use super::compiled_rules::{CompiledRules, RuleId};
use super::metrics::{AttemptMetrics, RunMetrics, RunResult};
use super::trigger::TriggerInfo;
use crate::Rule;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::time::Instant;

/// Field name (group name without its `_N` suffix) to captured text.
pub type RawCaptures = BTreeMap<String, String>;

/// The winning rule and its captures.
#[derive(Debug, Clone)]
pub struct RawMatch<'a> {
    pub rule: &'a Rule,
    pub captures: RawCaptures,
}

/// Runs one cleaned input against a compiled rule set.
///
/// Usage: `Matcher::new(input, &compiled).run()`.
#[derive(Debug)]
pub struct Matcher<'a> {
    input: &'a str,
    compiled: &'a CompiledRules,
    active: Vec<RuleId>,
}

impl<'a> Matcher<'a> {
    pub fn new(input: &'a str, compiled: &'a CompiledRules) -> Self {
        let trigger = TriggerInfo::scan(input);
        let active: Vec<RuleId> = compiled.active(trigger.buckets).collect();

        trace!("buckets={:?} active_rules={}/{}", trigger.buckets, active.len(), compiled.len());

        Matcher { input, compiled, active }
    }

    /// Names of the rules that survived bucket gating, in try order.
    pub fn active_rule_names(&self) -> Vec<&'a str> {
        self.active.iter().map(|&id| self.compiled.rule(id).name.as_str()).collect()
    }

    /// First accepted match, or `None` when no rule consumes the input.
    pub fn run(&self) -> Option<RawMatch<'a>> {
        self.active.iter().find_map(|&id| {
            let rule = self.compiled.rule(id);
            let captures = try_rule(self.input, rule);
            trace!("rule '{}' matched={}", rule.name, captures.is_some());
            captures.map(|captures| self.accept(rule, captures))
        })
    }

    /// Like [`Matcher::run`], also timing every attempted rule.
    pub fn run_with_metrics(&self) -> RunResult<'a> {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut raw = None;

        for &id in &self.active {
            let rule = self.compiled.rule(id);
            let attempt_start = Instant::now();
            let captures = try_rule(self.input, rule);
            let matched = captures.is_some();

            trace!("rule '{}' matched={}", rule.name, matched);
            metrics.attempts.push(AttemptMetrics {
                rule: rule.name.clone(),
                matched,
                duration: attempt_start.elapsed(),
            });

            if let Some(captures) = captures {
                raw = Some(self.accept(rule, captures));
                break;
            }
        }

        metrics.matching = start.elapsed();
        RunResult { raw, metrics }
    }

    fn accept(&self, rule: &'a Rule, captures: RawCaptures) -> RawMatch<'a> {
        debug!("'{}' matched by rule '{}': {:?}", self.input, rule.name, captures);
        RawMatch { rule, captures }
    }
}

/// Match `rule` against the whole input and collect its non-empty captures.
///
/// When a field has several numbered groups, the first non-empty one wins.
fn try_rule(input: &str, rule: &Rule) -> Option<RawCaptures> {
    let caps = rule.regex.captures(input)?;

    if let Some(number) = caps.name("number") {
        if input[number.end()..].starts_with(|c: char| c.is_ascii_digit()) {
            trace!("rule '{}' rejected: number '{}' splits a digit run", rule.name, number.as_str());
            return None;
        }
    }

    let mut fields = RawCaptures::new();
    for group in rule.regex.capture_names().flatten() {
        let Some(m) = caps.name(group) else { continue };
        if m.as_str().is_empty() {
            continue;
        }
        fields.entry(field_name(group).to_string()).or_insert_with(|| m.as_str().to_string());
    }

    Some(fields)
}

/// `sec_unit_num_2` -> `sec_unit_num`; names without a numeric suffix are
/// returned unchanged.
fn field_name(group: &str) -> &str {
    match group.rsplit_once('_') {
        Some((base, n)) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => base,
        _ => group,
    }
}
