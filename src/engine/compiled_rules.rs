//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the ordered rule list a
//! parser is built with, plus the metadata used to skip rules cheaply.
//!
//! Parsing is split into two phases:
//!
//! 1. **Compile/index rules** (this module, once per parser): keep the rules
//!    in declaration order and record each rule's bucket requirements.
//! 2. **Run** (see `matcher.rs`, once per input): scan the input for buckets
//!    (`trigger.rs`), select the rules whose requirements are met, then try
//!    them in order.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules` and
//!   `CompiledRules::metas`; the two vectors stay aligned.
//! - `active` yields ids in ascending order, so rule priority is exactly
//!   declaration order.

use crate::Rule;

/// Rule identifier (index into the rules vector).
pub type RuleId = usize;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// At least one ASCII digit.
        const HAS_DIGITS  = 1 << 0;
        /// An `&` or the word `and`.
        const CONJUNCTION = 1 << 1;
        /// Starts with a `p`, the lead letter of every postal-box designator.
        const BOX_LIKE    = 1 << 2;
    }
}

/// Metadata copied out of a rule at compile time.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub buckets: BucketMask,
}

/// Ordered rule set with metadata.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<Rule>,
    pub metas: Vec<RuleMeta>,
}

impl CompiledRules {
    /// Take ownership of an ordered rule list.
    pub fn new(rules: Vec<Rule>) -> Self {
        let metas = rules.iter().map(|r| RuleMeta { buckets: r.buckets }).collect();
        CompiledRules { rules, metas }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Ids of the rules whose bucket requirements are all present in
    /// `buckets`, in declaration order.
    pub fn active(&self, buckets: BucketMask) -> impl Iterator<Item = RuleId> + '_ {
        self.metas.iter().enumerate().filter(move |(_, meta)| buckets.contains(meta.buckets)).map(|(id, _)| id)
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }
}
