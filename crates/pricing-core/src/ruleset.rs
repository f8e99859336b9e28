//! Rule set construction
//!
//! A `RuleSet` is built exactly once per process and shared by every
//! evaluation. It exposes no mutation: the rules live behind an `Arc<[_]>`,
//! so clones are cheap handles onto the same immutable slice and concurrent
//! readers need no lock.

use crate::error::{CoreError, Result};
use crate::rule::PricingRule;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Number of rules generated when no count is configured
pub const DEFAULT_RULES_COUNT: i64 = 10_000;

/// Seed used for rule generation when none is configured
pub const DEFAULT_RULES_SEED: u64 = 42;

/// Immutable, ordered collection of pricing rules
///
/// Rules are stored in strictly ascending `rule_id` order, which is also the
/// scan order used during evaluation.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Arc<[PricingRule]>,
}

impl RuleSet {
    /// Generate `count` synthetic rules from a seeded generator.
    ///
    /// The same `(count, seed)` pair always yields identical rules within a
    /// build of this crate. Rule `i` draws, in order: `low` in `[1, 500]`,
    /// `high` in `[501, 1000]`, `cart_min` in `[0, 200)`, `discount_pct` in
    /// `[0, 0.30)` and `priority` in `[1, 100]`.
    ///
    /// A negative `count`, or one too large to allocate, is a startup
    /// misconfiguration and is rejected.
    pub fn generate(count: i64, seed: u64) -> Result<Self> {
        let count = usize::try_from(count).map_err(|_| {
            CoreError::InvalidConfiguration(format!("rules_count must be >= 0, got {}", count))
        })?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut rules: Vec<PricingRule> = Vec::new();
        rules.try_reserve_exact(count).map_err(|e| {
            CoreError::InvalidConfiguration(format!(
                "rules_count {} cannot be allocated: {}",
                count, e
            ))
        })?;

        for i in 0..count {
            let low = rng.gen_range(1..=500);
            let high = rng.gen_range(501..=1000);
            rules.push(PricingRule {
                rule_id: i as u64,
                variant_range: (low, high),
                cart_min: rng.gen_range(0.0..200.0),
                discount_pct: rng.gen_range(0.0..0.30),
                priority: rng.gen_range(1..=100),
            });
        }

        tracing::debug!("Generated {} pricing rules with seed {}", count, seed);

        Ok(Self {
            rules: rules.into(),
        })
    }

    /// Build a rule set from hand-specified rules.
    ///
    /// Every rule must pass [`PricingRule::validate`] and ids must be strictly
    /// ascending, so that scan order and tie-breaking by lowest id agree.
    pub fn from_rules(rules: Vec<PricingRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }

        for pair in rules.windows(2) {
            if pair[1].rule_id <= pair[0].rule_id {
                return Err(CoreError::InvalidRule {
                    rule_id: pair[1].rule_id,
                    reason: format!(
                        "rule ids must be strictly ascending, {} follows {}",
                        pair[1].rule_id, pair[0].rule_id
                    ),
                });
            }
        }

        Ok(Self {
            rules: rules.into(),
        })
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in scan order
    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    /// Iterate rules in scan order
    pub fn iter(&self) -> std::slice::Iter<'_, PricingRule> {
        self.rules.iter()
    }

    /// Look up a rule by id
    pub fn get(&self, rule_id: u64) -> Option<&PricingRule> {
        self.rules
            .binary_search_by_key(&rule_id, |rule| rule.rule_id)
            .ok()
            .map(|index| &self.rules[index])
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a PricingRule;
    type IntoIter = std::slice::Iter<'a, PricingRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
