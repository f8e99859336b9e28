//! Rule evaluation
//!
//! Evaluation always scans the whole rule set. Every matching rule is kept in
//! the result snapshot; the winner is the match with the highest priority,
//! and among equal priorities the one seen first (lowest `rule_id`).

use crate::delay::{FetchDelay, SleepDelay};
use crate::error::{Result, RuntimeError};
use crate::result::{PricingResult, RuleMatch};
use pricing_core::{PricingRule, RuleSet};
use std::sync::Arc;

/// Evaluates pricing queries against an immutable rule set
#[derive(Clone)]
pub struct RuleEvaluator {
    rules: RuleSet,
    delay: Arc<dyn FetchDelay>,
}

impl RuleEvaluator {
    /// Create an evaluator that waits the default upstream fetch delay
    pub fn new(rules: RuleSet) -> Self {
        Self::with_delay(rules, Arc::new(SleepDelay::default()))
    }

    /// Create an evaluator with an explicit fetch delay strategy
    pub fn with_delay(rules: RuleSet, delay: Arc<dyn FetchDelay>) -> Self {
        Self { rules, delay }
    }

    /// Rule set scanned by this evaluator
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate a pricing query.
    ///
    /// Arguments are validated first. The upstream fetch delay is then
    /// awaited on every call, followed by a full scan of the rule set. The
    /// future has no cancellation hook of its own; callers that need a
    /// deadline wrap it in `tokio::time::timeout`.
    pub async fn evaluate(
        &self,
        item_id: i64,
        base_price: f64,
        cart_total: f64,
    ) -> Result<PricingResult> {
        validate_query(item_id, base_price, cart_total)?;

        self.delay.wait().await;

        let result = self.resolve(item_id, base_price, cart_total);

        tracing::debug!(
            "Evaluated item {}: rule_matched={}, matches={}, rules_evaluated={}",
            item_id,
            result.rule_matched,
            result.rule_snapshot.len(),
            result.rules_evaluated
        );

        Ok(result)
    }

    /// Scan the rule set and resolve the winner, without the fetch delay or
    /// argument validation.
    pub fn resolve(&self, item_id: i64, base_price: f64, cart_total: f64) -> PricingResult {
        let mut matched: Vec<PricingRule> = Vec::new();
        let mut winner: Option<&PricingRule> = None;

        for rule in &self.rules {
            if !rule.matches(item_id, cart_total) {
                continue;
            }
            matched.push(rule.clone());

            // Strict comparison keeps the earliest rule on equal priority
            if winner.map_or(true, |best| rule.priority > best.priority) {
                winner = Some(rule);
            }
        }

        let (discount_pct, final_price, rule_matched) = match winner {
            Some(rule) => (
                rule.discount_pct,
                base_price * (1.0 - rule.discount_pct),
                RuleMatch::Rule(rule.rule_id),
            ),
            None => (0.0, base_price, RuleMatch::NoMatch),
        };

        PricingResult {
            item_id,
            base_price,
            final_price,
            discount_pct,
            rule_matched,
            rules_evaluated: self.rules.len(),
            rule_snapshot: matched,
        }
    }
}

impl std::fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEvaluator")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

fn validate_query(item_id: i64, base_price: f64, cart_total: f64) -> Result<()> {
    if item_id < 0 {
        tracing::warn!("Rejected pricing query with negative item_id {}", item_id);
        return Err(RuntimeError::invalid_argument("item_id", item_id));
    }
    check_amount("base_price", base_price)?;
    check_amount("cart_total", cart_total)
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    // Rejects NaN as well as negatives and infinities
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        tracing::warn!("Rejected pricing query with {} {}", field, value);
        Err(RuntimeError::invalid_argument(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;

    fn fixture() -> RuleSet {
        RuleSet::from_rules(vec![
            PricingRule::new(0, (1, 100), 0.0, 0.10, 5),
            PricingRule::new(1, (50, 150), 20.0, 0.20, 5),
            PricingRule::new(2, (1, 1000), 0.0, 0.05, 10),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_collects_matches_in_scan_order() {
        let evaluator = RuleEvaluator::with_delay(fixture(), Arc::new(NoDelay));
        let result = evaluator.resolve(75, 100.0, 25.0);

        let ids: Vec<u64> = result.rule_snapshot.iter().map(|r| r.rule_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(result.rule_matched, RuleMatch::Rule(2));
    }

    #[test]
    fn test_resolve_tie_prefers_lowest_id() {
        let rules = RuleSet::from_rules(vec![
            PricingRule::new(3, (1, 10), 0.0, 0.01, 50),
            PricingRule::new(8, (1, 10), 0.0, 0.02, 50),
            PricingRule::new(9, (1, 10), 0.0, 0.03, 49),
        ])
        .unwrap();
        let evaluator = RuleEvaluator::with_delay(rules, Arc::new(NoDelay));

        let result = evaluator.resolve(5, 10.0, 0.0);
        assert_eq!(result.rule_matched, RuleMatch::Rule(3));
        assert_eq!(result.discount_pct, 0.01);
    }

    #[test]
    fn test_resolve_empty_rule_set() {
        let evaluator =
            RuleEvaluator::with_delay(RuleSet::from_rules(Vec::new()).unwrap(), Arc::new(NoDelay));
        let result = evaluator.resolve(1, 10.0, 10.0);

        assert_eq!(result.rule_matched, RuleMatch::NoMatch);
        assert_eq!(result.rules_evaluated, 0);
        assert_eq!(result.final_price, 10.0);
    }

    #[tokio::test]
    async fn test_evaluate_rejects_negative_item_id() {
        let evaluator = RuleEvaluator::with_delay(fixture(), Arc::new(NoDelay));
        let err = evaluator.evaluate(-1, 10.0, 0.0).await.unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::InvalidArgument { field: "item_id", .. }
        ));
    }

    #[tokio::test]
    async fn test_evaluate_rejects_negative_amounts() {
        let evaluator = RuleEvaluator::with_delay(fixture(), Arc::new(NoDelay));

        let err = evaluator.evaluate(1, -0.01, 0.0).await.unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::InvalidArgument { field: "base_price", .. }
        ));

        let err = evaluator.evaluate(1, 10.0, -5.0).await.unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::InvalidArgument { field: "cart_total", .. }
        ));
    }

    #[tokio::test]
    async fn test_evaluate_rejects_non_finite_amounts() {
        let evaluator = RuleEvaluator::with_delay(fixture(), Arc::new(NoDelay));
        assert!(evaluator.evaluate(1, f64::NAN, 0.0).await.is_err());
        assert!(evaluator.evaluate(1, 10.0, f64::INFINITY).await.is_err());
    }

    #[tokio::test]
    async fn test_evaluate_zero_price() {
        let evaluator = RuleEvaluator::with_delay(fixture(), Arc::new(NoDelay));
        let result = evaluator.evaluate(1, 0.0, 0.0).await.unwrap();
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.base_price, 0.0);
    }
}
