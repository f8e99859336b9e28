//! Pricing rule definitions

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Smallest priority a rule may carry
pub const MIN_PRIORITY: u32 = 1;

/// Largest priority a rule may carry
pub const MAX_PRIORITY: u32 = 100;

/// Largest discount a rule may grant, as a fraction of the base price
pub const MAX_DISCOUNT_PCT: f64 = 0.30;

/// Pricing rule definition
///
/// A rule applies to an item when the item id falls inside `variant_range`
/// (both bounds inclusive) and the cart total is at least `cart_min`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Unique rule ID, assigned in construction order
    pub rule_id: u64,

    /// Inclusive `(low, high)` item id bounds
    pub variant_range: (i64, i64),

    /// Minimum cart total required for the rule to apply
    pub cart_min: f64,

    /// Discount granted by the rule, in `[0.0, 0.30]`
    pub discount_pct: f64,

    /// Higher priority wins, in `[1, 100]`
    pub priority: u32,
}

impl PricingRule {
    /// Create a new rule
    pub fn new(
        rule_id: u64,
        variant_range: (i64, i64),
        cart_min: f64,
        discount_pct: f64,
        priority: u32,
    ) -> Self {
        PricingRule {
            rule_id,
            variant_range,
            cart_min,
            discount_pct,
            priority,
        }
    }

    /// Check whether this rule applies to the given item and cart total
    #[inline]
    pub fn matches(&self, item_id: i64, cart_total: f64) -> bool {
        let (low, high) = self.variant_range;
        low <= item_id && item_id <= high && cart_total >= self.cart_min
    }

    /// Check the rule invariants
    pub fn validate(&self) -> Result<()> {
        let (low, high) = self.variant_range;
        if low >= high {
            return Err(self.invalid(format!("variant_range ({}, {}) requires low < high", low, high)));
        }
        if !self.cart_min.is_finite() || self.cart_min < 0.0 {
            return Err(self.invalid(format!("cart_min {} must be a non-negative number", self.cart_min)));
        }
        if !(0.0..=MAX_DISCOUNT_PCT).contains(&self.discount_pct) {
            return Err(self.invalid(format!(
                "discount_pct {} outside [0, {}]",
                self.discount_pct, MAX_DISCOUNT_PCT
            )));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(self.invalid(format!(
                "priority {} outside [{}, {}]",
                self.priority, MIN_PRIORITY, MAX_PRIORITY
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> CoreError {
        CoreError::InvalidRule {
            rule_id: self.rule_id,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> PricingRule {
        PricingRule::new(0, (1, 100), 20.0, 0.10, 5)
    }

    #[test]
    fn test_matches_inclusive_bounds() {
        let rule = rule();
        assert!(rule.matches(1, 20.0));
        assert!(rule.matches(100, 20.0));
        assert!(!rule.matches(0, 20.0));
        assert!(!rule.matches(101, 20.0));
    }

    #[test]
    fn test_matches_requires_cart_min() {
        let rule = rule();
        assert!(rule.matches(50, 20.0));
        assert!(rule.matches(50, 250.0));
        assert!(!rule.matches(50, 19.99));
    }

    #[test]
    fn test_validate_accepts_well_formed_rule() {
        assert!(rule().validate().is_ok());
        assert!(PricingRule::new(3, (1, 2), 0.0, 0.30, 100).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let err = PricingRule::new(4, (10, 10), 0.0, 0.1, 5).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidRule { rule_id: 4, .. }));
        assert!(err.to_string().contains("low < high"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        assert!(PricingRule::new(0, (1, 5), -1.0, 0.1, 5).validate().is_err());
        assert!(PricingRule::new(0, (1, 5), f64::NAN, 0.1, 5).validate().is_err());
        assert!(PricingRule::new(0, (1, 5), 0.0, 0.31, 5).validate().is_err());
        assert!(PricingRule::new(0, (1, 5), 0.0, 0.1, 0).validate().is_err());
        assert!(PricingRule::new(0, (1, 5), 0.0, 0.1, 101).validate().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(rule()).unwrap();
        assert_eq!(json["rule_id"], 0);
        assert_eq!(json["variant_range"], serde_json::json!([1, 100]));
        assert_eq!(json["cart_min"], 20.0);
        assert_eq!(json["discount_pct"], 0.10);
        assert_eq!(json["priority"], 5);
    }
}
