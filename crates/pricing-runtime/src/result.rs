//! Evaluation result types

use pricing_core::PricingRule;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

const NO_MATCH_LABEL: &str = "no match";

/// Outcome of winner resolution
///
/// Serializes as the winning rule id, or as the string `"no match"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleMatch {
    /// The rule with this id won
    Rule(u64),
    /// No rule applied
    NoMatch,
}

impl RuleMatch {
    /// Winning rule id, if any
    pub fn rule_id(&self) -> Option<u64> {
        match self {
            RuleMatch::Rule(id) => Some(*id),
            RuleMatch::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, RuleMatch::Rule(_))
    }
}

impl From<RuleMatch> for Option<u64> {
    fn from(value: RuleMatch) -> Self {
        value.rule_id()
    }
}

impl From<Option<u64>> for RuleMatch {
    fn from(value: Option<u64>) -> Self {
        value.map_or(RuleMatch::NoMatch, RuleMatch::Rule)
    }
}

impl fmt::Display for RuleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMatch::Rule(id) => write!(f, "{}", id),
            RuleMatch::NoMatch => f.write_str(NO_MATCH_LABEL),
        }
    }
}

impl Serialize for RuleMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleMatch::Rule(id) => serializer.serialize_u64(*id),
            RuleMatch::NoMatch => serializer.serialize_str(NO_MATCH_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for RuleMatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(u64),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Id(id) => Ok(RuleMatch::Rule(id)),
            Repr::Label(label) if label == NO_MATCH_LABEL => Ok(RuleMatch::NoMatch),
            Repr::Label(label) => Err(de::Error::custom(format!(
                "expected a rule id or \"{}\", got \"{}\"",
                NO_MATCH_LABEL, label
            ))),
        }
    }
}

/// Result of evaluating one pricing query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Item being priced
    pub item_id: i64,

    /// Catalog price before discount
    pub base_price: f64,

    /// Price after applying the winning rule's discount
    pub final_price: f64,

    /// Discount applied, `0.0` when no rule matched
    pub discount_pct: f64,

    /// Winning rule
    pub rule_matched: RuleMatch,

    /// Size of the rule set, regardless of how many rules matched
    pub rules_evaluated: usize,

    /// Every matching rule, in scan order
    pub rule_snapshot: Vec<PricingRule>,
}
