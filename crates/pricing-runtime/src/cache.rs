//! Pricing decision cache
//!
//! Append-only audit log of every evaluation, kept in memory for the life of
//! the process. All reads and writes go through a single mutex, so `stats()`
//! never observes a partially applied `store()`.
//!
//! There is no eviction and no size cap. Growth is reported through
//! [`CacheStats::estimated_memory_kb`].

use crate::result::{PricingResult, RuleMatch};
use chrono::{DateTime, Utc};
use pricing_core::PricingRule;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Audit record for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique id assigned when the record is stored
    pub decision_id: Uuid,

    /// Time the record was stored
    pub timestamp: DateTime<Utc>,

    pub item_id: i64,
    pub cart_total: f64,
    pub base_price: f64,
    pub final_price: f64,
    pub discount_pct: f64,
    pub rule_matched: RuleMatch,
    pub rules_evaluated: usize,
    pub rule_snapshot: Vec<PricingRule>,
}

impl AuditRecord {
    fn from_result(item_id: i64, cart_total: f64, result: &PricingResult) -> Self {
        Self {
            decision_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            item_id,
            cart_total,
            base_price: result.base_price,
            final_price: result.final_price,
            discount_pct: result.discount_pct,
            rule_matched: result.rule_matched,
            rules_evaluated: result.rules_evaluated,
            rule_snapshot: result.rule_snapshot.clone(),
        }
    }
}

/// Aggregate cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Records currently held
    pub cache_size: usize,

    /// Decisions recorded since start (or the last reset)
    pub total_decisions: usize,

    /// Serialized size of all records in KiB, rounded to two decimals
    pub estimated_memory_kb: f64,
}

#[derive(Debug, Default)]
struct CacheState {
    records: Vec<AuditRecord>,
    serialized_bytes: usize,
}

/// Concurrency-safe, append-only decision audit log
#[derive(Debug, Default)]
pub struct DecisionCache {
    state: Mutex<CacheState>,
}

impl DecisionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an audit record for an evaluation result.
    ///
    /// Returns the id assigned to the stored record.
    pub async fn store(&self, item_id: i64, cart_total: f64, result: &PricingResult) -> Uuid {
        let record = AuditRecord::from_result(item_id, cart_total, result);
        let decision_id = record.decision_id;

        // Sized outside the critical section
        let size = match serde_json::to_vec(&record) {
            Ok(bytes) => bytes.len(),
            Err(e) => {
                tracing::warn!("Failed to size audit record {}: {}", decision_id, e);
                0
            }
        };

        let mut state = self.state.lock().await;
        state.records.push(record);
        state.serialized_bytes += size;

        decision_id
    }

    /// Snapshot of the cache statistics
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        let size = state.records.len();

        CacheStats {
            cache_size: size,
            total_decisions: size,
            estimated_memory_kb: round_kb(state.serialized_bytes),
        }
    }

    /// Copy of every stored record, in append order
    pub async fn records(&self) -> Vec<AuditRecord> {
        self.state.lock().await.records.clone()
    }

    /// Clear all stored decisions. Intended for test setup and teardown only.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.records.clear();
        state.serialized_bytes = 0;
    }
}

fn round_kb(bytes: usize) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}
