//! Upstream pricing-context fetch
//!
//! Every evaluation consults the central pricing authority before scanning
//! rules. The cost of that round trip is modelled as a fixed wait supplied by
//! a `FetchDelay` strategy, injected into the evaluator so tests can swap in
//! `NoDelay`.

use async_trait::async_trait;
use std::time::Duration;

/// Default wait per evaluation, in milliseconds
pub const DEFAULT_FETCH_DELAY_MS: u64 = 2500;

/// Wait incurred before each evaluation
#[async_trait]
pub trait FetchDelay: Send + Sync {
    /// Suspend the caller for the duration of one upstream fetch
    async fn wait(&self);
}

/// Suspends on a tokio timer, yielding the worker thread while waiting
#[derive(Debug, Clone, Copy)]
pub struct SleepDelay {
    duration: Duration,
}

impl SleepDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SleepDelay {
    fn default() -> Self {
        Self::from_millis(DEFAULT_FETCH_DELAY_MS)
    }
}

#[async_trait]
impl FetchDelay for SleepDelay {
    async fn wait(&self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl FetchDelay for NoDelay {
    async fn wait(&self) {}
}
