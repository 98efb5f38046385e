//! Development timing of dispatches.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::{Middleware, MiddlewareApi, Next};
use crate::error::StoreError;
use crate::root::{RootAction, RootState};

/// Aggregated timings for one action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionTiming {
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
    pub last: Duration,
}

impl ActionTiming {
    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / u128::from(self.count);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
        self.last = elapsed;
    }
}

/// Measures wall-clock time from entry to the return of the rest of the
/// chain, per action type.
pub struct PerformanceMiddleware {
    slow_threshold: Duration,
    timings: Mutex<HashMap<String, ActionTiming>>,
}

impl PerformanceMiddleware {
    pub fn new(slow_threshold: Duration) -> Self {
        Self {
            slow_threshold,
            timings: Mutex::new(HashMap::new()),
        }
    }

    pub fn timing(&self, action_type: &str) -> Option<ActionTiming> {
        self.timings.lock().get(action_type).copied()
    }

    /// All timings, slowest total first.
    pub fn report(&self) -> Vec<(String, ActionTiming)> {
        let mut report: Vec<_> = self
            .timings
            .lock()
            .iter()
            .map(|(action_type, timing)| (action_type.clone(), *timing))
            .collect();
        report.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(&b.0)));
        report
    }
}

impl Middleware for PerformanceMiddleware {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn handle(
        &self,
        _api: &MiddlewareApi<'_>,
        action: RootAction,
        next: Next<'_>,
    ) -> Result<Arc<RootState>, StoreError> {
        let action_type = action.action_type().to_string();
        let start = Instant::now();
        let result = next.run(action);
        let elapsed = start.elapsed();

        self.timings
            .lock()
            .entry(action_type.clone())
            .or_default()
            .record(elapsed);

        if elapsed > self.slow_threshold {
            tracing::warn!(
                action = %action_type,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                threshold_ms = self.slow_threshold.as_millis() as u64,
                "Slow action"
            );
        } else {
            tracing::trace!(action = %action_type, elapsed_us = elapsed.as_micros() as u64, "action timed");
        }

        result
    }
}
