//! Performance accounting for SLA and cache-hit tracking
//!
//! The tracker is an injectable instance owned by whoever constructs the
//! services, never process-global state, so tests can assert on isolated
//! counters.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Point-in-time snapshot of the performance counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub api_call_count: u64,
    pub cache_hits: u64,
    pub sla_violations: u64,
    pub average_response_time_ms: f64,
}

/// Accumulates call latencies against an SLA threshold. Calls over the
/// threshold still succeed; the violation is advisory.
pub struct PerformanceTracker {
    sla_threshold_ms: u64,
    inner: Mutex<PerformanceMetrics>,
}

impl PerformanceTracker {
    pub fn new(sla_threshold_ms: u64) -> Self {
        Self {
            sla_threshold_ms,
            inner: Mutex::new(PerformanceMetrics::default()),
        }
    }

    pub fn sla_threshold_ms(&self) -> u64 {
        self.sla_threshold_ms
    }

    /// Record one call's elapsed time. Returns whether the call met the SLA.
    pub fn record_call(&self, elapsed_ms: u64) -> bool {
        let mut metrics = self.inner.lock().unwrap();
        metrics.api_call_count += 1;

        let calls = metrics.api_call_count as f64;
        metrics.average_response_time_ms =
            (metrics.average_response_time_ms * (calls - 1.0) + elapsed_ms as f64) / calls;

        let compliant = elapsed_ms <= self.sla_threshold_ms;
        if !compliant {
            metrics.sla_violations += 1;
            warn!(
                elapsed_ms,
                threshold_ms = self.sla_threshold_ms,
                "processing time exceeded SLA"
            );
        }
        compliant
    }

    pub fn record_cache_hit(&self) {
        self.inner.lock().unwrap().cache_hits += 1;
    }

    pub fn snapshot(&self) -> PerformanceMetrics {
        self.inner.lock().unwrap().clone()
    }
}
