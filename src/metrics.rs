//! Cycle metrics - loop latency and jitter tracking

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hdrhistogram::Histogram;
use parking_lot::Mutex;

/// Thread-safe recorder for control-loop cycle times. Cloning shares the
/// underlying histograms, so a handle can be given to a controller while the
/// caller keeps another for reporting.
#[derive(Clone)]
pub struct CycleMetrics {
    cycle_hist: Arc<Mutex<Histogram<u64>>>,
    jitter_hist: Arc<Mutex<Histogram<u64>>>,
    last_cycle_ns: Arc<AtomicU64>,
}

impl CycleMetrics {
    pub fn new() -> Self {
        Self {
            cycle_hist: Arc::new(Mutex::new(Histogram::new(3).unwrap())),
            jitter_hist: Arc::new(Mutex::new(Histogram::new(3).unwrap())),
            last_cycle_ns: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record one control cycle's duration, and the jitter against the
    /// previous cycle.
    pub fn record_cycle(&self, duration: Duration) {
        let ns = duration.as_nanos() as u64;
        self.cycle_hist.lock().record(ns).ok();

        let last = self.last_cycle_ns.swap(ns, Ordering::Relaxed);
        if last > 0 {
            let jitter = ns.abs_diff(last);
            self.jitter_hist.lock().record(jitter).ok();
        }
    }

    pub fn report(&self) -> MetricsReport {
        let cycle = self.cycle_hist.lock();
        let jitter = self.jitter_hist.lock();

        MetricsReport {
            cycles: cycle.len(),
            cycle_p50: Duration::from_nanos(cycle.value_at_quantile(0.5)),
            cycle_p99: Duration::from_nanos(cycle.value_at_quantile(0.99)),
            jitter_p50: Duration::from_nanos(jitter.value_at_quantile(0.5)),
            jitter_p99: Duration::from_nanos(jitter.value_at_quantile(0.99)),
        }
    }
}

impl Default for CycleMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct MetricsReport {
    pub cycles: u64,
    pub cycle_p50: Duration,
    pub cycle_p99: Duration,
    pub jitter_p50: Duration,
    pub jitter_p99: Duration,
}
