//! Performance instrumentation for hot paths.
//!
//! Pointer moves and connection redraws run on every input event, so they
//! carry scoped timers that report slow operations through `tracing`.
//!
//! Enable detailed timings with the `profiling` feature:
//! ```toml
//! [dependencies]
//! course-canvas = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn update_connections() {
//!     profile_scope!("update_connections");
//!     // ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::{debug, warn};

/// Budget for a single input-driven update (one 60 FPS frame)
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Time the enclosing scope. Compiles to nothing without `profiling`.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Operation Statistics
// ============================================================================

/// Rolling timing statistics for one operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    min_ms: f64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min_ms(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.min_ms }
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }
}

/// Per-operation timings, kept by the studio for its deferred work.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    operation_stats: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operation_stats
            .entry(name)
            .or_default()
            .record(elapsed_ms);
    }

    /// Run `f`, recording how long it took under `name`.
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let (result, elapsed_ms) = measure(f);
        self.record_operation(name, elapsed_ms);
        result
    }

    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operation_stats.get(name)
    }

    /// Operations sorted by average time, slowest first.
    pub fn slowest(&self, limit: usize) -> Vec<(&'static str, &OperationStats)> {
        let mut ops: Vec<_> = self.operation_stats.iter().map(|(k, v)| (*k, v)).collect();
        ops.sort_by(|a, b| b.1.average().total_cmp(&a.1.average()));
        ops.truncate(limit);
        ops
    }

    /// Log a summary of operations averaging over the frame budget.
    pub fn log_summary_if_slow(&self) {
        for (name, stats) in self.slowest(5) {
            if stats.average() > TARGET_FRAME_MS {
                warn!(
                    operation = name,
                    avg_ms = format!("{:.2}", stats.average()),
                    p95_ms = format!("{:.2}", stats.p95()),
                    count = stats.count(),
                    "Operation over frame budget"
                );
            } else {
                debug!(operation = name, avg_ms = format!("{:.2}", stats.average()));
            }
        }
    }

    pub fn reset(&mut self) {
        self.operation_stats.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

#[cfg(feature = "profiling")]
thread_local! {
    static CURRENT_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Logs the scope's duration on drop when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
    #[cfg(feature = "profiling")]
    depth: usize,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        #[cfg(feature = "profiling")]
        let depth = CURRENT_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        Self {
            name,
            start: Instant::now(),
            threshold_ms,
            #[cfg(feature = "profiling")]
            depth,
        }
    }

    /// 1ms threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            CURRENT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            if elapsed_ms > self.threshold_ms {
                let indent = "  ".repeat(self.depth);
                trace!("{}[PERF] {}: {:.2}ms", indent, self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run `f` and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
