use std::sync::Mutex;

/// Counters for completed products and rejected shapes.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub multiplications: usize,
    pub mismatches: usize,
    /// Sum of `rows_a * inner_dim * cols_b` over completed products.
    pub multiply_adds: u64,
}

struct Metrics {
    multiplications: usize,
    mismatches: usize,
    multiply_adds: u64,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                multiplications: 0,
                mismatches: 0,
                multiply_adds: 0,
            }),
        }
    }

    pub fn record_multiplication(&self, multiply_adds: u64) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.multiplications += 1;
            metrics.multiply_adds = metrics.multiply_adds.saturating_add(multiply_adds);
        }
    }

    pub fn record_mismatch(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.mismatches += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                multiplications: metrics.multiplications,
                mismatches: metrics.mismatches,
                multiply_adds: metrics.multiply_adds,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
