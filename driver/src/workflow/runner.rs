use crate::workflow::config::CaseConfig;
use anyhow::Context;
use matmulcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use matmulcore::{DimensionTriple, Matrix, MatrixHelper};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub dims: DimensionTriple,
    pub product: Matrix,
}

#[derive(Clone)]
pub struct Runner {
    metrics: Arc<MetricsRecorder>,
    logger: Arc<LogManager>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(MetricsRecorder::new()),
            logger: Arc::new(LogManager::new()),
        }
    }

    pub fn execute(&self, case: &CaseConfig) -> anyhow::Result<CaseResult> {
        let dims = match case.resolved_dims() {
            Ok(dims) => dims,
            Err(err) => {
                self.metrics.record_mismatch();
                self.logger
                    .record(&format!("{} has no consistent shape: {:#}", case.name, err));
                return Err(err);
            }
        };

        // Left empty: the core sizes it only after the declared triple checks out.
        let mut product = Vec::new();
        if let Err(err) = MatrixHelper::multiply(&case.a, &case.b, &mut product, dims) {
            self.metrics.record_mismatch();
            self.logger.record_mismatch(&case.name, &err);
            return Err(err).with_context(|| format!("multiplying case {} as {}", case.name, dims));
        }

        let multiply_adds = (dims.rows_a as u64)
            .saturating_mul(dims.inner_dim as u64)
            .saturating_mul(dims.cols_b as u64);
        self.metrics.record_multiplication(multiply_adds);
        self.logger.record_product(&case.name, &dims);

        Ok(CaseResult {
            name: case.name.clone(),
            dims,
            product,
        })
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
