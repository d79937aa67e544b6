use crate::workflow::runner::CaseResult;
use matmulcore::telemetry::MetricsSnapshot;
use matmulcore::{DimensionTriple, Matrix};
use serde::Serialize;

/// Serializable view of a finished case, or of the reason it was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<DimensionTriple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Matrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseReport {
    pub fn from_result(result: &CaseResult) -> Self {
        Self {
            name: result.name.clone(),
            dims: Some(result.dims),
            product: Some(result.product.clone()),
            error: None,
        }
    }

    pub fn from_error(name: &str, error: &anyhow::Error) -> Self {
        Self {
            name: name.to_string(),
            dims: None,
            product: None,
            error: Some(format!("{:#}", error)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub cases: Vec<CaseReport>,
    pub multiplications: usize,
    pub mismatches: usize,
    pub multiply_adds: u64,
}

impl RunSummary {
    pub fn new(cases: Vec<CaseReport>, metrics: MetricsSnapshot) -> Self {
        Self {
            cases,
            multiplications: metrics.multiplications,
            mismatches: metrics.mismatches,
            multiply_adds: metrics.multiply_adds,
        }
    }
}
