use anyhow::Context;
use matmulcore::{DimensionTriple, Matrix};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One multiplication to run: two operands and, optionally, the declared shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseConfig {
    #[serde(default = "default_case_name")]
    pub name: String,
    pub a: Matrix,
    pub b: Matrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dims: Option<DimensionTriple>,
}

fn default_case_name() -> String {
    "unnamed".to_string()
}

impl CaseConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading case config {}", path_ref.display()))?;
        let config: CaseConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing case config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn new(
        name: impl Into<String>,
        a: Matrix,
        b: Matrix,
        dims: Option<DimensionTriple>,
    ) -> Self {
        Self {
            name: name.into(),
            a,
            b,
            dims,
        }
    }

    /// Declared triple, or the one read off the operands when none was given.
    pub fn resolved_dims(&self) -> anyhow::Result<DimensionTriple> {
        match self.dims {
            Some(dims) => Ok(dims),
            None => DimensionTriple::infer(&self.a, &self.b)
                .with_context(|| format!("inferring dimensions for case {}", self.name)),
        }
    }
}
