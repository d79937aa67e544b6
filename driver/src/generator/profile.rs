use crate::workflow::config::CaseConfig;
use anyhow::{ensure, Context};
use matmulcore::{DimensionTriple, Matrix};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a random multiplication case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rows_a: usize,
    pub inner_dim: usize,
    pub cols_b: usize,
    /// Entries are drawn uniformly from `[-magnitude, magnitude]`.
    pub magnitude: i32,
    pub seed: u64,
    pub name: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows_a: 3,
            inner_dim: 4,
            cols_b: 2,
            magnitude: 100,
            seed: 0,
            name: None,
        }
    }
}

impl GeneratorConfig {
    fn dims(&self) -> DimensionTriple {
        DimensionTriple::new(self.rows_a, self.inner_dim, self.cols_b)
    }
}

fn build_matrix(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    magnitude: i32,
) -> anyhow::Result<Matrix> {
    rows.checked_mul(cols)
        .context("overflow computing element count for generator")?;

    let matrix: Matrix = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| rng.gen_range(-magnitude..=magnitude))
                .collect::<Vec<i32>>()
        })
        .collect();
    Ok(matrix)
}

pub fn build_case_from_config(config: &GeneratorConfig) -> anyhow::Result<CaseConfig> {
    ensure!(
        config.magnitude >= 0,
        "generator magnitude must be non-negative, got {}",
        config.magnitude
    );

    let dims = config.dims();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let a = build_matrix(&mut rng, dims.rows_a, dims.inner_dim, config.magnitude)?;
    let b = build_matrix(&mut rng, dims.inner_dim, dims.cols_b, config.magnitude)?;
    let name = config
        .name
        .clone()
        .unwrap_or_else(|| format!("random-{}", config.seed));

    Ok(CaseConfig::new(name, a, b, Some(dims)))
}

#[cfg(test)]
pub fn build_case(rows_a: usize, inner_dim: usize, cols_b: usize) -> anyhow::Result<CaseConfig> {
    let config = GeneratorConfig {
        rows_a,
        inner_dim,
        cols_b,
        ..Default::default()
    };
    build_case_from_config(&config)
}
