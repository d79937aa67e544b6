use log::{info, warn};

use crate::prelude::{DimensionTriple, MatrixError};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_product(&self, case: &str, dims: &DimensionTriple) {
        info!("{} -> product {}", case, dims);
    }

    pub fn record_mismatch(&self, case: &str, error: &MatrixError) {
        warn!("{} rejected: {}", case, error);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
