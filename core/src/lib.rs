//! Dimension-checked dense integer matrix multiplication.
//!
//! [`multiply`] writes `A · B` into a caller-owned output after checking the
//! declared `(rows_a, inner_dim, cols_b)` triple against the actual operands.
//! Declared dimensions are authoritative: any disagreement is reported as
//! [`MatrixError::DimensionMismatch`] and the output is left untouched.

pub mod math;
pub mod prelude;
pub mod telemetry;

pub use math::{multiply, MatrixHelper};
pub use prelude::{DimensionTriple, Matrix, MatrixError, MatrixResult};
