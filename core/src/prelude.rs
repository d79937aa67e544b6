use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::shape;

/// Row-major integer matrix: a sequence of equally long rows.
pub type Matrix = Vec<Vec<i32>>;

/// Caller-asserted shape of a multiplication `A (rows_a × inner_dim) · B (inner_dim × cols_b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionTriple {
    pub rows_a: usize,
    pub inner_dim: usize,
    pub cols_b: usize,
}

impl DimensionTriple {
    pub fn new(rows_a: usize, inner_dim: usize, cols_b: usize) -> Self {
        Self {
            rows_a,
            inner_dim,
            cols_b,
        }
    }

    /// Reads the triple off the operands themselves.
    ///
    /// Both operands must be rectangular and agree on the inner dimension.
    /// When `b` has no rows its column count is unobservable and taken as zero.
    pub fn infer(a: &[Vec<i32>], b: &[Vec<i32>]) -> MatrixResult<Self> {
        let (rows_a, cols_a) = shape::rectangular(a, Operand::A)?;
        let (rows_b, cols_b) = shape::rectangular(b, Operand::B)?;
        // An empty A says nothing about its width, so B decides.
        let inner_dim = if rows_a == 0 { rows_b } else { cols_a };
        if rows_b != inner_dim {
            return Err(MatrixError::DimensionMismatch {
                operand: Operand::B,
                axis: Axis::Rows,
                expected: inner_dim,
                found: rows_b,
            });
        }
        Ok(Self::new(rows_a, inner_dim, cols_b))
    }

    /// Checks every declared extent against the actual operands.
    ///
    /// An empty `out` is accepted: the caller will size it to [`Self::output_shape`].
    pub fn validate(
        &self,
        a: &[Vec<i32>],
        b: &[Vec<i32>],
        out: &[Vec<i32>],
    ) -> MatrixResult<()> {
        shape::expect(a, Operand::A, self.rows_a, self.inner_dim)?;
        shape::expect(b, Operand::B, self.inner_dim, self.cols_b)?;
        if !out.is_empty() {
            shape::expect(out, Operand::Output, self.rows_a, self.cols_b)?;
        }
        Ok(())
    }

    pub fn output_shape(&self) -> (usize, usize) {
        (self.rows_a, self.cols_b)
    }
}

impl From<(usize, usize, usize)> for DimensionTriple {
    fn from((rows_a, inner_dim, cols_b): (usize, usize, usize)) -> Self {
        Self::new(rows_a, inner_dim, cols_b)
    }
}

impl fmt::Display for DimensionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}x{})·({}x{})", self.rows_a, self.inner_dim, self.inner_dim, self.cols_b)
    }
}

/// Matrix an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
    Output,
    Lhs,
    Rhs,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::A => "A",
            Operand::B => "B",
            Operand::Output => "out",
            Operand::Lhs => "lhs",
            Operand::Rhs => "rhs",
        };
        f.write_str(name)
    }
}

/// Extent that disagreed with the declared shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    /// Length of one particular row.
    Columns { row: usize },
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("row count"),
            Axis::Columns { row } => write!(f, "length of row {}", row),
        }
    }
}

/// Common error type for matrix operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: {operand} {axis} is {found}, expected {expected}")]
    DimensionMismatch {
        operand: Operand,
        axis: Axis,
        expected: usize,
        found: usize,
    },
}

pub type MatrixResult<T> = Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_reads_shape_from_operands() {
        let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let b = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
        assert_eq!(
            DimensionTriple::infer(&a, &b).unwrap(),
            DimensionTriple::new(2, 3, 2)
        );
    }

    #[test]
    fn infer_rejects_incompatible_inner_dimension() {
        let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let b = vec![vec![7, 8], vec![9, 10]];
        let err = DimensionTriple::infer(&a, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                operand: Operand::B,
                axis: Axis::Rows,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn validate_accepts_empty_output() {
        let a = vec![vec![1, 2]];
        let b = vec![vec![3], vec![4]];
        assert!(DimensionTriple::new(1, 2, 1).validate(&a, &b, &[]).is_ok());
    }

    #[test]
    fn error_message_names_operand_and_axis() {
        let err = MatrixError::DimensionMismatch {
            operand: Operand::Output,
            axis: Axis::Columns { row: 1 },
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: out length of row 1 is 3, expected 2"
        );
    }

    #[test]
    fn triple_deserializes_from_named_fields() {
        let dims: DimensionTriple =
            serde_json::from_str(r#"{"rows_a": 3, "inner_dim": 2, "cols_b": 2}"#).unwrap();
        assert_eq!(dims, (3, 2, 2).into());
        assert_eq!(dims.output_shape(), (3, 2));
    }
}
