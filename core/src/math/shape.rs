use crate::prelude::{Axis, MatrixError, MatrixResult, Operand};

/// Returns `(rows, cols)` once every row is as long as the first one.
pub fn rectangular(matrix: &[Vec<i32>], operand: Operand) -> MatrixResult<(usize, usize)> {
    let cols = matrix.first().map_or(0, Vec::len);
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != cols {
            return Err(MatrixError::DimensionMismatch {
                operand,
                axis: Axis::Columns { row },
                expected: cols,
                found: values.len(),
            });
        }
    }
    Ok((matrix.len(), cols))
}

/// Fails unless `matrix` is exactly `rows × cols`.
pub fn expect(matrix: &[Vec<i32>], operand: Operand, rows: usize, cols: usize) -> MatrixResult<()> {
    if matrix.len() != rows {
        return Err(MatrixError::DimensionMismatch {
            operand,
            axis: Axis::Rows,
            expected: rows,
            found: matrix.len(),
        });
    }
    match matrix.iter().position(|values| values.len() != cols) {
        Some(row) => Err(MatrixError::DimensionMismatch {
            operand,
            axis: Axis::Columns { row },
            expected: cols,
            found: matrix[row].len(),
        }),
        None => Ok(()),
    }
}
