use log::trace;
use ndarray::{Array2, ArrayView2};

use crate::math::shape;
use crate::prelude::{DimensionTriple, Matrix, MatrixResult, Operand};

/// Computes `out = a · b` for the declared `rows_a × inner_dim × cols_b` shape.
///
/// Every declared extent is checked against `a`, `b` and `out` before anything
/// is written; on error `out` is left exactly as it was. An empty `out` is sized
/// to `rows_a × cols_b`, any other `out` must already have that shape.
///
/// Arithmetic is `i32` two's-complement: products and sums wrap on overflow in
/// every build profile.
pub fn multiply(
    a: &[Vec<i32>],
    b: &[Vec<i32>],
    out: &mut Matrix,
    rows_a: usize,
    inner_dim: usize,
    cols_b: usize,
) -> MatrixResult<()> {
    MatrixHelper::multiply(a, b, out, DimensionTriple::new(rows_a, inner_dim, cols_b))
}

pub struct MatrixHelper;

impl MatrixHelper {
    /// Triple-loop product into a caller-owned output, see [`multiply`].
    pub fn multiply(
        a: &[Vec<i32>],
        b: &[Vec<i32>],
        out: &mut Matrix,
        dims: DimensionTriple,
    ) -> MatrixResult<()> {
        dims.validate(a, b, out)?;
        if out.is_empty() {
            *out = Self::zeros(dims.rows_a, dims.cols_b);
        }

        for (a_row, out_row) in a.iter().zip(out.iter_mut()) {
            for (j, cell) in out_row.iter_mut().enumerate() {
                let mut acc = 0i32;
                for (&lhs, b_row) in a_row.iter().zip(b) {
                    acc = acc.wrapping_add(lhs.wrapping_mul(b_row[j]));
                }
                *cell = acc;
            }
        }

        trace!("multiplied {}", dims);
        Ok(())
    }

    /// Allocating product with the shape read off the operands.
    pub fn product(a: &[Vec<i32>], b: &[Vec<i32>]) -> MatrixResult<Matrix> {
        let dims = DimensionTriple::infer(a, b)?;
        let mut out = Vec::new();
        Self::multiply(a, b, &mut out, dims)?;
        Ok(out)
    }

    /// Element-wise `out = lhs + rhs` (wrapping), same validation rules as [`multiply`].
    pub fn add(lhs: &[Vec<i32>], rhs: &[Vec<i32>], out: &mut Matrix) -> MatrixResult<()> {
        let (rows, cols) = shape::rectangular(lhs, Operand::Lhs)?;
        shape::expect(rhs, Operand::Rhs, rows, cols)?;
        if out.is_empty() {
            *out = Self::zeros(rows, cols);
        } else {
            shape::expect(out, Operand::Output, rows, cols)?;
        }

        for ((l_row, r_row), out_row) in lhs.iter().zip(rhs).zip(out.iter_mut()) {
            for ((&l, &r), cell) in l_row.iter().zip(r_row).zip(out_row.iter_mut()) {
                *cell = l.wrapping_add(r);
            }
        }
        Ok(())
    }

    pub fn sum(lhs: &[Vec<i32>], rhs: &[Vec<i32>]) -> MatrixResult<Matrix> {
        let mut out = Vec::new();
        Self::add(lhs, rhs, &mut out)?;
        Ok(out)
    }

    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        vec![vec![0; cols]; rows]
    }

    pub fn identity(size: usize) -> Matrix {
        let mut m = Self::zeros(size, size);
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1;
        }
        m
    }

    /// Copies a rectangular matrix into an owned `ndarray` array.
    ///
    /// `operand` names the matrix in the error when a row is ragged.
    pub fn to_array(matrix: &[Vec<i32>], operand: Operand) -> MatrixResult<Array2<i32>> {
        let (rows, cols) = shape::rectangular(matrix, operand)?;
        Ok(Array2::from_shape_fn((rows, cols), |(i, j)| matrix[i][j]))
    }

    pub fn from_array(view: ArrayView2<i32>) -> Matrix {
        view.outer_iter().map(|row| row.to_vec()).collect()
    }
}
