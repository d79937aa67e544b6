pub mod matrix;
pub mod shape;

pub use matrix::{multiply, MatrixHelper};
