use crate::error::Result;
use crate::ops::reduction::reduce_rows;
use crate::tensor::Tensor;

/// Largest value of each row of a rank-2 tensor, shape `[rows, 1]`.
pub fn max_op(a: &Tensor) -> Result<Tensor> {
    reduce_rows(a, "max_op", |row| {
        row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Smallest value of each row of a rank-2 tensor, shape `[rows, 1]`.
pub fn min_op(a: &Tensor) -> Result<Tensor> {
    reduce_rows(a, "min_op", |row| {
        row.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

#[cfg(test)]
#[path = "max_test.rs"]
mod tests;
