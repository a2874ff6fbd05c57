use crate::error::{DenseFlowError, Result};
use crate::tensor::{Shape, Tensor};

/// Sums over every dimension except the last.
///
/// Leading dimensions are folded into rows, so a `[b, r, c]` tensor sums
/// `b * r` rows of length `c`. The result is `[1, c]`, which is the shape a
/// bias gradient takes.
///
/// # Errors
/// `DenseFlowError::UnsupportedShape` for rank-1 input.
pub fn sum_columns_op(a: &Tensor) -> Result<Tensor> {
    if a.rank() < 2 {
        return Err(DenseFlowError::UnsupportedShape {
            rank: a.rank(),
            operation: "sum_columns_op".to_string(),
        });
    }
    let cols = a.shape()[a.rank() - 1];
    let mut output_data = vec![0.0; cols];
    for row in a.data().chunks(cols) {
        for (acc, value) in output_data.iter_mut().zip(row) {
            *acc += value;
        }
    }
    Ok(Tensor::from_parts_unchecked(output_data, Shape(vec![1, cols])))
}

/// Sum of every element, as a `[1, 1]` tensor.
pub fn sum_all_op(a: &Tensor) -> Tensor {
    Tensor::scalar(a.data().iter().sum())
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
