use crate::error::Result;
use crate::ops::reduction::reduce_rows;
use crate::tensor::Tensor;

/// Arithmetic mean of each row of a rank-2 tensor.
///
/// # Errors
/// `DenseFlowError::UnsupportedShape` if `a` is not rank 2.
///
/// # Example
/// `[[1, 2], [3, 4]]` gives `[[1.5], [3.5]]`.
pub fn mean_op(a: &Tensor) -> Result<Tensor> {
    reduce_rows(a, "mean_op", |row| {
        row.iter().sum::<f64>() / row.len() as f64
    })
}

/// Mean of every element, as a `[1, 1]` tensor.
pub fn mean_all_op(a: &Tensor) -> Tensor {
    let total: f64 = a.data().iter().sum();
    Tensor::scalar(total / a.numel() as f64)
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
