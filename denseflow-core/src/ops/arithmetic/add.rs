// denseflow-core/src/ops/arithmetic/add.rs

use crate::error::Result;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;

/// Performs element-wise addition of two tensors of identical shape.
///
/// # Errors
/// `DenseFlowError::ShapeMismatch` if the shapes differ; no broadcasting is done.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    apply_binary_op(a, b, |x, y| x + y, "add_op")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
