use crate::error::{DenseFlowError, Result};
use crate::ops::arithmetic::{add_op, neg_op};
use crate::tensor::Tensor;

/// Subtracts `b` from `a`, computed as `a + (-b)`.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    add_op(a, &neg_op(b)).map_err(|e| match e {
        DenseFlowError::ShapeMismatch {
            expected, actual, ..
        } => DenseFlowError::ShapeMismatch {
            expected,
            actual,
            operation: "sub_op".to_string(),
        },
        other => other,
    })
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
