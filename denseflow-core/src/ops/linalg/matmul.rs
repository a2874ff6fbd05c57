// Matrix product.

use crate::error::{DenseFlowError, Result};
use crate::tensor::{ShapeKind, Tensor};

/// Performs matrix multiplication C = A @ B.
/// Supports only 2D tensors (matrices).
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// Accumulation is a plain f64 sum in loop order i, j, k, so results are
/// reproducible but not associative to the last bit.
///
/// # Errors
/// `DenseFlowError::ShapeMismatch` if either operand is not rank 2 or the
/// inner dimensions differ.
pub fn dot_op(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let (m, k, n) = match (a.shape_info().kind(), b.shape_info().kind()) {
        (ShapeKind::Matrix { rows: m, cols: k }, ShapeKind::Matrix { rows: k2, cols: n })
            if k == k2 =>
        {
            (m, k, n)
        }
        _ => {
            return Err(DenseFlowError::ShapeMismatch {
                expected: a.shape().to_vec(),
                actual: b.shape().to_vec(),
                operation: "dot_op".to_string(),
            })
        }
    };

    let a_data = a.data();
    let b_data = b.data();
    let mut output_data = vec![0.0; m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    Tensor::new(output_data, vec![m, n])
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
