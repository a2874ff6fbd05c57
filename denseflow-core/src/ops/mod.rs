//! # Tensor Operations Module (`ops`)
//!
//! Free functions over one or two [`Tensor`]s that always return a new tensor.
//! Operations are grouped into submodules by functionality and each core
//! function is named `xxx_op`.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Element-wise add, sub, mul, neg and scalar scaling.
//! - [`linalg`]: Matrix product (`dot_op`) and transpose.
//! - [`math_elem`]: Element-wise square, exp and ln.
//! - [`activation`]: ReLU and sigmoid, with their local derivatives.
//! - [`reduction`]: Per-row mean/max/min, column sums and full reductions.
//! - [`view`]: Shape-only operations (flatten).
//!
//! Binary element-wise operations never broadcast: both operands must have
//! exactly the same shape.

use crate::error::{DenseFlowError, Result};
use crate::tensor::{same_shape, Tensor};

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod math_elem;
pub mod reduction;
pub mod view;

pub use activation::{relu_derivative_op, relu_op, sigmoid_derivative_op, sigmoid_op};
pub use arithmetic::{add_op, mul_op, neg_op, scale_op, sub_op};
pub use linalg::{dot_op, transpose_op};
pub use math_elem::{exp_op, ln_op, square_op};
pub use reduction::{max_op, mean_all_op, mean_op, min_op, sum_all_op, sum_columns_op};
pub use view::flatten_op;

/// Unwraps an operand that may be absent.
///
/// # Errors
/// `DenseFlowError::NilOperand` naming `op_name` when `operand` is `None`.
pub fn require_operand<'a>(operand: Option<&'a Tensor>, op_name: &str) -> Result<&'a Tensor> {
    operand.ok_or_else(|| DenseFlowError::NilOperand {
        operation: op_name.to_string(),
    })
}

/// Applies `op` to every element, keeping the shape.
pub(crate) fn apply_unary_op<F>(a: &Tensor, op: F) -> Tensor
where
    F: Fn(f64) -> f64,
{
    let output_data: Vec<f64> = a.data().iter().map(|&val| op(val)).collect();
    Tensor::from_parts_unchecked(output_data, a.shape_info().clone())
}

/// Applies `op` pairwise to two tensors of identical shape.
///
/// # Errors
/// `DenseFlowError::ShapeMismatch` naming `op_name` if the shapes differ.
pub(crate) fn apply_binary_op<F>(a: &Tensor, b: &Tensor, op: F, op_name: &str) -> Result<Tensor>
where
    F: Fn(f64, f64) -> f64,
{
    if !same_shape(a, b) {
        return Err(DenseFlowError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: op_name.to_string(),
        });
    }
    let output_data: Vec<f64> = a
        .data()
        .iter()
        .zip(b.data().iter())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Ok(Tensor::from_parts_unchecked(
        output_data,
        a.shape_info().clone(),
    ))
}
