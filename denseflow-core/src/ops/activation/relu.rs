use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Applies the Rectified Linear Unit (ReLU) activation function element-wise.
/// ReLU(x) = max(x, 0)
pub fn relu_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| if x > 0.0 { x } else { 0.0 })
}

/// dReLU/dx evaluated at the pre-activation `a`: 1 where `x > 0`, else 0.
pub fn relu_derivative_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| if x > 0.0 { 1.0 } else { 0.0 })
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
