use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Applies `1 / (1 + exp(-x))` element-wise.
pub fn sigmoid_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, sigmoid)
}

/// dσ/dx evaluated at the pre-activation `a`: `σ(x) * (1 - σ(x))`.
pub fn sigmoid_derivative_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| {
        let s = sigmoid(x);
        s * (1.0 - s)
    })
}
