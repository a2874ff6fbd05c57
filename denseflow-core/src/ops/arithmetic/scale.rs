use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Multiplies every element by `scalar`; the shape is preserved.
pub fn scale_op(a: &Tensor, scalar: f64) -> Tensor {
    apply_unary_op(a, |x| x * scalar)
}
