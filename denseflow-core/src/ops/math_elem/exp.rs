use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Applies the natural exponential element-wise.
pub fn exp_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, f64::exp)
}
