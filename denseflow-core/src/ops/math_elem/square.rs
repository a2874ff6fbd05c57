use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Computes `x * x` for every element.
pub fn square_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| x * x)
}
