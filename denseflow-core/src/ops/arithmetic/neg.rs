use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Multiplies every element by -1.
pub fn neg_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, |x| -x)
}
