use crate::tensor::{Shape, Tensor};

/// Copies `a` into a single column of shape `[numel, 1]`, keeping row-major order.
pub fn flatten_op(a: &Tensor) -> Tensor {
    Tensor::from_parts_unchecked(a.to_vec(), Shape(vec![a.numel(), 1]))
}
