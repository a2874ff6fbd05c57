use crate::error::Result;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;

/// Element-wise (Hadamard) product of two tensors of identical shape.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    apply_binary_op(a, b, |x, y| x * y, "mul_op")
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
