// src/tensor/create.rs

use crate::error::Result;
use crate::tensor::{Shape, Tensor};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor> {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor> {
    full(shape, 1.0)
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full(shape: &[usize], value: f64) -> Result<Tensor> {
    let shape = Shape::try_from(shape)?;
    let data = vec![value; shape.numel()];
    Tensor::from_shape(data, shape)
}

/// Creates a new tensor filled with zeros, having the same shape as the input tensor.
pub fn zeros_like(tensor: &Tensor) -> Tensor {
    Tensor::from_parts_unchecked(vec![0.0; tensor.numel()], tensor.shape_info().clone())
}

/// Creates a tensor of independent uniform samples in `[-1, 1)` using the
/// thread-local generator.
pub fn random(shape: &[usize]) -> Result<Tensor> {
    let mut rng = rand::thread_rng();
    random_with_rng(shape, &mut rng)
}

/// Same as [`random`], drawing from `rng`. Use a seeded generator for
/// reproducible initialisation.
pub fn random_with_rng<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Result<Tensor> {
    let shape = Shape::try_from(shape)?;
    let dist = Uniform::new(-1.0, 1.0);
    let data: Vec<f64> = (0..shape.numel()).map(|_| dist.sample(rng)).collect();
    Tensor::from_shape(data, shape)
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
