// src/tensor/mod.rs

use crate::error::{DenseFlowError, Result};

pub mod create;
mod debug;
pub mod shape;
pub mod utils;

pub use create::{full, ones, random, random_with_rng, zeros, zeros_like};
pub use shape::{Shape, ShapeKind};
pub use utils::{decode_position, encode_position, same_shape, same_shape_opt};

/// Represents a multi-dimensional array of `f64` values.
///
/// Data is stored flat in row-major order. The shape is validated at
/// construction and its element count always equals `data.len()`; only the
/// values (and, through `reshape`, the dimensions with an unchanged element
/// count) can be mutated afterwards.
///
/// Gradients are not stored on tensors. Layers write them into a
/// [`Gradients`](crate::nn::Gradients) context keyed by parameter identity.
#[derive(Debug, Clone)]
pub struct Tensor {
    data: Vec<f64>,
    shape: Shape,
}

impl Tensor {
    /// Creates a new Tensor with the given data and shape.
    ///
    /// # Errors
    /// Returns `DenseFlowError::InvalidShape` if the shape is empty or has a zero
    /// dimension, and `DenseFlowError::TensorCreationError` if `data.len()` does
    /// not equal the product of the dimensions.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self> {
        let shape = Shape::new(shape)?;
        Self::from_shape(data, shape)
    }

    /// Creates a Tensor from an already validated `Shape`.
    pub fn from_shape(data: Vec<f64>, shape: Shape) -> Result<Self> {
        if data.len() != shape.numel() {
            return Err(DenseFlowError::TensorCreationError {
                data_len: data.len(),
                shape: shape.into_vec(),
            });
        }
        Ok(Tensor { data, shape })
    }

    /// Creates a `[1, 1]` tensor holding `value`.
    pub fn scalar(value: f64) -> Self {
        Tensor {
            data: vec![value],
            shape: Shape(vec![1, 1]),
        }
    }

    /// Returns the dimensions of the tensor.
    pub fn shape(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn shape_info(&self) -> &Shape {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn strides(&self) -> Vec<usize> {
        self.shape.strides()
    }

    /// Read-only view of the flat row-major buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Replaces the whole buffer, keeping the shape.
    ///
    /// # Errors
    /// `DenseFlowError::ShapeMismatch` if `data.len()` differs from `numel()`.
    pub fn set_data(&mut self, data: Vec<f64>) -> Result<()> {
        if data.len() != self.numel() {
            return Err(DenseFlowError::ShapeMismatch {
                expected: vec![self.numel()],
                actual: vec![data.len()],
                operation: "set_data".to_string(),
            });
        }
        self.data = data;
        Ok(())
    }

    /// Changes the shape in place. The element count must be preserved.
    pub fn reshape(&mut self, shape: Vec<usize>) -> Result<()> {
        let new_shape = Shape::new(shape)?;
        if new_shape.numel() != self.numel() {
            return Err(DenseFlowError::ShapeMismatch {
                expected: self.shape().to_vec(),
                actual: new_shape.into_vec(),
                operation: "reshape".to_string(),
            });
        }
        self.shape = new_shape;
        Ok(())
    }

    /// Returns the element at the multi-index `indices`.
    ///
    /// # Errors
    /// `DenseFlowError::IndexOutOfBounds` if the index length differs from the
    /// rank or any coordinate is outside its dimension.
    pub fn get_value(&self, indices: &[usize]) -> Result<f64> {
        let offset = encode_position(indices, self.shape())?;
        Ok(self.data[offset])
    }

    /// Writes `value` at the multi-index `indices`.
    pub fn set_value(&mut self, value: f64, indices: &[usize]) -> Result<()> {
        let offset = encode_position(indices, self.shape())?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns `(rows, cols)` if the tensor is rank 2.
    pub fn as_matrix(&self, operation: &str) -> Result<(usize, usize)> {
        self.shape.as_matrix(operation)
    }

    /// Returns the single value of a one-element tensor.
    pub fn item(&self) -> Result<f64> {
        match self.data.as_slice() {
            [value] => Ok(*value),
            _ => Err(DenseFlowError::ShapeMismatch {
                expected: vec![1, 1],
                actual: self.shape().to_vec(),
                operation: "item".to_string(),
            }),
        }
    }

    /// Shapes are equal and every element is bit-for-bit identical.
    pub fn equals(&self, other: &Tensor) -> bool {
        self.shape == other.shape
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    pub(crate) fn from_parts_unchecked(data: Vec<f64>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        Tensor { data, shape }
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
