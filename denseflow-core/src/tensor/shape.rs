// src/tensor/shape.rs

use crate::error::{DenseFlowError, Result};
use crate::tensor::utils::calculate_strides;
use std::fmt;

/// A validated tensor shape: never empty, every dimension positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape(pub(crate) Vec<usize>);

/// Closed set of rank variants that operations dispatch on.
///
/// Linear-algebra operations (`dot`, `transpose`, per-row reductions) only
/// accept the `Matrix` variant; elementwise operations accept all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Rank 1: `[len]`.
    Vector { len: usize },
    /// Rank 2: `[rows, cols]`.
    Matrix { rows: usize, cols: usize },
    /// Rank 3 or more.
    Higher { rank: usize },
}

impl Shape {
    /// Validates `dims` and wraps them.
    ///
    /// # Errors
    /// Returns `DenseFlowError::InvalidShape` if `dims` is empty, contains a
    /// zero, or describes more elements than fit in a `usize`.
    pub fn new(dims: Vec<usize>) -> Result<Self> {
        if dims.is_empty() || dims.contains(&0) || checked_numel(&dims).is_none() {
            return Err(DenseFlowError::InvalidShape { shape: dims });
        }
        Ok(Shape(dims))
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements described by this shape.
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Row-major strides, last stride is 1.
    pub fn strides(&self) -> Vec<usize> {
        calculate_strides(&self.0)
    }

    pub fn kind(&self) -> ShapeKind {
        match self.0.as_slice() {
            [len] => ShapeKind::Vector { len: *len },
            [rows, cols] => ShapeKind::Matrix {
                rows: *rows,
                cols: *cols,
            },
            dims => ShapeKind::Higher { rank: dims.len() },
        }
    }

    /// Returns `(rows, cols)` for a rank-2 shape.
    ///
    /// # Errors
    /// `DenseFlowError::UnsupportedShape` naming `operation` for any other rank.
    pub fn as_matrix(&self, operation: &str) -> Result<(usize, usize)> {
        match self.kind() {
            ShapeKind::Matrix { rows, cols } => Ok((rows, cols)),
            _ => Err(DenseFlowError::UnsupportedShape {
                rank: self.rank(),
                operation: operation.to_string(),
            }),
        }
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

/// Product of `dims`, or `None` on overflow.
pub(crate) fn checked_numel(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = DenseFlowError;

    fn try_from(dims: Vec<usize>) -> Result<Self> {
        Shape::new(dims)
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = DenseFlowError;

    fn try_from(dims: &[usize]) -> Result<Self> {
        Shape::new(dims.to_vec())
    }
}
