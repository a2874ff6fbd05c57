use crate::error::{DenseFlowError, Result};
use crate::tensor::shape::checked_numel;
use crate::tensor::Tensor;

/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Maps multi-dimensional coordinates to a flat row-major offset.
///
/// # Errors
/// `DenseFlowError::IndexOutOfBounds` if `coords` and `shape` differ in length,
/// any coordinate is not within `[0, shape[i])`, or the shape's element count
/// overflows `usize`.
pub fn encode_position(coords: &[usize], shape: &[usize]) -> Result<usize> {
    let out_of_bounds = || DenseFlowError::IndexOutOfBounds {
        index: coords.to_vec(),
        shape: shape.to_vec(),
    };
    if coords.len() != shape.len() || checked_numel(shape).is_none() {
        return Err(out_of_bounds());
    }
    let mut index = 0;
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        if coords[i] >= shape[i] {
            return Err(out_of_bounds());
        }
        index += coords[i] * stride;
        stride *= shape[i];
    }
    Ok(index)
}

/// Inverse of [`encode_position`].
///
/// # Errors
/// `DenseFlowError::FlatIndexOutOfBounds` if `index >= product(shape)` or the
/// product overflows `usize`.
pub fn decode_position(index: usize, shape: &[usize]) -> Result<Vec<usize>> {
    let in_range = match checked_numel(shape) {
        Some(numel) => !shape.is_empty() && index < numel,
        None => false,
    };
    if !in_range {
        return Err(DenseFlowError::FlatIndexOutOfBounds {
            index,
            shape: shape.to_vec(),
        });
    }
    let strides = calculate_strides(shape);
    Ok(strides
        .iter()
        .zip(shape.iter())
        .map(|(stride, dim)| (index / stride) % dim)
        .collect())
}

/// True when both tensors have the same rank and dimensions.
pub fn same_shape(a: &Tensor, b: &Tensor) -> bool {
    a.shape() == b.shape()
}

/// Like [`same_shape`], but an absent side never matches, not even another
/// absent side.
pub fn same_shape_opt(a: Option<&Tensor>, b: Option<&Tensor>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_shape(a, b),
        _ => false,
    }
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
