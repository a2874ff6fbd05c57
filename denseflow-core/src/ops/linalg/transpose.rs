use crate::error::Result;
use crate::tensor::Tensor;

/// Swaps rows and columns of a 2D tensor: `result[j, i] = t[i, j]`.
///
/// # Errors
/// `DenseFlowError::UnsupportedShape` for any rank other than 2.
pub fn transpose_op(t: &Tensor) -> Result<Tensor> {
    let (rows, cols) = t.as_matrix("transpose_op")?;
    let data = t.data();
    let mut transposed = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            transposed[j * rows + i] = data[i * cols + j];
        }
    }
    Tensor::new(transposed, vec![cols, rows])
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
