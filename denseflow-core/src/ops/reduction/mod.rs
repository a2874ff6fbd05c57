// src/ops/reduction/mod.rs

//! Reductions.
//!
//! Per-row reductions (`mean_op`, `max_op`, `min_op`) only accept rank-2
//! tensors and return a `[rows, 1]` column. `sum_columns_op` folds every
//! leading dimension into rows and returns `[1, last_dim]`. The `*_all_op`
//! functions collapse everything into a `[1, 1]` tensor.

pub mod max;
pub mod mean;
pub mod sum;

pub use max::{max_op, min_op};
pub use mean::{mean_all_op, mean_op};
pub use sum::{sum_all_op, sum_columns_op};

use crate::error::Result;
use crate::tensor::{Shape, Tensor};

/// Folds every row of a rank-2 tensor with `reduce`, producing `[rows, 1]`.
pub(crate) fn reduce_rows<F>(a: &Tensor, op_name: &str, reduce: F) -> Result<Tensor>
where
    F: Fn(&[f64]) -> f64,
{
    let (rows, cols) = a.as_matrix(op_name)?;
    let output_data: Vec<f64> = a.data().chunks(cols).map(reduce).collect();
    Ok(Tensor::from_parts_unchecked(output_data, Shape(vec![rows, 1])))
}
