// src/nn/losses/mse.rs

use crate::error::Result;
use crate::nn::losses::Loss;
use crate::ops::{mean_all_op, scale_op, square_op, sub_op};
use crate::tensor::Tensor;

/// Mean squared error.
///
/// - loss: `mean(square(pred - target))` over every element.
/// - gradient: `(pred - target) * 2 / N` with `N = target.numel()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss;

impl Loss for MseLoss {
    fn loss(&self, predictions: &Tensor, targets: &Tensor) -> Result<Tensor> {
        let diff = sub_op(predictions, targets)?;
        Ok(mean_all_op(&square_op(&diff)))
    }

    fn gradient(&self, predictions: &Tensor, targets: &Tensor) -> Result<Tensor> {
        let diff = sub_op(predictions, targets)?;
        Ok(scale_op(&diff, 2.0 / targets.numel() as f64))
    }

    fn name(&self) -> &'static str {
        "mse"
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
