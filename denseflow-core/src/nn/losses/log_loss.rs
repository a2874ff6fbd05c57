// src/nn/losses/log_loss.rs

use crate::error::{DenseFlowError, Result};
use crate::nn::losses::{check_same_shape, Loss};
use crate::tensor::Tensor;

/// Bound used to keep `ln` and the gradient's denominator finite.
const EPSILON: f64 = 1e-12;

/// Binary cross-entropy for probabilities in `[0, 1]`.
///
/// Both predictions and targets must lie in `[0, 1]`. Predictions are
/// clamped to `[1e-12, 1 - 1e-12]` before taking logarithms.
///
/// The clamp only affects `p` below `1e-12` or above `1 - 1e-12`. At the
/// extremes `p == 0` and `p == 1` the results differ from the unclamped
/// formula `-y ln p - (1 - y) ln(1 - p)`:
///
/// - a wrong extreme (`p = 0, y = 1` or `p = 1, y = 0`) gives about `27.6`
///   per element instead of infinity, with a gradient near `±1e12 / N`
///   instead of an infinite one;
/// - a right extreme (`p = 0, y = 0` or `p = 1, y = 1`) gives about `1e-12`
///   and a gradient near `±1 / N` instead of `NaN` from `0 * ln 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLoss;

impl LogLoss {
    fn validate(predictions: &Tensor, targets: &Tensor, operation: &str) -> Result<()> {
        check_same_shape(predictions, targets, operation)?;
        let out_of_domain = predictions
            .data()
            .iter()
            .chain(targets.data())
            .find(|v| !(0.0..=1.0).contains(*v));
        match out_of_domain {
            Some(&value) => Err(DenseFlowError::DomainError {
                value,
                domain: "[0, 1]".to_string(),
                operation: operation.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn clamp(p: f64) -> f64 {
    p.clamp(EPSILON, 1.0 - EPSILON)
}

impl Loss for LogLoss {
    fn loss(&self, predictions: &Tensor, targets: &Tensor) -> Result<Tensor> {
        Self::validate(predictions, targets, "LogLoss::loss")?;
        let total: f64 = predictions
            .data()
            .iter()
            .zip(targets.data())
            .map(|(&p, &y)| {
                let p = clamp(p);
                -y * p.ln() - (1.0 - y) * (1.0 - p).ln()
            })
            .sum();
        Ok(Tensor::scalar(total / predictions.numel() as f64))
    }

    fn gradient(&self, predictions: &Tensor, targets: &Tensor) -> Result<Tensor> {
        Self::validate(predictions, targets, "LogLoss::gradient")?;
        let n = predictions.numel() as f64;
        let data: Vec<f64> = predictions
            .data()
            .iter()
            .zip(targets.data())
            .map(|(&p, &y)| {
                let p = clamp(p);
                (p - y) / (p * (1.0 - p)) / n
            })
            .collect();
        Tensor::from_shape(data, predictions.shape_info().clone())
    }

    fn name(&self) -> &'static str {
        "logloss"
    }
}

#[cfg(test)]
#[path = "log_loss_test.rs"]
mod tests;
