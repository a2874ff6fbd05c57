//! Loss functions.
//!
//! Every loss returns a `[1, 1]` tensor from [`Loss::loss`] and a tensor with
//! the predictions' shape from [`Loss::gradient`].

pub mod log_loss;
pub mod mse;

pub use log_loss::LogLoss;
pub use mse::MseLoss;

use crate::error::{DenseFlowError, Result};
use crate::tensor::{same_shape, Tensor};
use std::fmt;
use std::str::FromStr;

pub trait Loss: fmt::Debug + Send + Sync {
    /// Scalar loss of `predictions` against `targets`, as `[1, 1]`.
    fn loss(&self, predictions: &Tensor, targets: &Tensor) -> Result<Tensor>;

    /// Gradient of [`Loss::loss`] with respect to `predictions`.
    fn gradient(&self, predictions: &Tensor, targets: &Tensor) -> Result<Tensor>;

    fn name(&self) -> &'static str;
}

/// Selects a loss by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossKind {
    #[default]
    Mse,
    LogLoss,
}

impl LossKind {
    pub fn build(&self) -> Box<dyn Loss> {
        match self {
            LossKind::Mse => Box::new(MseLoss),
            LossKind::LogLoss => Box::new(LogLoss),
        }
    }
}

impl fmt::Display for LossKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossKind::Mse => f.write_str("mse"),
            LossKind::LogLoss => f.write_str("logloss"),
        }
    }
}

impl FromStr for LossKind {
    type Err = DenseFlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mse" => Ok(LossKind::Mse),
            "logloss" | "log_loss" | "bce" => Ok(LossKind::LogLoss),
            other => Err(DenseFlowError::InvalidConfig(format!(
                "unknown loss '{}'",
                other
            ))),
        }
    }
}

fn check_same_shape(predictions: &Tensor, targets: &Tensor, operation: &str) -> Result<()> {
    if same_shape(predictions, targets) {
        Ok(())
    } else {
        Err(DenseFlowError::ShapeMismatch {
            expected: targets.shape().to_vec(),
            actual: predictions.shape().to_vec(),
            operation: operation.to_string(),
        })
    }
}
