use crate::error::{DenseFlowError, Result};
use crate::nn::{Gradients, Parameter};
use crate::ops::{add_op, require_operand, scale_op};
use crate::optim::optimizer_trait::Optimizer;
use crate::tensor::{same_shape, zeros_like, Tensor};
use log::debug;

/// Stochastic gradient descent: `param = param - lr * grad`.
///
/// Each parameter is updated from its own gradient.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    lr: f64,
}

impl Sgd {
    /// Creates an optimizer over `params` with a fixed learning rate.
    ///
    /// # Errors
    /// `DenseFlowError::InvalidConfig` if `lr` is not a positive finite number.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Result<Self> {
        if !(lr.is_finite() && lr > 0.0) {
            return Err(DenseFlowError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                lr
            )));
        }
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for Sgd {
    /// Every gradient is checked before any parameter is written, so a
    /// failing step leaves all parameters unchanged.
    ///
    /// # Errors
    /// - `DenseFlowError::NilOperand` if a parameter has no gradient.
    /// - `DenseFlowError::ShapeMismatch` if a gradient's shape differs from
    ///   its parameter's.
    fn step(&mut self, grads: &Gradients) -> Result<()> {
        let mut updates: Vec<Tensor> = Vec::with_capacity(self.params.len());
        for param in &self.params {
            let grad = require_operand(grads.get(param.id()), "Sgd::step")?;
            let current = param.read()?;
            if !same_shape(&current, grad) {
                return Err(DenseFlowError::ShapeMismatch {
                    expected: current.shape().to_vec(),
                    actual: grad.shape().to_vec(),
                    operation: "Sgd::step".to_string(),
                });
            }
            updates.push(add_op(&current, &scale_op(grad, -self.lr))?);
        }
        for (param, updated) in self.params.iter().zip(updates) {
            *param.write()? = updated;
        }
        debug!("Sgd::step: updated {} parameters (lr={})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self, grads: &mut Gradients) -> Result<()> {
        for param in &self.params {
            let zeros = zeros_like(&*param.read()?);
            grads.set(param.id(), zeros);
        }
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
