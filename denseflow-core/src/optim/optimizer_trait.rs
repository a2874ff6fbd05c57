use crate::error::Result;
use crate::nn::Gradients;

/// Common interface of all optimizers.
///
/// Optimizers hold handles to the parameters they update. Gradients are read
/// from a [`Gradients`] context filled by the backward pass.
pub trait Optimizer {
    /// Applies one update to every managed parameter.
    ///
    /// Gradients are left untouched; call [`Optimizer::zero_grad`] before the
    /// next backward pass.
    fn step(&mut self, grads: &Gradients) -> Result<()>;

    /// Resets the gradient of every managed parameter to zeros.
    fn zero_grad(&mut self, grads: &mut Gradients) -> Result<()>;

    fn learning_rate(&self) -> f64;
}
