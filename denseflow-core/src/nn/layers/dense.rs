// src/nn/layers/dense.rs

use crate::error::{DenseFlowError, Result};
use crate::nn::gradients::Gradients;
use crate::nn::parameter::{ParamKind, Parameter};
use crate::ops::{add_op, dot_op, require_operand, sum_columns_op, transpose_op};
use crate::tensor::{random_with_rng, zeros_like, ShapeKind, Tensor};
use log::debug;
use rand::Rng;

/// Fully-connected layer computing `z = x · W + b`.
///
/// `W` has shape `[in_features, out_features]` and `b` has shape
/// `[1, out_features]`. The bias row is replicated for every sample of the
/// batch. The layer returns the pre-activation; activations are applied by
/// the enclosing [`Network`](crate::model::Network).
#[derive(Debug)]
pub struct Dense {
    weights: Parameter,
    bias: Parameter,
    cached_input: Option<Tensor>,
    in_features: usize,
    out_features: usize,
}

impl Dense {
    /// Creates a layer with weights and bias drawn uniformly from `[-1, 1)`.
    ///
    /// # Errors
    /// `DenseFlowError::InvalidShape` if either size is zero.
    pub fn new(in_features: usize, out_features: usize) -> Result<Self> {
        Self::with_rng(in_features, out_features, &mut rand::thread_rng())
    }

    /// Same as [`Dense::new`], drawing the initial values from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let weights = random_with_rng(&[in_features, out_features], rng)?;
        let bias = random_with_rng(&[1, out_features], rng)?;
        Self::from_tensors(weights, bias)
    }

    /// Builds a layer from explicit values.
    ///
    /// # Errors
    /// - `DenseFlowError::UnsupportedShape` if `weights` is not rank 2.
    /// - `DenseFlowError::ShapeMismatch` if `bias` is not `[1, out_features]`.
    pub fn from_tensors(weights: Tensor, bias: Tensor) -> Result<Self> {
        let (in_features, out_features) = weights.as_matrix("Dense::from_tensors")?;
        if bias.shape() != [1, out_features] {
            return Err(DenseFlowError::ShapeMismatch {
                expected: vec![1, out_features],
                actual: bias.shape().to_vec(),
                operation: "Dense::from_tensors".to_string(),
            });
        }
        Ok(Dense {
            weights: Parameter::new(weights, ParamKind::Weight),
            bias: Parameter::new(bias, ParamKind::Bias),
            cached_input: None,
            in_features,
            out_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn weights(&self) -> &Parameter {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Input seen by the last call to [`Dense::forward`].
    pub fn cached_input(&self) -> Option<&Tensor> {
        self.cached_input.as_ref()
    }

    /// Handles to `[weights, bias]`, in that order.
    pub fn parameters(&self) -> Vec<Parameter> {
        vec![self.weights.clone(), self.bias.clone()]
    }

    /// Computes the pre-activation for a `[batch, in_features]` input and
    /// caches a copy of the input for the backward pass.
    ///
    /// # Errors
    /// `DenseFlowError::ShapeMismatch` if `x` is not `[batch, in_features]`.
    pub fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        let batch = match x.shape_info().kind() {
            ShapeKind::Matrix { rows, cols } if cols == self.in_features => rows,
            _ => {
                return Err(DenseFlowError::ShapeMismatch {
                    expected: vec![x.shape()[0], self.in_features],
                    actual: x.shape().to_vec(),
                    operation: "Dense::forward".to_string(),
                })
            }
        };
        self.cached_input = Some(x.clone());

        let z = {
            let weights = self.weights.read()?;
            dot_op(x, &weights)?
        };
        let bias_rows = {
            let bias = self.bias.read()?;
            let data: Vec<f64> = bias
                .data()
                .iter()
                .copied()
                .cycle()
                .take(batch * self.out_features)
                .collect();
            Tensor::new(data, vec![batch, self.out_features])?
        };
        debug!(
            "Dense::forward: [{}, {}] -> [{}, {}]",
            batch, self.in_features, batch, self.out_features
        );
        add_op(&z, &bias_rows)
    }

    /// Stores `dW = xᵀ · dout` and `dB = Σ_rows dout` in `grads` and returns
    /// `dX = dout · Wᵀ`.
    ///
    /// # Errors
    /// - `DenseFlowError::NilOperand` if `forward` has not been called.
    /// - `DenseFlowError::ShapeMismatch` if `dout` is not rank 2 with
    ///   `out_features` columns, or its batch differs from the cached input.
    pub fn backward(&self, dout: &Tensor, grads: &mut Gradients) -> Result<Tensor> {
        let input = require_operand(self.cached_input.as_ref(), "Dense::backward")?;
        match dout.shape_info().kind() {
            ShapeKind::Matrix { cols, .. } if cols == self.out_features => {}
            _ => {
                return Err(DenseFlowError::ShapeMismatch {
                    expected: vec![input.shape()[0], self.out_features],
                    actual: dout.shape().to_vec(),
                    operation: "Dense::backward".to_string(),
                })
            }
        }

        let d_weights = dot_op(&transpose_op(input)?, dout)?;
        let mut d_bias = sum_columns_op(dout)?;
        d_bias.reshape(vec![1, self.out_features])?;
        let d_input = {
            let weights = self.weights.read()?;
            dot_op(dout, &transpose_op(&weights)?)?
        };

        debug!(
            "Dense::backward: dW {:?}, dB {:?}, dX {:?}",
            d_weights.shape(),
            d_bias.shape(),
            d_input.shape()
        );
        grads.set(self.weights.id(), d_weights);
        grads.set(self.bias.id(), d_bias);
        Ok(d_input)
    }

    /// Resets the weight and bias gradients to zero-filled tensors.
    pub fn zero_grad(&self, grads: &mut Gradients) -> Result<()> {
        for param in [&self.weights, &self.bias] {
            let zeros = zeros_like(&*param.read()?);
            grads.set(param.id(), zeros);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
