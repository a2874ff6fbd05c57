// src/model/network.rs

use crate::error::{DenseFlowError, Result};
use crate::nn::{Activation, Dense, Gradients, ParamKind, Parameter};
use crate::ops::mul_op;
use crate::tensor::Tensor;
use log::debug;
use rand::Rng;

/// An ordered stack of [`Dense`] layers with one activation applied after
/// every layer.
///
/// Layer `i`'s `out_features` always equals layer `i + 1`'s `in_features`.
#[derive(Debug)]
pub struct Network {
    layers: Vec<Dense>,
    activation: Activation,
    // Pre-activations of the last forward pass, one per layer.
    pre_activations: Vec<Tensor>,
}

impl Network {
    /// Builds one randomly initialised layer per consecutive pair of widths.
    ///
    /// `[2, 8, 1]` gives a `2 -> 8` layer followed by an `8 -> 1` layer.
    ///
    /// # Errors
    /// `DenseFlowError::InvalidConfig` if fewer than two widths are given or
    /// any width is zero.
    pub fn new(layer_sizes: &[usize], activation: Activation) -> Result<Self> {
        Self::with_rng(layer_sizes, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        layer_sizes: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self> {
        if layer_sizes.len() < 2 {
            return Err(DenseFlowError::InvalidConfig(format!(
                "a network needs at least two layer sizes, got {:?}",
                layer_sizes
            )));
        }
        if layer_sizes.contains(&0) {
            return Err(DenseFlowError::InvalidConfig(format!(
                "layer sizes must be positive, got {:?}",
                layer_sizes
            )));
        }
        let layers = layer_sizes
            .windows(2)
            .map(|pair| Dense::with_rng(pair[0], pair[1], rng))
            .collect::<Result<Vec<_>>>()?;
        Self::from_layers(layers, activation)
    }

    /// Assembles a network from existing layers.
    ///
    /// # Errors
    /// `DenseFlowError::InvalidConfig` if `layers` is empty or two adjacent
    /// layers do not chain.
    pub fn from_layers(layers: Vec<Dense>, activation: Activation) -> Result<Self> {
        if layers.is_empty() {
            return Err(DenseFlowError::InvalidConfig(
                "a network needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].out_features() != pair[1].in_features() {
                return Err(DenseFlowError::InvalidConfig(format!(
                    "layer {} outputs {} features but layer {} expects {}",
                    i,
                    pair[0].out_features(),
                    i + 1,
                    pair[1].in_features()
                )));
            }
        }
        Ok(Network {
            layers,
            activation,
            pre_activations: Vec::new(),
        })
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn in_features(&self) -> usize {
        self.layers[0].in_features()
    }

    pub fn out_features(&self) -> usize {
        self.layers[self.layers.len() - 1].out_features()
    }

    /// Runs every layer followed by the activation.
    ///
    /// The first failing layer's error is returned unchanged.
    pub fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        self.pre_activations.clear();
        let mut current = x.clone();
        for layer in self.layers.iter_mut() {
            let z = layer.forward(&current)?;
            current = self.activation.apply(&z);
            self.pre_activations.push(z);
        }
        Ok(current)
    }

    /// Back-propagates `d_loss` through the layers in reverse order.
    ///
    /// Each layer writes its parameter gradients into `grads`. The gradient
    /// with respect to the network input is stored in the input slot of
    /// `grads` and returned.
    ///
    /// # Errors
    /// `DenseFlowError::NilOperand` if no forward pass has completed.
    pub fn backward(&mut self, d_loss: &Tensor, grads: &mut Gradients) -> Result<Tensor> {
        if self.pre_activations.len() != self.layers.len() {
            return Err(DenseFlowError::NilOperand {
                operation: "Network::backward".to_string(),
            });
        }
        let mut grad = d_loss.clone();
        for (i, (layer, z)) in self
            .layers
            .iter()
            .zip(self.pre_activations.iter())
            .enumerate()
            .rev()
        {
            let local = self.activation.derivative(z);
            grad = mul_op(&grad, &local)?;
            grad = layer.backward(&grad, grads)?;
            debug!("Network::backward: layer {} done", i);
        }
        grads.set_input_grad(grad.clone());
        Ok(grad)
    }

    /// Zeroes the gradients of every parameter.
    pub fn zero_grad(&self, grads: &mut Gradients) -> Result<()> {
        for layer in &self.layers {
            layer.zero_grad(grads)?;
        }
        Ok(())
    }

    /// `[w1, b1, w2, b2, ...]`.
    pub fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(Dense::parameters).collect()
    }

    /// Parameters named `layer{i}.weight` / `layer{i}.bias`.
    pub fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer.parameters().into_iter().map(move |param| {
                    let suffix = match param.kind() {
                        ParamKind::Weight => "weight",
                        ParamKind::Bias => "bias",
                    };
                    (format!("layer{}.{}", i, suffix), param)
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
