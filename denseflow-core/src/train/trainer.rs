// src/train/trainer.rs

use crate::error::{DenseFlowError, Result};
use crate::model::Network;
use crate::nn::{Gradients, Loss};
use crate::optim::{Optimizer, Sgd};
use crate::tensor::{same_shape, Tensor};
use crate::train::config::TrainConfig;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Loss summary of one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Mean of the per-batch losses.
    pub mean_loss: f64,
}

/// Owns a network, its loss, an SGD optimizer and the gradient context, and
/// runs forward, loss, backward, step and zero-grad for every batch.
#[derive(Debug)]
pub struct Trainer {
    config: TrainConfig,
    network: Network,
    loss: Box<dyn Loss>,
    optimizer: Sgd,
    grads: Gradients,
}

impl Trainer {
    /// Validates `config` and builds the network it describes.
    pub fn new(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        let network = match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Network::with_rng(&config.layer_sizes, config.activation, &mut rng)?
            }
            None => Network::new(&config.layer_sizes, config.activation)?,
        };
        Self::with_network(config, network)
    }

    /// Uses an existing network instead of a freshly initialised one.
    pub fn with_network(config: TrainConfig, network: Network) -> Result<Self> {
        config.validate()?;
        let optimizer = Sgd::new(network.parameters(), config.learning_rate)?;
        let loss = config.loss.build();
        let mut grads = Gradients::new();
        network.zero_grad(&mut grads)?;
        Ok(Trainer {
            config,
            network,
            loss,
            optimizer,
            grads,
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    /// One optimisation step on a single batch. Returns the batch loss.
    pub fn train_batch(&mut self, inputs: &Tensor, targets: &Tensor) -> Result<f64> {
        let predictions = self.network.forward(inputs)?;
        let loss = self.loss.loss(&predictions, targets)?.item()?;
        let d_loss = self.loss.gradient(&predictions, targets)?;
        self.network.backward(&d_loss, &mut self.grads)?;
        self.optimizer.step(&self.grads)?;
        self.optimizer.zero_grad(&mut self.grads)?;
        Ok(loss)
    }

    /// Runs one pass over `(inputs[i], targets[i])` pairs.
    ///
    /// # Errors
    /// `DenseFlowError::InvalidConfig` if the slices differ in length or are
    /// empty.
    pub fn train_epoch(&mut self, inputs: &[Tensor], targets: &[Tensor]) -> Result<f64> {
        check_pairs(inputs, targets)?;
        check_non_empty(inputs)?;
        let mut total = 0.0;
        for (x, y) in inputs.iter().zip(targets) {
            total += self.train_batch(x, y)?;
        }
        Ok(total / inputs.len() as f64)
    }

    /// Trains for `config.epochs` epochs, logging every `log_interval`
    /// epochs and after the last one.
    pub fn fit(&mut self, inputs: &[Tensor], targets: &[Tensor]) -> Result<Vec<EpochStats>> {
        check_pairs(inputs, targets)?;
        if inputs.is_empty() {
            warn!("Trainer::fit called with an empty training set");
            return Ok(Vec::new());
        }
        info!(
            "Training {:?} ({} activation, {} loss, lr={}) for {} epochs on {} batches",
            self.config.layer_sizes,
            self.config.activation,
            self.config.loss,
            self.config.learning_rate,
            self.config.epochs,
            inputs.len()
        );
        let mut history = Vec::with_capacity(self.config.epochs);
        for epoch in 1..=self.config.epochs {
            let mean_loss = self.train_epoch(inputs, targets)?;
            if !mean_loss.is_finite() {
                warn!("Epoch {}: loss is {}, training diverged", epoch, mean_loss);
            }
            if epoch % self.config.log_interval == 0 || epoch == self.config.epochs {
                info!("Epoch {}/{}: loss {:.6}", epoch, self.config.epochs, mean_loss);
            } else {
                debug!("Epoch {}: loss {:.6}", epoch, mean_loss);
            }
            history.push(EpochStats { epoch, mean_loss });
        }
        Ok(history)
    }

    /// Mean loss over `(inputs[i], targets[i])` pairs without updating
    /// anything.
    pub fn evaluate(&mut self, inputs: &[Tensor], targets: &[Tensor]) -> Result<f64> {
        check_pairs(inputs, targets)?;
        check_non_empty(inputs)?;
        let mut total = 0.0;
        for (x, y) in inputs.iter().zip(targets) {
            let predictions = self.network.forward(x)?;
            total += self.loss.loss(&predictions, y)?.item()?;
        }
        Ok(total / inputs.len() as f64)
    }

    /// Fraction of output elements on the same side of `threshold` as their
    /// target, for binary classification.
    pub fn binary_accuracy(
        &mut self,
        inputs: &[Tensor],
        targets: &[Tensor],
        threshold: f64,
    ) -> Result<f64> {
        check_pairs(inputs, targets)?;
        check_non_empty(inputs)?;
        let mut correct = 0usize;
        let mut total = 0usize;
        for (x, y) in inputs.iter().zip(targets) {
            let predictions = self.network.forward(x)?;
            if !same_shape(&predictions, y) {
                return Err(DenseFlowError::ShapeMismatch {
                    expected: y.shape().to_vec(),
                    actual: predictions.shape().to_vec(),
                    operation: "Trainer::binary_accuracy".to_string(),
                });
            }
            correct += predictions
                .data()
                .iter()
                .zip(y.data())
                .filter(|&(&p, &t)| (p > threshold) == (t > threshold))
                .count();
            total += y.numel();
        }
        Ok(correct as f64 / total as f64)
    }

    pub fn predict(&mut self, inputs: &Tensor) -> Result<Tensor> {
        self.network.forward(inputs)
    }
}

fn check_pairs(inputs: &[Tensor], targets: &[Tensor]) -> Result<()> {
    if inputs.len() != targets.len() {
        return Err(DenseFlowError::InvalidConfig(format!(
            "{} input batches but {} target batches",
            inputs.len(),
            targets.len()
        )));
    }
    Ok(())
}

fn check_non_empty(inputs: &[Tensor]) -> Result<()> {
    if inputs.is_empty() {
        return Err(DenseFlowError::InvalidConfig(
            "no batches to process".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
