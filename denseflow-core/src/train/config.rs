use crate::error::{DenseFlowError, Result};
use crate::nn::{Activation, LossKind};

/// Hyperparameters of a training run.
///
/// Built with [`TrainConfig::new`] and the `with_*` setters, then checked
/// with [`TrainConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub layer_sizes: Vec<usize>,
    pub loss: LossKind,
    pub activation: Activation,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Epoch progress is logged every `log_interval` epochs.
    pub log_interval: usize,
    /// Seed for weight initialisation; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl TrainConfig {
    pub fn new(layer_sizes: Vec<usize>) -> Self {
        TrainConfig {
            layer_sizes,
            loss: LossKind::Mse,
            activation: Activation::Sigmoid,
            learning_rate: 0.1,
            epochs: 100,
            log_interval: 10,
            seed: None,
        }
    }

    pub fn with_loss(mut self, loss: LossKind) -> Self {
        self.loss = loss;
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    /// `DenseFlowError::InvalidConfig` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.layer_sizes.len() < 2 {
            return Err(DenseFlowError::InvalidConfig(format!(
                "layer_sizes needs at least two entries, got {:?}",
                self.layer_sizes
            )));
        }
        if self.layer_sizes.contains(&0) {
            return Err(DenseFlowError::InvalidConfig(format!(
                "layer_sizes must be positive, got {:?}",
                self.layer_sizes
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(DenseFlowError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(DenseFlowError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        if self.log_interval == 0 {
            return Err(DenseFlowError::InvalidConfig(
                "log_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TrainConfig;
    use crate::error::DenseFlowError;
    use crate::nn::{Activation, LossKind};

    #[test]
    fn test_builder_and_defaults() {
        let config = TrainConfig::new(vec![2, 4, 1])
            .with_loss(LossKind::LogLoss)
            .with_activation(Activation::Relu)
            .with_learning_rate(0.05)
            .with_epochs(3)
            .with_seed(9);
        assert_eq!(config.loss, LossKind::LogLoss);
        assert_eq!(config.activation, Activation::Relu);
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.epochs, 3);
        assert_eq!(config.log_interval, 10);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_bad_field() {
        let bad = [
            TrainConfig::new(vec![2]),
            TrainConfig::new(vec![2, 0, 1]),
            TrainConfig::new(vec![2, 1]).with_learning_rate(0.0),
            TrainConfig::new(vec![2, 1]).with_learning_rate(f64::NAN),
            TrainConfig::new(vec![2, 1]).with_epochs(0),
            TrainConfig::new(vec![2, 1]).with_log_interval(0),
        ];
        for config in bad.iter() {
            assert!(
                matches!(config.validate(), Err(DenseFlowError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
