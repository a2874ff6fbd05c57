// denseflow-data/src/datasets/tensor_dataset.rs

use super::traits::Dataset;
use crate::csv::rows_to_tensors;
use crate::error::DataError;
use denseflow_core::Tensor;

/// Pairs of `(features, targets)` rows, each a `[1, n]` tensor.
#[derive(Debug, Clone)]
pub struct TensorDataset {
    features: Vec<Tensor>,
    targets: Vec<Tensor>,
}

impl TensorDataset {
    /// # Errors
    /// `DataError::LengthMismatch` if the two lists differ in length.
    pub fn new(features: Vec<Tensor>, targets: Vec<Tensor>) -> Result<Self, DataError> {
        if features.len() != targets.len() {
            return Err(DataError::LengthMismatch {
                features: features.len(),
                targets: targets.len(),
            });
        }
        Ok(TensorDataset { features, targets })
    }

    /// Builds a dataset from parsed CSV rows.
    pub fn from_rows(features: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Self, DataError> {
        Self::new(rows_to_tensors(features)?, rows_to_tensors(targets)?)
    }

    pub fn features(&self) -> &[Tensor] {
        &self.features
    }

    pub fn targets(&self) -> &[Tensor] {
        &self.targets
    }
}

impl Dataset for TensorDataset {
    type Item = (Tensor, Tensor);

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        match (self.features.get(index), self.targets.get(index)) {
            (Some(x), Some(y)) => Ok((x.clone(), y.clone())),
            _ => Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.features.len()
    }
}

#[cfg(test)]
#[path = "tensor_dataset_test.rs"]
mod tests;
