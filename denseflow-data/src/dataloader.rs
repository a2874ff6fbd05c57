// denseflow-data/src/dataloader.rs

//! # DataLoader
//!
//! Groups `(features, targets)` samples into batches. Each sample is a pair
//! of `[1, n]` rows; a batch stacks them into `[batch, n]` tensors that a
//! [`Network`](denseflow_core::model::Network) consumes directly.
//!
//! ```
//! use denseflow_data::{DataLoader, SequentialSampler, TensorDataset};
//!
//! let dataset = TensorDataset::from_rows(
//!     &[vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
//!     &[vec![1.0], vec![1.0], vec![0.0]],
//! )
//! .unwrap();
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new()).unwrap();
//! let batches: Vec<_> = loader.iter().collect::<Result<_, _>>().unwrap();
//! assert_eq!(batches[0].0.shape(), &[2, 2]);
//! assert_eq!(batches[1].0.shape(), &[1, 2]);
//! ```

use crate::datasets::Dataset;
use crate::error::DataError;
use crate::samplers::Sampler;
use denseflow_core::{DenseFlowError, Tensor};
use log::debug;

/// A stacked `(features, targets)` batch.
pub type Batch = (Tensor, Tensor);

/// Batches a dataset in the order chosen by a [`Sampler`].
#[derive(Debug)]
pub struct DataLoader<D, S> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D, S> DataLoader<D, S>
where
    D: Dataset<Item = (Tensor, Tensor)>,
    S: Sampler,
{
    /// # Errors
    /// `DataError::InvalidBatchSize` if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, sampler: S) -> Result<Self, DataError> {
        if batch_size == 0 {
            return Err(DataError::InvalidBatchSize);
        }
        Ok(DataLoader {
            dataset,
            batch_size,
            sampler,
            drop_last: false,
        })
    }

    /// Skips the final batch when it holds fewer than `batch_size` samples.
    pub fn with_drop_last(mut self, drop_last: bool) -> Self {
        self.drop_last = drop_last;
        self
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let len = self.dataset.len();
        if self.drop_last {
            len / self.batch_size
        } else {
            len.div_ceil(self.batch_size)
        }
    }

    /// Starts a new epoch. The sampler is asked for a fresh ordering.
    pub fn iter(&self) -> BatchIter<'_, D> {
        let indices = self.sampler.indices(self.dataset.len());
        debug!(
            "DataLoader: epoch of {} samples in batches of {}",
            indices.len(),
            self.batch_size
        );
        BatchIter {
            dataset: &self.dataset,
            indices,
            position: 0,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }

    /// Collects one epoch into parallel lists of input and target batches.
    pub fn epoch(&self) -> Result<(Vec<Tensor>, Vec<Tensor>), DataError> {
        let mut inputs = Vec::with_capacity(self.num_batches());
        let mut targets = Vec::with_capacity(self.num_batches());
        for batch in self.iter() {
            let (x, y) = batch?;
            inputs.push(x);
            targets.push(y);
        }
        Ok((inputs, targets))
    }
}

/// Iterator over the batches of one epoch.
pub struct BatchIter<'a, D> {
    dataset: &'a D,
    indices: Vec<usize>,
    position: usize,
    batch_size: usize,
    drop_last: bool,
}

impl<'a, D> Iterator for BatchIter<'a, D>
where
    D: Dataset<Item = (Tensor, Tensor)>,
{
    type Item = Result<Batch, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.indices.len() - self.position;
        if remaining == 0 || (self.drop_last && remaining < self.batch_size) {
            return None;
        }
        let end = self.position + remaining.min(self.batch_size);
        let chunk = &self.indices[self.position..end];
        self.position = end;

        let mut samples = Vec::with_capacity(chunk.len());
        for &index in chunk {
            match self.dataset.get(index) {
                Ok(sample) => samples.push(sample),
                Err(e) => return Some(Err(e)),
            }
        }
        Some(collate(&samples))
    }
}

/// Stacks `[1, n]` rows into one `[rows, n]` tensor.
///
/// # Errors
/// `DataError::Empty` for no rows; a core `ShapeMismatch` if a row is not
/// `[1, n]` with the same `n` as the first.
pub fn stack_rows(rows: &[Tensor]) -> Result<Tensor, DataError> {
    let first = rows.first().ok_or(DataError::Empty)?;
    let width = first.numel();
    let mut data = Vec::with_capacity(rows.len() * width);
    for row in rows {
        if row.shape() != [1, width] {
            return Err(DenseFlowError::ShapeMismatch {
                expected: vec![1, width],
                actual: row.shape().to_vec(),
                operation: "stack_rows".to_string(),
            }
            .into());
        }
        data.extend_from_slice(row.data());
    }
    Ok(Tensor::new(data, vec![rows.len(), width])?)
}

fn collate(samples: &[(Tensor, Tensor)]) -> Result<Batch, DataError> {
    let (features, targets): (Vec<Tensor>, Vec<Tensor>) = samples.iter().cloned().unzip();
    Ok((stack_rows(&features)?, stack_rows(&targets)?))
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
