// denseflow-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides the order in which a [`DataLoader`](crate::DataLoader) visits
/// dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// A fresh ordering of `0..dataset_len`. Each call starts a new epoch.
    fn indices(&self, dataset_len: usize) -> Vec<usize>;
}
