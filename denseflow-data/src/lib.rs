//! # denseflow-data
//!
//! Loading numeric CSV files into [`Tensor`](denseflow_core::Tensor) rows,
//! pairing them into datasets and batching them for training.

pub mod csv;
pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod samplers;

pub use crate::csv::{load_csv, parse_csv, rows_to_matrix, rows_to_tensors};
pub use dataloader::DataLoader;
pub use datasets::{Dataset, TensorDataset};
pub use error::DataError;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
