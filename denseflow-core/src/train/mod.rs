//! Training driver: configuration plus the forward / loss / backward / step
//! loop.

pub mod config;
pub mod trainer;

pub use config::TrainConfig;
pub use trainer::{EpochStats, Trainer};
