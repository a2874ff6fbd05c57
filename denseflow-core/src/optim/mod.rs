// src/optim/mod.rs

//! Optimizers for training networks.
//!
//! Provides the [`Optimizer`] trait and plain stochastic gradient descent.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
