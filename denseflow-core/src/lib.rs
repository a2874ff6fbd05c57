//! # denseflow-core
//!
//! A small `f64` tensor library for training fully-connected networks with
//! hand-written backpropagation.
//!
//! - [`tensor`]: the [`Tensor`] type, shapes and position encoding.
//! - [`ops`]: element-wise, linear-algebra and reduction operations.
//! - [`nn`]: parameters, the [`Gradients`](nn::Gradients) context, the dense
//!   layer, activations and losses.
//! - [`model`]: the layer stack ([`Network`](model::Network)).
//! - [`optim`]: the [`Optimizer`](optim::Optimizer) trait and SGD.
//! - [`train`]: configuration and the training loop.

pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod train;
pub mod utils;

pub use error::{DenseFlowError, Result};
pub use tensor::Tensor;
