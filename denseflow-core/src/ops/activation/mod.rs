// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Element-wise non-linearities plus the local derivatives the network's
//! backward pass multiplies into the incoming gradient.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`sigmoid_op`]: Logistic sigmoid.

pub mod relu;
pub mod sigmoid;

pub use relu::{relu_derivative_op, relu_op};
pub use sigmoid::{sigmoid_derivative_op, sigmoid_op};
