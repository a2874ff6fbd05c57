// src/nn/mod.rs

//! Neural-network building blocks: parameters, the gradient context, layers,
//! activations and losses.

pub mod activation;
pub mod gradients;
pub mod layers;
pub mod losses;
pub mod parameter;

pub use activation::Activation;
pub use gradients::Gradients;
pub use layers::Dense;
pub use losses::{Loss, LossKind, LogLoss, MseLoss};
pub use parameter::{ParamId, ParamKind, Parameter};
