use crate::nn::parameter::ParamId;
use crate::tensor::Tensor;
use std::collections::HashMap;

/// Gradient storage for one backward pass.
///
/// Holds one tensor per parameter, keyed by [`ParamId`], and a separate slot
/// for the gradient with respect to the network input. Setters do not
/// validate shapes.
#[derive(Debug, Default, Clone)]
pub struct Gradients {
    params: HashMap<ParamId, Tensor>,
    input: Option<Tensor>,
}

impl Gradients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ParamId) -> Option<&Tensor> {
        self.params.get(&id)
    }

    pub fn set(&mut self, id: ParamId, grad: Tensor) {
        self.params.insert(id, grad);
    }

    pub fn remove(&mut self, id: ParamId) -> Option<Tensor> {
        self.params.remove(&id)
    }

    /// Gradient with respect to the input of the last backward pass.
    pub fn input_grad(&self) -> Option<&Tensor> {
        self.input.as_ref()
    }

    pub fn set_input_grad(&mut self, grad: Tensor) {
        self.input = Some(grad);
    }

    /// Number of parameter gradients held.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Drops every stored gradient, including the input slot.
    pub fn clear(&mut self) {
        self.params.clear();
        self.input = None;
    }
}
