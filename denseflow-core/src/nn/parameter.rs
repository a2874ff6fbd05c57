use crate::error::{DenseFlowError, Result};
use crate::tensor::Tensor;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

static NEXT_PARAM_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identity of a [`Parameter`]. Gradients are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(usize);

impl ParamId {
    fn next() -> Self {
        ParamId(NEXT_PARAM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "param#{}", self.0)
    }
}

/// Role of a parameter inside its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Weight,
    Bias,
}

/// A learnable tensor shared between the layer that owns it and the
/// optimizer that updates it.
///
/// Cloning a `Parameter` yields another handle to the same tensor with the
/// same [`ParamId`]; writes through one handle are visible through all.
#[derive(Debug, Clone)]
pub struct Parameter {
    id: ParamId,
    kind: ParamKind,
    tensor: Arc<RwLock<Tensor>>,
}

impl Parameter {
    /// Wraps `tensor` in a new parameter with a fresh id.
    pub fn new(tensor: Tensor, kind: ParamKind) -> Self {
        Parameter {
            id: ParamId::next(),
            kind,
            tensor: Arc::new(RwLock::new(tensor)),
        }
    }

    pub fn id(&self) -> ParamId {
        self.id
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Acquires a read guard on the underlying tensor.
    ///
    /// # Errors
    /// `DenseFlowError::LockError` if the lock is poisoned.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Tensor>> {
        self.tensor.read().map_err(|e| DenseFlowError::LockError {
            lock_type: "read".to_string(),
            reason: format!("parameter {}: {}", self.id, e),
        })
    }

    /// Acquires a write guard on the underlying tensor.
    ///
    /// # Errors
    /// `DenseFlowError::LockError` if the lock is poisoned.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Tensor>> {
        self.tensor.write().map_err(|e| DenseFlowError::LockError {
            lock_type: "write".to_string(),
            reason: format!("parameter {}: {}", self.id, e),
        })
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> Result<Tensor> {
        Ok(self.read()?.clone())
    }

    pub fn shape(&self) -> Result<Vec<usize>> {
        Ok(self.read()?.shape().to_vec())
    }

    /// True when both handles point at the same tensor.
    pub fn ptr_eq(&self, other: &Parameter) -> bool {
        Arc::ptr_eq(&self.tensor, &other.tensor)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
