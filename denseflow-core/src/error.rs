use thiserror::Error;

/// Custom error type for the denseflow framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DenseFlowError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Missing operand during operation {operation}")]
    NilOperand { operation: String },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Flat index {index} out of bounds for shape {shape:?}")]
    FlatIndexOutOfBounds { index: usize, shape: Vec<usize> },

    #[error("Value {value} outside of domain {domain} during operation {operation}")]
    DomainError {
        value: f64,
        domain: String,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid shape {shape:?}: shapes must be non-empty with positive dimensions and a representable element count")]
    InvalidShape { shape: Vec<usize> },

    #[error("Operation {operation} does not support tensors of rank {rank}")]
    UnsupportedShape { rank: usize, operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Lock error: failed to acquire {lock_type} lock: {reason}")]
    LockError { lock_type: String, reason: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DenseFlowError>;
