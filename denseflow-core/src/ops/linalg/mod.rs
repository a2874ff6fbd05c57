// src/ops/linalg/mod.rs

pub mod matmul;
pub mod transpose;

pub use matmul::dot_op;
pub use transpose::transpose_op;
