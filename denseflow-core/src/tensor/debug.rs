// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

/// Nested-bracket rendering, e.g. `[[1.0000, 2.0000], [3.0000, 4.0000]]`.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, self.data(), self.shape())
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, data: &[f64], dims: &[usize]) -> fmt::Result {
    write!(f, "[")?;
    match dims {
        [] | [_] => {
            for (i, value) in data.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", value)?;
            }
        }
        [outer, inner @ ..] => {
            let chunk = data.len() / outer;
            for (i, block) in data.chunks(chunk).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_block(f, block, inner)?;
            }
        }
    }
    write!(f, "]")
}
