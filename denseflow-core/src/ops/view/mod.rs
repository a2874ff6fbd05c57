//! Operations that only change how the data is shaped.

pub mod flatten;

pub use flatten::flatten_op;
