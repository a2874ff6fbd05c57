//! Element-wise mathematical functions.

pub mod exp;
pub mod ln;
pub mod square;

pub use exp::exp_op;
pub use ln::ln_op;
pub use square::square_op;
