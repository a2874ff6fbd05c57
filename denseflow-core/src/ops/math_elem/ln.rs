use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Applies the natural logarithm element-wise.
///
/// Follows IEEE semantics: `ln(0) = -inf` and negative inputs give `NaN`.
/// Callers that need a restricted domain (e.g. log-loss) validate first.
pub fn ln_op(a: &Tensor) -> Tensor {
    apply_unary_op(a, f64::ln)
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
