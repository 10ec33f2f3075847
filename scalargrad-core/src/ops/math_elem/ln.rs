// src/ops/math_elem/ln.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::Node;

/// Computes the natural logarithm of a node.
///
/// Backward: `a.grad += (1 / x) * grad_output`.
///
/// # Errors
/// Returns `ScalarGradError::DomainError` if the input value is not strictly positive.
/// The input is not clamped; callers are expected to validate before taking the log.
pub fn ln_op(a: Node<'_>) -> Result<Node<'_>, ScalarGradError> {
    let x = a.value();
    if x <= 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "ln_op".to_string(),
            value: x,
            reason: "logarithm of a non-positive value".to_string(),
        });
    }
    Ok(a.graph().record(x.ln(), BackwardOp::Log { input: a.id() }))
}

impl<'g> Node<'g> {
    /// Natural logarithm. See [`ln_op`].
    pub fn log(self) -> Result<Node<'g>, ScalarGradError> {
        ln_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
