// src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::{Node, Operand};

/// Raises a node to a constant power.
///
/// The exponent must be a numeric constant: graph-valued exponents are not
/// differentiated through and are rejected when the graph is built.
///
/// Backward: `base.grad += exponent * base^(exponent - 1) * grad_output`.
///
/// # Errors
/// * `UnsupportedOperand` if the exponent is a node.
/// * `DomainError` if the base is 0 and the exponent negative (division by zero).
///
/// A negative base with a non-integer exponent is not an error: the value is NaN.
pub fn pow_op<'g>(
    base: Node<'g>,
    exponent: impl Into<Operand<'g>>,
) -> Result<Node<'g>, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Constant(exponent) => exponent,
        Operand::Node(_) => {
            return Err(ScalarGradError::UnsupportedOperand {
                operation: "pow_op".to_string(),
                reason: "exponent must be a numeric constant, not a graph node".to_string(),
            })
        }
    };

    let x = base.value();
    if x == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::DomainError {
            operation: "pow_op".to_string(),
            value: x,
            reason: format!("zero cannot be raised to the negative power {}", exponent),
        });
    }

    Ok(base.graph().record(
        x.powf(exponent),
        BackwardOp::Pow {
            base: base.id(),
            exponent,
        },
    ))
}

// --- Node Method ---

impl<'g> Node<'g> {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow(self, exponent: impl Into<Operand<'g>>) -> Result<Node<'g>, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
