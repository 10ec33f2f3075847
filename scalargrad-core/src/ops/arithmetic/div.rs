use crate::error::ScalarGradError;
use crate::node::{Node, Operand};
use crate::ops::arithmetic::mul::mul_nodes;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::binary_graph;

/// Divides `lhs` by `rhs`, recorded as `lhs * rhs**-1`.
///
/// A constant divisor is inverted numerically before it becomes a leaf (`x / 4`
/// multiplies by a `0.25` leaf). A node divisor goes through [`pow_op`] with exponent -1.
/// Backward is inherited from multiplication and power.
///
/// # Errors
/// * `DomainError` if the divisor is 0 (raised by `pow_op` for a node divisor).
/// * `UnsupportedOperand` if both operands are constants.
/// * `GraphMismatch` if the operands are nodes of different graphs.
pub fn div_op<'g>(
    lhs: impl Into<Operand<'g>>,
    rhs: impl Into<Operand<'g>>,
) -> Result<Node<'g>, ScalarGradError> {
    let lhs = lhs.into();
    let rhs = rhs.into();
    let graph = binary_graph(&lhs, &rhs, "div_op")?;

    let reciprocal = match rhs {
        Operand::Node(node) => pow_op(node, -1.0)?,
        Operand::Constant(value) => {
            if value == 0.0 {
                return Err(ScalarGradError::DomainError {
                    operation: "div_op".to_string(),
                    value,
                    reason: "division by zero".to_string(),
                });
            }
            graph.leaf(1.0 / value)
        }
    };
    let lhs = lhs.into_node(graph);
    Ok(mul_nodes(lhs, reciprocal))
}

// --- Node Method ---

impl<'g> Node<'g> {
    /// Divides this node by `rhs`. See [`div_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, rhs: impl Into<Operand<'g>>) -> Result<Node<'g>, ScalarGradError> {
        div_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
