use crate::error::ScalarGradError;
use crate::node::{Node, Operand};
use crate::ops::arithmetic::add::add_nodes;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::binary_graph;

/// Subtracts `rhs` from `lhs`, recorded as `lhs + (-rhs)`.
///
/// A constant right-hand side is negated numerically before it becomes a leaf
/// (`x - 3` adds a `-3` leaf). A node right-hand side is negated with [`neg_op`].
/// Backward is inherited from addition and multiplication.
///
/// # Errors
/// * `UnsupportedOperand` if both operands are constants.
/// * `GraphMismatch` if the operands are nodes of different graphs.
pub fn sub_op<'g>(
    lhs: impl Into<Operand<'g>>,
    rhs: impl Into<Operand<'g>>,
) -> Result<Node<'g>, ScalarGradError> {
    let lhs = lhs.into();
    let rhs = rhs.into();
    let graph = binary_graph(&lhs, &rhs, "sub_op")?;

    let negated = match rhs {
        Operand::Node(node) => neg_op(node),
        Operand::Constant(value) => graph.leaf(-value),
    };
    let lhs = lhs.into_node(graph);
    Ok(add_nodes(lhs, negated))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
