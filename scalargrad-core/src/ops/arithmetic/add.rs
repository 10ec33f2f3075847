use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::{Node, Operand};
use crate::ops::resolve_binary;

/// Adds two operands.
///
/// A numeric constant on either side is promoted to a leaf of the other operand's graph.
/// Backward: both operands receive the output gradient unchanged.
///
/// # Errors
/// * `UnsupportedOperand` if both operands are constants.
/// * `GraphMismatch` if the operands are nodes of different graphs.
pub fn add_op<'g>(
    lhs: impl Into<Operand<'g>>,
    rhs: impl Into<Operand<'g>>,
) -> Result<Node<'g>, ScalarGradError> {
    let (a, b) = resolve_binary(lhs.into(), rhs.into(), "add_op")?;
    Ok(add_nodes(a, b))
}

/// Records `a + b` for two nodes already known to share a graph.
pub(crate) fn add_nodes<'g>(a: Node<'g>, b: Node<'g>) -> Node<'g> {
    a.graph().record(
        a.value() + b.value(),
        BackwardOp::Add {
            lhs: a.id(),
            rhs: b.id(),
        },
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
