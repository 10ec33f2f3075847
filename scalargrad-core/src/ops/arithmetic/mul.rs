use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::{Node, Operand};
use crate::ops::resolve_binary;

/// Multiplies two operands.
///
/// Backward: each operand receives the other operand's value times the output gradient.
///
/// # Errors
/// * `UnsupportedOperand` if both operands are constants.
/// * `GraphMismatch` if the operands are nodes of different graphs.
pub fn mul_op<'g>(
    lhs: impl Into<Operand<'g>>,
    rhs: impl Into<Operand<'g>>,
) -> Result<Node<'g>, ScalarGradError> {
    let (a, b) = resolve_binary(lhs.into(), rhs.into(), "mul_op")?;
    Ok(mul_nodes(a, b))
}

/// Records `a * b` for two nodes already known to share a graph.
pub(crate) fn mul_nodes<'g>(a: Node<'g>, b: Node<'g>) -> Node<'g> {
    a.graph().record(
        a.value() * b.value(),
        BackwardOp::Mul {
            lhs: a.id(),
            rhs: b.id(),
        },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
