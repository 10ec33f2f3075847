use crate::node::Node;
use crate::ops::arithmetic::mul::mul_nodes;

/// Negates a node, recorded as `a * -1` with a fresh `-1` leaf.
///
/// Backward is inherited from multiplication: `a.grad -= grad_output`.
pub fn neg_op(a: Node<'_>) -> Node<'_> {
    let minus_one = a.graph().leaf(-1.0);
    mul_nodes(a, minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
