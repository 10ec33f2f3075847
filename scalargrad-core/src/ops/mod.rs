//! # Scalar Operations Module (`ops`)
//!
//! The fixed catalog of differentiable operations. Each operation lives in its own file
//! and exposes an `xxx_op` function that computes the forward value eagerly, validates
//! the input domain and records the result in the graph together with its
//! [`BackwardOp`](crate::autograd::BackwardOp). The same operations are available as
//! `Node` methods and, where infallible, as `std::ops` operators.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div. Negation, subtraction and division are
//!   composed from add/mul/pow nodes.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp, natural log.

use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::node::{Node, Operand};

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};

/// Finds the graph a binary operation records into.
///
/// At least one operand must be a node, and two nodes must share a graph. Nothing is
/// recorded here, so callers can validate before creating intermediate nodes.
pub(crate) fn binary_graph<'g>(
    lhs: &Operand<'g>,
    rhs: &Operand<'g>,
    operation: &str,
) -> Result<&'g Graph, ScalarGradError> {
    match (lhs.as_node(), rhs.as_node()) {
        (Some(a), Some(b)) => {
            if !a.same_graph(b) {
                return Err(ScalarGradError::GraphMismatch {
                    operation: operation.to_string(),
                });
            }
            Ok(a.graph())
        }
        (Some(node), None) | (None, Some(node)) => Ok(node.graph()),
        (None, None) => Err(ScalarGradError::UnsupportedOperand {
            operation: operation.to_string(),
            reason: "at least one operand must be a graph node".to_string(),
        }),
    }
}

/// Resolves both operands of a binary operation to nodes of one graph, promoting
/// constants to fresh leaves (left operand first).
pub(crate) fn resolve_binary<'g>(
    lhs: Operand<'g>,
    rhs: Operand<'g>,
    operation: &str,
) -> Result<(Node<'g>, Node<'g>), ScalarGradError> {
    let graph = binary_graph(&lhs, &rhs, operation)?;
    let lhs = lhs.into_node(graph);
    let rhs = rhs.into_node(graph);
    Ok((lhs, rhs))
}
