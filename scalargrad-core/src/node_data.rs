// src/node_data.rs
use crate::autograd::BackwardOp;

/// Internal record of one scalar node in a [`Graph`](crate::autograd::Graph).
///
/// Records live in the graph's arena and are addressed by [`NodeId`](crate::NodeId).
/// Operands are not stored separately: they are the ids carried by `backward_op`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeData {
    /// Forward value, fixed at construction.
    pub(crate) value: f64,
    /// Gradient accumulator. Starts at 0.0 and only grows through `+=` during a backward pass.
    pub(crate) grad: f64,
    /// Local gradient rule of the operation that produced this node.
    pub(crate) backward_op: BackwardOp,
}

impl NodeData {
    pub(crate) fn new(value: f64, backward_op: BackwardOp) -> Self {
        NodeData {
            value,
            grad: 0.0,
            backward_op,
        }
    }

    pub(crate) fn leaf(value: f64) -> Self {
        Self::new(value, BackwardOp::Leaf)
    }
}
