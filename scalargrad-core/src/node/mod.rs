// src/node/mod.rs

use crate::autograd::graph::{Graph, NodeId};
use std::hash::{Hash, Hasher};
use std::ptr;

mod autograd_methods;
mod debug;
mod traits;

/// Handle to one scalar value in a computation [`Graph`].
///
/// `Node` is a cheap `Copy` handle (graph reference + index). Its value is fixed at
/// construction; its gradient lives in the graph and is filled in by
/// [`backward`](Node::backward). Equality and hashing follow node identity, not value.
#[derive(Clone, Copy)]
pub struct Node<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Node<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Node { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this node was recorded in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward value of the node.
    pub fn value(&self) -> f64 {
        self.graph.value(self.id)
    }

    /// Tag of the producing operation (`+`, `*`, `**2`, `tanh`, ...). Empty for leaves.
    pub fn op_label(&self) -> String {
        self.graph.backward_op(self.id).label().into_owned()
    }

    /// Upstream nodes this node was computed from, each listed once.
    pub fn operands(&self) -> Vec<Node<'g>> {
        self.graph
            .backward_op(self.id)
            .inputs()
            .into_iter()
            .map(|id| Node::new(self.graph, id))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.backward_op(self.id).inputs().is_empty()
    }

    pub(crate) fn same_graph(&self, other: &Node<'_>) -> bool {
        ptr::eq(self.graph, other.graph)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_graph(other) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.graph, state);
        self.id.hash(state);
    }
}

/// An operand accepted by the operation entry points: either a graph node or a plain
/// numeric constant.
///
/// Constants are promoted to fresh leaves of the other operand's graph at the point
/// of use, so `2.0 * x` and `x * 2.0` record the same structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'g> {
    Node(Node<'g>),
    Constant(f64),
}

impl<'g> Operand<'g> {
    /// Returns the node, creating a leaf in `graph` for a constant.
    pub(crate) fn into_node(self, graph: &'g Graph) -> Node<'g> {
        match self {
            Operand::Node(node) => node,
            Operand::Constant(value) => graph.leaf(value),
        }
    }

    pub(crate) fn as_node(&self) -> Option<&Node<'g>> {
        match self {
            Operand::Node(node) => Some(node),
            Operand::Constant(_) => None,
        }
    }
}

impl<'g> From<Node<'g>> for Operand<'g> {
    fn from(node: Node<'g>) -> Self {
        Operand::Node(node)
    }
}

impl<'g> From<&Node<'g>> for Operand<'g> {
    fn from(node: &Node<'g>) -> Self {
        Operand::Node(*node)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand<'_> {
    fn from(value: f32) -> Self {
        Operand::Constant(f64::from(value))
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Constant(f64::from(value))
    }
}
