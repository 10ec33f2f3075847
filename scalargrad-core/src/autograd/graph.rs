//! Arena holding every node of a computation, and the backward engine over it.
//!
//! Nodes reference their operands by [`NodeId`], an index into the arena. An operand is
//! always pushed before the node that uses it, so the operand relation is acyclic by
//! construction. The whole graph is released at once when the [`Graph`] is dropped.

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::node_data::NodeData;
use log::{debug, trace};
use std::cell::RefCell;
use std::fmt;

/// Stable identity of a node inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the arena, in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Growable arena of scalar nodes.
///
/// Nodes are handed out as [`Node`] handles borrowing the graph. `RefCell` gives the
/// handles shared access for recording new nodes and accumulating gradients; the
/// graph is therefore neither `Sync` nor meant to cross threads.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<NodeData>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph whose arena is pre-sized for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Creates a leaf node: no operands, empty label, gradient 0.0.
    pub fn leaf(&self, value: f64) -> Node<'_> {
        let id = self.push(NodeData::leaf(value));
        Node::new(self, id)
    }

    /// Number of nodes recorded so far, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every node to 0.0.
    ///
    /// `backward` accumulates into existing gradients, so call this between passes
    /// over overlapping subgraphs.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Records the result of an operation and returns a handle to it.
    pub(crate) fn record(&self, value: f64, backward_op: BackwardOp) -> Node<'_> {
        let id = self.push(NodeData::new(value, backward_op));
        trace!("recorded node {} = {} via '{}'", id, value, backward_op.label());
        Node::new(self, id)
    }

    fn push(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId::new(nodes.len());
        nodes.push(data);
        id
    }

    pub(crate) fn value(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.index()].value
    }

    pub(crate) fn grad(&self, id: NodeId) -> f64 {
        self.nodes.borrow()[id.index()].grad
    }

    pub(crate) fn backward_op(&self, id: NodeId) -> BackwardOp {
        self.nodes.borrow()[id.index()].backward_op
    }

    /// Orders the subgraph reachable from `root` so that every node comes after all of
    /// its operands (DFS post-order, operands visited left to right).
    ///
    /// Each node appears exactly once however many paths reach it. The traversal keeps
    /// an explicit stack, so long chains do not grow the call stack.
    pub(crate) fn topological_sort(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut visited = vec![false; nodes.len()];
        let mut sorted_list = Vec::new();
        // (node, operands already pushed)
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                sorted_list.push(id);
                continue;
            }
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;
            stack.push((id, true));
            for input in nodes[id.index()].backward_op.inputs().into_iter().rev() {
                if !visited[input.index()] {
                    stack.push((input, false));
                }
            }
        }
        sorted_list
    }

    /// Runs the backward pass from `root`.
    ///
    /// Seeds `root` with gradient 1.0, then invokes every reachable node's local rule
    /// exactly once, consumers before operands. Gradients are accumulated on top of
    /// whatever the nodes already hold.
    pub(crate) fn backward(&self, root: NodeId) {
        let sorted_nodes = self.topological_sort(root);
        debug!(
            "backward from node {} over {} reachable node(s)",
            root,
            sorted_nodes.len()
        );

        let mut nodes = self.nodes.borrow_mut();
        nodes[root.index()].grad = 1.0;
        for &id in sorted_nodes.iter().rev() {
            let op = nodes[id.index()].backward_op;
            op.backward(id, &mut nodes);
        }
        debug!("backward from node {} done", root);
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
