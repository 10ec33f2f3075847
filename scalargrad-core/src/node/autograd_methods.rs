use crate::node::Node;

impl<'g> Node<'g> {
    /// Gradient accumulated on this node by the backward passes run so far.
    ///
    /// 0.0 until a backward pass reaches the node.
    pub fn grad(&self) -> f64 {
        self.graph().grad(self.id())
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Sets this node's gradient to 1.0 and propagates it through every node it
    /// depends on, so that afterwards each reachable node holds the derivative of
    /// `self` with respect to it.
    ///
    /// Gradients are not cleared first. Running a second pass over an overlapping
    /// graph adds to the previous results; call [`Graph::zero_grad`](crate::Graph::zero_grad)
    /// in between when that is not wanted.
    pub fn backward(&self) {
        self.graph().backward(self.id());
    }

    /// Nodes reachable from this one, each after all of its operands.
    ///
    /// This is the order the backward pass walks in reverse. The last element is `self`.
    pub fn topological_order(&self) -> Vec<Node<'g>> {
        let graph = self.graph();
        graph
            .topological_sort(self.id())
            .into_iter()
            .map(|id| Node::new(graph, id))
            .collect()
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
