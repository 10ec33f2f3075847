// src/node/debug.rs
use crate::node::Node;
use std::fmt;

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(id={}, value={:?}, grad={:?}, op={:?})",
            self.id(),
            self.value(),
            self.grad(),
            self.op_label()
        )
    }
}

/// Informational only, not meant to be parsed back.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data: {}, grad: {})", self.value(), self.grad())
    }
}
