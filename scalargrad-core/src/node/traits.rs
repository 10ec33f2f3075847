// src/node/traits.rs
//
// Operator overloads. Constants on either side are promoted to leaves of the node's
// graph, left operand first.

use crate::node::Node;
use crate::ops::arithmetic::add::{add_nodes, add_op};
use crate::ops::arithmetic::mul::{mul_nodes, mul_op};
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::arithmetic::sub::sub_op;
use std::ops::{Add, Mul, Neg, Sub};

/// # Panics
/// Panics if the two nodes belong to different graphs. Use [`add_op`] to get an error instead.
impl<'g> Add<Node<'g>> for Node<'g> {
    type Output = Node<'g>;
    fn add(self, rhs: Node<'g>) -> Node<'g> {
        add_op(self, rhs).unwrap_or_else(|e| panic!("Node addition failed: {}", e))
    }
}

impl<'g> Add<f64> for Node<'g> {
    type Output = Node<'g>;
    fn add(self, rhs: f64) -> Node<'g> {
        let rhs = self.graph().leaf(rhs);
        add_nodes(self, rhs)
    }
}

impl<'g> Add<Node<'g>> for f64 {
    type Output = Node<'g>;
    fn add(self, rhs: Node<'g>) -> Node<'g> {
        let lhs = rhs.graph().leaf(self);
        add_nodes(lhs, rhs)
    }
}

/// # Panics
/// Panics if the two nodes belong to different graphs. Use [`mul_op`] to get an error instead.
impl<'g> Mul<Node<'g>> for Node<'g> {
    type Output = Node<'g>;
    fn mul(self, rhs: Node<'g>) -> Node<'g> {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("Node multiplication failed: {}", e))
    }
}

impl<'g> Mul<f64> for Node<'g> {
    type Output = Node<'g>;
    fn mul(self, rhs: f64) -> Node<'g> {
        let rhs = self.graph().leaf(rhs);
        mul_nodes(self, rhs)
    }
}

impl<'g> Mul<Node<'g>> for f64 {
    type Output = Node<'g>;
    fn mul(self, rhs: Node<'g>) -> Node<'g> {
        let lhs = rhs.graph().leaf(self);
        mul_nodes(lhs, rhs)
    }
}

/// # Panics
/// Panics if the two nodes belong to different graphs. Use [`sub_op`] to get an error instead.
impl<'g> Sub<Node<'g>> for Node<'g> {
    type Output = Node<'g>;
    fn sub(self, rhs: Node<'g>) -> Node<'g> {
        sub_op(self, rhs).unwrap_or_else(|e| panic!("Node subtraction failed: {}", e))
    }
}

impl<'g> Sub<f64> for Node<'g> {
    type Output = Node<'g>;
    fn sub(self, rhs: f64) -> Node<'g> {
        let rhs = self.graph().leaf(-rhs);
        add_nodes(self, rhs)
    }
}

impl<'g> Sub<Node<'g>> for f64 {
    type Output = Node<'g>;
    fn sub(self, rhs: Node<'g>) -> Node<'g> {
        let negated = neg_op(rhs);
        let lhs = rhs.graph().leaf(self);
        add_nodes(lhs, negated)
    }
}

impl<'g> Neg for Node<'g> {
    type Output = Node<'g>;
    fn neg(self) -> Node<'g> {
        neg_op(self)
    }
}
