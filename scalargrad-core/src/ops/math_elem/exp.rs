use crate::autograd::BackwardOp;
use crate::node::Node;

/// Computes `e^x`.
///
/// Overflow is not an error: large inputs give `f64::INFINITY`.
///
/// Backward: `a.grad += e^x * grad_output`, reusing the stored output value.
pub fn exp_op(a: Node<'_>) -> Node<'_> {
    let value = a.value().exp();
    a.graph().record(value, BackwardOp::Exp { input: a.id() })
}

impl<'g> Node<'g> {
    /// Natural exponential. See [`exp_op`].
    pub fn exp(self) -> Node<'g> {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
