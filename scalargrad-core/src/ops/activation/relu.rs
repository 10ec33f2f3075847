use crate::autograd::BackwardOp;
use crate::node::Node;

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Backward: the input receives the output gradient when the output is positive,
/// nothing otherwise (including at exactly 0).
pub fn relu_op(a: Node<'_>) -> Node<'_> {
    let x = a.value();
    let value = if x < 0.0 { 0.0 } else { x };
    a.graph().record(value, BackwardOp::Relu { input: a.id() })
}

impl<'g> Node<'g> {
    /// ReLU(x) = max(0, x). See [`relu_op`].
    pub fn relu(self) -> Node<'g> {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
