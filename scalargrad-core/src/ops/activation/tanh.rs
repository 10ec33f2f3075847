use crate::autograd::BackwardOp;
use crate::node::Node;

/// Applies the hyperbolic tangent.
///
/// The forward value is `(e^(2x) - 1) / (e^(2x) + 1)`, computed with `f64::tanh` so that
/// large inputs saturate to ±1 instead of overflowing to NaN.
///
/// Backward: `a.grad += (1 - tanh(x)^2) * grad_output`.
pub fn tanh_op(a: Node<'_>) -> Node<'_> {
    let value = a.value().tanh();
    a.graph().record(value, BackwardOp::Tanh { input: a.id() })
}

impl<'g> Node<'g> {
    /// Hyperbolic tangent. See [`tanh_op`].
    pub fn tanh(self) -> Node<'g> {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
