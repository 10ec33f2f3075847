use crate::autograd::graph::NodeId;
use crate::node_data::NodeData;
use std::borrow::Cow;

/// Local gradient rule of a graph node, one variant per differentiable operation.
///
/// Each variant carries the operand ids the rule writes to and the numeric constants
/// it needs (the exponent for `Pow`). Composite operations (negation, subtraction,
/// division) are recorded as their `Add`/`Mul`/`Pow` building blocks and never appear here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Input or constant. Has no operands and distributes nothing.
    Leaf,
    Add { lhs: NodeId, rhs: NodeId },
    Mul { lhs: NodeId, rhs: NodeId },
    /// `base ** exponent` with a constant exponent.
    Pow { base: NodeId, exponent: f64 },
    Relu { input: NodeId },
    Tanh { input: NodeId },
    Exp { input: NodeId },
    Log { input: NodeId },
}

impl BackwardOp {
    /// Human-readable tag of the producing operation. Empty for leaves.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            BackwardOp::Leaf => Cow::Borrowed(""),
            BackwardOp::Add { .. } => Cow::Borrowed("+"),
            BackwardOp::Mul { .. } => Cow::Borrowed("*"),
            BackwardOp::Pow { exponent, .. } => Cow::Owned(format!("**{}", exponent)),
            BackwardOp::Relu { .. } => Cow::Borrowed("relu"),
            BackwardOp::Tanh { .. } => Cow::Borrowed("tanh"),
            BackwardOp::Exp { .. } => Cow::Borrowed("exp"),
            BackwardOp::Log { .. } => Cow::Borrowed("log"),
        }
    }

    /// Returns the operand ids of this node, deduplicated.
    ///
    /// A node built from the same operand twice (`x + x`, `x * x`) reports it once.
    /// The order is stable: left operand first.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => {
                if lhs == rhs {
                    vec![lhs]
                } else {
                    vec![lhs, rhs]
                }
            }
            BackwardOp::Pow { base: input, .. }
            | BackwardOp::Relu { input }
            | BackwardOp::Tanh { input }
            | BackwardOp::Exp { input }
            | BackwardOp::Log { input } => vec![input],
        }
    }

    /// Distributes the gradient of `output` into the gradients of its operands.
    ///
    /// Reads the output's current `grad`, so every consumer of `output` must have run
    /// its own rule first. Contributions are accumulated, never assigned: when both
    /// sides of `Add`/`Mul` are the same node it receives both contributions.
    pub(crate) fn backward(&self, output: NodeId, nodes: &mut [NodeData]) {
        let out_value = nodes[output.index()].value;
        let grad_output = nodes[output.index()].grad;

        match *self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => {
                nodes[lhs.index()].grad += grad_output;
                nodes[rhs.index()].grad += grad_output;
            }
            BackwardOp::Mul { lhs, rhs } => {
                let lhs_value = nodes[lhs.index()].value;
                let rhs_value = nodes[rhs.index()].value;
                nodes[lhs.index()].grad += rhs_value * grad_output;
                nodes[rhs.index()].grad += lhs_value * grad_output;
            }
            BackwardOp::Pow { base, exponent } => {
                // d/dx x^0 is 0 everywhere, including x == 0 where the general formula gives 0 * inf.
                if exponent != 0.0 {
                    let x = nodes[base.index()].value;
                    nodes[base.index()].grad += exponent * x.powf(exponent - 1.0) * grad_output;
                }
            }
            BackwardOp::Relu { input } => {
                if out_value > 0.0 {
                    nodes[input.index()].grad += grad_output;
                }
            }
            BackwardOp::Tanh { input } => {
                nodes[input.index()].grad += (1.0 - out_value * out_value) * grad_output;
            }
            BackwardOp::Exp { input } => {
                nodes[input.index()].grad += out_value * grad_output;
            }
            BackwardOp::Log { input } => {
                let x = nodes[input.index()].value;
                nodes[input.index()].grad += (1.0 / x) * grad_output;
            }
        }
    }
}
