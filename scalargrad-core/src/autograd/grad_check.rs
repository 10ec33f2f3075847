use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::node::Node;
use log::{debug, warn};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check parameter {name}: {value:?} (must be finite and positive)")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` builds a scalar output from one leaf per entry of `inputs`. The analytical
/// gradients come from a single backward pass on a fresh graph. For each input `i`
/// the numerical gradient is `(f(x + eps e_i) - f(x - eps e_i)) / (2 eps)`, each side
/// evaluated on its own fresh graph.
///
/// An input fails when both the absolute difference and the difference relative to
/// the larger gradient magnitude exceed `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Node<'g>]) -> Result<Node<'g>, ScalarGradError>,
{
    for (name, value) in [("epsilon", epsilon), ("tolerance", tolerance)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(GradCheckError::InvalidParameter { name, value });
        }
    }

    // --- Analytical gradients ---
    let graph = Graph::new();
    let leaves: Vec<Node<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();
    debug!(
        "check_grad: output {} over {} node(s), analytical grads {:?}",
        output.value(),
        graph.len(),
        analytical_grads
    );

    // --- Numerical gradients ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let mut inputs_plus = inputs.to_vec();
        inputs_plus[input_index] += epsilon;
        let loss_plus = evaluate(&func, &inputs_plus)?;

        let mut inputs_minus = inputs.to_vec();
        inputs_minus[input_index] -= epsilon;
        let loss_minus = evaluate(&func, &inputs_minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let scale = analytical_grad.abs().max(numerical_grad.abs());
        if difference > tolerance && difference / scale > tolerance {
            warn!(
                "check_grad: input {} analytical {} vs numerical {}",
                input_index, analytical_grad, numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

/// Forward-only evaluation of `func` on a fresh graph.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Node<'g>]) -> Result<Node<'g>, ScalarGradError>,
{
    let graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<Node<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves)?;
    Ok(output.value())
}
