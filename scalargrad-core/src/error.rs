use thiserror::Error;

/// Custom error type for scalargrad graph construction.
///
/// Every variant is raised while an operation computes its forward value, before
/// a node is recorded in the graph. The backward pass itself never fails.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// An operand had a kind the operation cannot accept, e.g. a graph node used as
    /// an exponent, or two numeric constants with no graph to record into.
    #[error("Unsupported operand for operation {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    /// The forward value is undefined for the given input.
    #[error("Domain error in operation {operation}: {reason} (got {value})")]
    DomainError {
        operation: String,
        value: f64,
        reason: String,
    },

    #[error("Operands of {operation} belong to different graphs")]
    GraphMismatch { operation: String },
}
