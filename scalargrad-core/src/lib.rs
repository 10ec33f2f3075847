//! # scalargrad-core
//!
//! Scalar reverse-mode automatic differentiation.
//!
//! A [`Graph`] is an arena of scalar nodes. Leaves are created with [`Graph::leaf`];
//! every operation (see [`ops`]) computes its value immediately and records how to
//! send a gradient back to its operands. [`Node::backward`] then fills in the gradient
//! of the chosen output with respect to every node it depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = graph.leaf(10.0);
//! let d = a * b + c;
//! d.backward();
//!
//! assert_eq!(d.value(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

pub mod autograd;
pub mod error;
pub mod node;
mod node_data;
pub mod ops;
pub mod utils;

pub use autograd::graph::{Graph, NodeId};
pub use error::ScalarGradError;
pub use node::{Node, Operand};
