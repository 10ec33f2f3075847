//! # Autograd
//!
//! The graph arena, the per-node local gradient rules and the backward engine.
//!
//! - [`graph`]: [`Graph`] arena, [`NodeId`], topological ordering and the backward pass.
//! - [`backward_op`]: [`BackwardOp`], the tagged local gradient rule of each node.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{Graph, NodeId};
