use super::*;
use crate::autograd::grad_check::check_grad;
use crate::Graph;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let graph = Graph::new();
    let x = graph.leaf(1.0);
    let y = exp_op(x);

    assert_relative_eq!(y.value(), std::f64::consts::E);
    assert_eq!(y.op_label(), "exp");
    assert_eq!(y.operands(), vec![x]);
}

#[test]
fn test_exp_backward() {
    let graph = Graph::new();
    let x = graph.leaf(0.5);
    let y = x.exp();
    y.backward();
    assert_relative_eq!(x.grad(), 0.5f64.exp());
}

#[test]
fn test_exp_overflow_is_not_an_error() {
    let graph = Graph::new();
    let y = graph.leaf(1000.0).exp();
    assert!(y.value().is_infinite());
}

#[test]
fn test_exp_grad_check() {
    check_grad(|_, x| Ok(exp_op(x[0])), &[-0.6], 1e-6, 1e-4)
        .expect("Gradient check failed for exp");
}
