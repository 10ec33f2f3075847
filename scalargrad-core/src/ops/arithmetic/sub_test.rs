use super::*;
use crate::autograd::grad_check::check_grad;
use crate::Graph;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward() {
    let graph = Graph::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(1.5);
    let c = sub_op(a, b).unwrap();

    assert_relative_eq!(c.value(), 3.5);
    assert_eq!(c.op_label(), "+");
}

#[test]
fn test_sub_backward() {
    let graph = Graph::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(1.5);
    let c = sub_op(a, b).unwrap();
    c.backward();

    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_constants() {
    let graph = Graph::new();
    let x = graph.leaf(2.0);

    let right = sub_op(x, 3.0).unwrap();
    assert_relative_eq!(right.value(), -1.0);
    assert_relative_eq!(right.operands()[1].value(), -3.0);

    let left = sub_op(3.0, x).unwrap();
    assert_relative_eq!(left.value(), 1.0);
    left.backward();
    assert_relative_eq!(x.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero() {
    let graph = Graph::new();
    let x = graph.leaf(7.0);
    let y = sub_op(x, x).unwrap();
    y.backward();

    assert_relative_eq!(y.value(), 0.0);
    assert_relative_eq!(x.grad(), 0.0);
}

#[test]
fn test_sub_mismatch_records_nothing() {
    let first = Graph::new();
    let second = Graph::new();
    let a = first.leaf(1.0);
    let b = second.leaf(1.0);

    let err = sub_op(a, b).unwrap_err();
    assert!(matches!(err, ScalarGradError::GraphMismatch { .. }));
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn test_sub_grad_check() {
    check_grad(|_, x| sub_op(x[0], x[1]), &[0.9, 2.2], 1e-6, 1e-4)
        .expect("Gradient check failed for sub");
}
