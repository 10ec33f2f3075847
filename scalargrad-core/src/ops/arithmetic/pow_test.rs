use super::*;
use crate::autograd::grad_check::check_grad;
use crate::Graph;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let graph = Graph::new();
    let x = graph.leaf(3.0);

    let squared = pow_op(x, 2.0).unwrap();
    assert_relative_eq!(squared.value(), 9.0);
    assert_eq!(squared.op_label(), "**2");
    assert_eq!(squared.operands(), vec![x]);

    let root = x.pow(0.5).unwrap();
    assert_relative_eq!(root.value(), 3.0f64.sqrt());

    let integer_exponent = x.pow(3).unwrap();
    assert_relative_eq!(integer_exponent.value(), 27.0);
}

#[test]
fn test_pow_backward() {
    let graph = Graph::new();
    let x = graph.leaf(3.0);
    let y = x.pow(3.0).unwrap();
    y.backward();

    // 3 * x^2
    assert_relative_eq!(x.grad(), 27.0);
}

#[test]
fn test_pow_negative_base_integer_exponent() {
    let graph = Graph::new();
    let x = graph.leaf(-2.0);
    let y = x.pow(3.0).unwrap();
    assert_relative_eq!(y.value(), -8.0);
    y.backward();
    assert_relative_eq!(x.grad(), 12.0);
}

#[test]
fn test_pow_node_exponent_is_rejected() {
    let graph = Graph::new();
    let x = graph.leaf(2.0);
    let e = graph.leaf(3.0);

    let err = pow_op(x, e).unwrap_err();
    assert!(matches!(err, ScalarGradError::UnsupportedOperand { .. }));
    assert_eq!(graph.len(), 2, "No node is recorded on failure");
}

#[test]
fn test_pow_domain_errors() {
    let graph = Graph::new();
    let zero = graph.leaf(0.0);

    let err = zero.pow(-1.0).unwrap_err();
    assert!(matches!(err, ScalarGradError::DomainError { value, .. } if value == 0.0));
    assert_eq!(graph.len(), 1);

    // Zero to a non-negative power is fine.
    let ok = zero.pow(2.0).unwrap();
    assert_eq!(ok.value(), 0.0);
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    let graph = Graph::new();
    let negative = graph.leaf(-4.0);

    let y = pow_op(negative, 0.5).unwrap();
    assert!(y.value().is_nan());
    assert_eq!(y.op_label(), "**0.5");
    assert_eq!(graph.len(), 2);

    // The gradient flows through as NaN as well; backward itself does not fail.
    y.backward();
    assert!(negative.grad().is_nan());
}

#[test]
fn test_pow_grad_check() {
    check_grad(|_, x| pow_op(x[0], 2.5), &[1.3], 1e-6, 1e-4)
        .expect("Gradient check failed for pow 2.5");
    check_grad(|_, x| pow_op(x[0], -2.0), &[-0.8], 1e-6, 1e-4)
        .expect("Gradient check failed for pow -2");
}
