use crate::node::Node;

/// Checks that each node's gradient is within `tolerance` of the expected value.
/// Panics with the offending index otherwise.
pub fn check_grads_near(nodes: &[Node<'_>], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        nodes.len(),
        expected_grads.len(),
        "Node count does not match expected gradient count"
    );
    for (i, (node, expected)) in nodes.iter().zip(expected_grads.iter()).enumerate() {
        let actual = node.grad();
        let diff = (actual - expected).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, expected, diff, tolerance
            );
        }
    }
}

/// Installs `env_logger` for unit tests. Safe to call from every test.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
