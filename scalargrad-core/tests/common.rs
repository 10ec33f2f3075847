use scalargrad_core::{Graph, Node};

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

/// Creates one leaf per value.
#[allow(dead_code)]
pub fn leaves<'g>(graph: &'g Graph, values: &[f64]) -> Vec<Node<'g>> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}
