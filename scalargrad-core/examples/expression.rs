// examples/expression.rs
//!
//! Builds `d = (a + b) * c - b * a + 3 * a^2 / 4 + exp(a)`, runs one backward pass and
//! prints every value with its gradient. Run with `RUST_LOG=trace` to see each recorded node.

use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = graph.leaf(4.0);

    let quadratic = (3.0 * a.pow(2.0)?).div(4.0)?;
    let d = (a + b) * c - b * a + quadratic + a.exp();
    d.backward();

    for (name, node) in [("a", a), ("b", b), ("c", c), ("d", d)] {
        println!("{} = {}", name, node);
    }
    println!("graph holds {} nodes", graph.len());
    Ok(())
}
