// examples/neuron.rs
//!
//! A single tanh neuron `o = tanh(x1*w1 + x2*w2 + b)`, the building block of the small
//! networks this crate is meant for. Prints the output and the gradient of every input.

use scalargrad_core::Graph;

fn main() {
    env_logger::init();

    let graph = Graph::new();
    let x1 = graph.leaf(2.0);
    let x2 = graph.leaf(0.0);
    let w1 = graph.leaf(-3.0);
    let w2 = graph.leaf(1.0);
    let b = graph.leaf(6.881_373_587_019_543);

    let n = x1 * w1 + x2 * w2 + b;
    let o = n.tanh();
    o.backward();

    println!("o  = {}", o);
    for (name, node) in [("x1", x1), ("x2", x2), ("w1", w1), ("w2", w2), ("b", b)] {
        println!("{:<2} = {}", name, node);
    }
}
