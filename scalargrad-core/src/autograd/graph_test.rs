use super::*;
use crate::utils::testing::init_test_logger;
use approx::assert_relative_eq;

#[test]
fn test_new_graph_is_empty() {
    let graph = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);

    let graph = Graph::with_capacity(16);
    assert!(graph.is_empty());
}

#[test]
fn test_leaves_get_sequential_ids() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    assert_eq!(a.id().index(), 0);
    assert_eq!(b.id().index(), 1);
    assert_eq!(b.id().to_string(), "#1");
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_topological_sort_chain() {
    let graph = Graph::new();
    let x = graph.leaf(0.5);
    let y = x.exp();
    let z = y * 2.0;

    let order: Vec<usize> = graph
        .topological_sort(z.id())
        .into_iter()
        .map(NodeId::index)
        .collect();
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_topological_sort_visits_shared_node_once() {
    let graph = Graph::new();
    let a = graph.leaf(0.3);
    let b = a.exp();
    let c = a.tanh();
    let d = b + c;

    let order = graph.topological_sort(d.id());
    assert_eq!(order, vec![a.id(), b.id(), c.id(), d.id()]);
}

#[test]
fn test_topological_sort_excludes_unreachable_nodes() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let unrelated = graph.leaf(5.0);
    let _other = unrelated.exp();
    let b = a.relu();

    let order = graph.topological_sort(b.id());
    assert_eq!(order, vec![a.id(), b.id()]);
}

#[test]
fn test_topological_sort_leaf_root() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    assert_eq!(graph.topological_sort(a.id()), vec![a.id()]);
}

#[test]
fn test_backward_leaf_root_seeds_itself() {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_backward_leaves_unreachable_gradients_alone() {
    init_test_logger();
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = a * 4.0;
    c.backward();

    assert_relative_eq!(a.grad(), 4.0);
    assert_eq!(b.grad(), 0.0);
}

#[test]
fn test_zero_grad_resets_every_node() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = a * b;
    c.backward();
    assert_ne!(a.grad(), 0.0);

    graph.zero_grad();
    for node in [a, b, c] {
        assert_eq!(node.grad(), 0.0);
    }
}

#[test]
fn test_backward_deep_chain() {
    init_test_logger();
    let graph = Graph::new();
    let x = graph.leaf(0.0);
    let mut y = x;
    for _ in 0..100_000 {
        y = y + 1.0;
    }
    y.backward();

    assert_relative_eq!(y.value(), 100_000.0);
    assert_relative_eq!(x.grad(), 1.0);
}
