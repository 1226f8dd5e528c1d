//! Acyclicity check for the derived pipeline graph.
//!
//! Implements Kahn's algorithm (BFS-based topological elimination): build
//! an in-degree table for every node, seed a worklist with all
//! zero-in-degree nodes, then repeatedly remove a node and decrement the
//! in-degrees of its successors, enqueueing any that reach zero. If the
//! worklist drains before every node has been visited, the unvisited
//! nodes all sit on at least one cycle.
//!
//! Only the boolean verdict is produced; the check never enumerates the
//! cycles themselves.
use std::collections::{HashMap, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::FlowGraph;

/// Returns `true` when `graph` contains no directed cycle.
///
/// An empty graph — no nodes, or no retained edges — is acyclic by
/// convention. Self-loops make the graph cyclic; parallel edges inflate
/// in-degrees without changing the verdict.
///
/// Runs in O(V + E) time and space, iteratively, so deep or wide graphs
/// cannot exhaust the stack. Pure function of the graph.
pub fn is_acyclic(graph: &FlowGraph) -> bool {
    if graph.node_count() == 0 || graph.edge_count() == 0 {
        return true;
    }

    let g = graph.graph();

    // In-degree table, initialised to zero so isolated nodes are included.
    let mut in_degree: HashMap<NodeIndex, usize> = HashMap::with_capacity(g.node_count());
    for node_idx in g.node_indices() {
        in_degree.entry(node_idx).or_insert(0);
    }
    for edge_ref in g.edge_references() {
        *in_degree.entry(edge_ref.target()).or_insert(0) += 1;
    }

    // Seed the worklist with every zero-in-degree node.
    let mut queue: VecDeque<NodeIndex> = in_degree
        .iter()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(&idx, _)| idx)
        .collect();

    let total_nodes = in_degree.len();
    let mut visited_count = 0usize;

    // Kahn's BFS: remove zero-in-degree nodes, decrement successors.
    while let Some(node) = queue.pop_front() {
        visited_count += 1;

        for edge_ref in g.edges(node) {
            let target = edge_ref.target();
            if let Some(deg) = in_degree.get_mut(&target) {
                if *deg > 0 {
                    *deg -= 1;
                }
                if *deg == 0 {
                    queue.push_back(target);
                }
            }
        }
    }

    // Nodes never reaching in-degree zero sit on a cycle.
    visited_count == total_nodes
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use serde_json::json;

    use super::*;
    use crate::graph::build_graph;
    use crate::pipeline::Pipeline;

    fn pipeline(node_ids: &[&str], edge_pairs: &[(&str, &str)]) -> Pipeline {
        let nodes = node_ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "type": "text",
                    "position": { "x": 0.0, "y": 0.0 },
                    "data": {}
                })
            })
            .collect::<Vec<_>>();
        let edges = edge_pairs
            .iter()
            .enumerate()
            .map(|(i, (source, target))| {
                json!({ "id": format!("e{i}"), "source": source, "target": target })
            })
            .collect::<Vec<_>>();
        serde_json::from_value(json!({ "nodes": nodes, "edges": edges }))
            .expect("valid test pipeline")
    }

    fn verdict(node_ids: &[&str], edge_pairs: &[(&str, &str)]) -> bool {
        is_acyclic(&build_graph(&pipeline(node_ids, edge_pairs)))
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(verdict(&[], &[]));
    }

    #[test]
    fn single_node_no_edges_is_acyclic() {
        assert!(verdict(&["a"], &[]));
    }

    #[test]
    fn nodes_without_edges_are_acyclic() {
        assert!(verdict(&["a", "b", "c"], &[]));
    }

    #[test]
    fn self_loop_is_cyclic() {
        assert!(!verdict(&["a"], &[("a", "a")]));
    }

    #[test]
    fn linear_chain_is_acyclic() {
        assert!(verdict(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d")]
        ));
    }

    #[test]
    fn closing_the_chain_makes_it_cyclic() {
        assert!(!verdict(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]
        ));
    }

    #[test]
    fn two_node_cycle_is_cyclic() {
        assert!(!verdict(&["a", "b"], &[("a", "b"), ("b", "a")]));
    }

    #[test]
    fn any_cyclic_component_forces_false() {
        // a→b is fine on its own; the disjoint c⇄d loop poisons the verdict.
        assert!(!verdict(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("c", "d"), ("d", "c")]
        ));
    }

    #[test]
    fn diamond_is_acyclic() {
        assert!(verdict(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]
        ));
    }

    #[test]
    fn parallel_edges_do_not_change_the_verdict() {
        assert!(verdict(&["a", "b"], &[("a", "b"), ("a", "b"), ("a", "b")]));
        assert!(!verdict(
            &["a", "b"],
            &[("a", "b"), ("a", "b"), ("b", "a")]
        ));
    }

    #[test]
    fn dangling_edge_is_equivalent_to_its_absence() {
        // The dangling edge must not influence in-degree accounting.
        let with_dangling = verdict(&["a", "b"], &[("a", "b"), ("ghost", "b")]);
        let without = verdict(&["a", "b"], &[("a", "b")]);
        assert_eq!(with_dangling, without);
        assert!(with_dangling);
    }

    #[test]
    fn verdict_is_idempotent() {
        let graph = build_graph(&pipeline(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("c", "a")],
        ));
        assert_eq!(is_acyclic(&graph), is_acyclic(&graph));
    }
}
