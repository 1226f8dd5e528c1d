//! Graph construction from a [`Pipeline`] using `petgraph`, plus the
//! acyclicity check.
//!
//! The derived graph is ephemeral: built fresh for each request and
//! discarded with it.
//!
//! # Two-Pass Construction
//!
//! [`build_graph`] runs two passes over the pipeline:
//! 1. **Node pass** — inserts nodes into the `StableDiGraph` and records
//!    the `id → NodeIndex` mapping. A duplicate id does not error: the
//!    first occurrence wins and later duplicates are skipped (set-collapse
//!    policy).
//! 2. **Edge pass** — resolves `source`/`target` ids and inserts edges.
//!    An edge whose either endpoint is unknown is silently dropped from
//!    the graph. Multi-edges and self-loops are inserted as-is.
//!
//! Both the collapse count and the drop count are recorded on the
//! returned [`FlowGraph`] so callers can surface them in logs.
//!
//! # Acyclicity
//!
//! See the [`acyclic`] submodule for the Kahn's-method check the analysis
//! entry point runs over the constructed graph.
use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};

use crate::enums::NodeTypeTag;
use crate::pipeline::Pipeline;

pub mod acyclic;

pub use acyclic::is_acyclic;

// ---------------------------------------------------------------------------
// Weight types
// ---------------------------------------------------------------------------

/// Weight stored inline on each petgraph node.
///
/// Kept small so traversal loops over the petgraph node slab stay cheap;
/// full node data is accessed via `data_index` into the originating
/// [`Pipeline::nodes`] vector.
#[derive(Debug, Clone)]
pub struct NodeWeight {
    /// Identifier copied from the pipeline node's `id` field.
    pub local_id: String,
    /// Node kind: known editor kind or extension string.
    pub node_type: NodeTypeTag,
    /// Index into the `Pipeline::nodes` vector for the full node.
    pub data_index: usize,
}

/// Weight stored inline on each petgraph edge.
#[derive(Debug, Clone)]
pub struct EdgeWeight {
    /// Identifier copied from the pipeline edge's `id` field.
    pub local_id: String,
    /// Index into the `Pipeline::edges` vector for the full edge.
    pub data_index: usize,
}

// ---------------------------------------------------------------------------
// FlowGraph
// ---------------------------------------------------------------------------

/// A directed multigraph derived from a submitted [`Pipeline`].
///
/// Wraps a `petgraph` [`StableDiGraph`] with typed [`NodeWeight`] and
/// [`EdgeWeight`] structs, and maintains a `HashMap<String, NodeIndex>`
/// for O(1) lookup of nodes by id.
///
/// Construct with [`build_graph`].
#[derive(Debug)]
pub struct FlowGraph {
    graph: StableDiGraph<NodeWeight, EdgeWeight>,
    id_to_index: HashMap<String, NodeIndex>,
    collapsed_nodes: usize,
    dropped_edges: usize,
}

impl FlowGraph {
    /// Returns the number of nodes in the graph (after duplicate collapse).
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of retained edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the [`NodeIndex`] for a node id string.
    ///
    /// Returns `None` if no node with that id exists in the graph.
    pub fn node_index(&self, id: &str) -> Option<&NodeIndex> {
        self.id_to_index.get(id)
    }

    /// Returns the [`NodeWeight`] for the given index, or `None` if the
    /// index is out of bounds or refers to a removed node.
    pub fn node_weight(&self, idx: NodeIndex) -> Option<&NodeWeight> {
        self.graph.node_weight(idx)
    }

    /// Returns the [`EdgeWeight`] for the given index, or `None` if the
    /// index is out of bounds or refers to a removed edge.
    pub fn edge_weight(&self, idx: EdgeIndex) -> Option<&EdgeWeight> {
        self.graph.edge_weight(idx)
    }

    /// Returns a reference to the underlying [`StableDiGraph`] for use by
    /// the acyclicity check and tests.
    pub fn graph(&self) -> &StableDiGraph<NodeWeight, EdgeWeight> {
        &self.graph
    }

    /// Number of submitted nodes whose id duplicated an earlier node's.
    pub fn collapsed_node_count(&self) -> usize {
        self.collapsed_nodes
    }

    /// Number of submitted edges dropped because an endpoint id did not
    /// resolve to a node.
    pub fn dropped_edge_count(&self) -> usize {
        self.dropped_edges
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Constructs a [`FlowGraph`] from a deserialized [`Pipeline`].
///
/// Construction is O(N + E) where N is node count and E is edge count,
/// and never fails: malformed references are a policy matter, not an
/// error.
///
/// # Two-Pass Process
///
/// **Pass 1 — Nodes:** iterates `pipeline.nodes`, inserting each node
/// into the `StableDiGraph` with a [`NodeWeight`] and recording the
/// `id → NodeIndex` mapping. A node whose id is already mapped is
/// skipped; the first occurrence wins.
///
/// **Pass 2 — Edges:** iterates `pipeline.edges`, resolving `source` and
/// `target` ids through the index map. An edge is inserted only when both
/// endpoints resolve; otherwise it is dropped and counted. Parallel edges
/// between the same pair and self-loops are retained.
pub fn build_graph(pipeline: &Pipeline) -> FlowGraph {
    let node_count = pipeline.nodes.len();
    let edge_count = pipeline.edges.len();

    let mut graph: StableDiGraph<NodeWeight, EdgeWeight> =
        StableDiGraph::with_capacity(node_count, edge_count);
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(node_count);
    let mut collapsed_nodes = 0usize;
    let mut dropped_edges = 0usize;

    // Pass 1: insert nodes, first occurrence of each id wins.
    for (data_index, node) in pipeline.nodes.iter().enumerate() {
        let local_id = node.id.to_string();

        if id_to_index.contains_key(&local_id) {
            collapsed_nodes += 1;
            continue;
        }

        let weight = NodeWeight {
            local_id: local_id.clone(),
            node_type: node.node_type.clone(),
            data_index,
        };

        let idx = graph.add_node(weight);
        id_to_index.insert(local_id, idx);
    }

    // Pass 2: insert edges whose endpoints both resolve.
    for (data_index, edge) in pipeline.edges.iter().enumerate() {
        let source_idx = id_to_index.get(&*edge.source).copied();
        let target_idx = id_to_index.get(&*edge.target).copied();

        let (Some(source_idx), Some(target_idx)) = (source_idx, target_idx) else {
            dropped_edges += 1;
            continue;
        };

        let weight = EdgeWeight {
            local_id: edge.id.to_string(),
            data_index,
        };

        graph.add_edge(source_idx, target_idx, weight);
    }

    FlowGraph {
        graph,
        id_to_index,
        collapsed_nodes,
        dropped_edges,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use serde_json::json;

    use super::*;
    use crate::enums::{NodeType, NodeTypeTag};

    /// Builds a pipeline from bare id lists: nodes by id, edges as
    /// `(source, target)` pairs.
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
                json!({
                    "id": format!("e{i}"),
                    "source": source,
                    "target": target
                })
            })
            .collect::<Vec<_>>();
        serde_json::from_value(json!({ "nodes": nodes, "edges": edges }))
            .expect("valid test pipeline")
    }

    #[test]
    fn builds_nodes_and_edges() {
        let g = build_graph(&pipeline(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.collapsed_node_count(), 0);
        assert_eq!(g.dropped_edge_count(), 0);
    }

    #[test]
    fn node_lookup_and_weights() {
        let g = build_graph(&pipeline(&["a", "b"], &[("a", "b")]));
        let idx = *g.node_index("a").expect("node a present");
        let weight = g.node_weight(idx).expect("weight present");
        assert_eq!(weight.local_id, "a");
        assert_eq!(weight.node_type, NodeTypeTag::Known(NodeType::Text));
        assert_eq!(weight.data_index, 0);
        assert!(g.node_index("missing").is_none());
    }

    #[test]
    fn duplicate_node_ids_collapse_first_wins() {
        let p: Pipeline = serde_json::from_value(json!({
            "nodes": [
                { "id": "a", "type": "text", "position": { "x": 1.0, "y": 1.0 }, "data": {} },
                { "id": "a", "type": "llm", "position": { "x": 2.0, "y": 2.0 }, "data": {} }
            ],
            "edges": []
        }))
        .expect("valid test pipeline");

        let g = build_graph(&p);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.collapsed_node_count(), 1);

        let idx = *g.node_index("a").expect("node a present");
        let weight = g.node_weight(idx).expect("weight present");
        assert_eq!(weight.node_type, NodeTypeTag::Known(NodeType::Text));
        assert_eq!(weight.data_index, 0, "first occurrence must win");
    }

    #[test]
    fn dangling_edges_are_dropped_not_errors() {
        let g = build_graph(&pipeline(
            &["a", "b"],
            &[("a", "b"), ("a", "ghost"), ("ghost", "b"), ("x", "y")],
        ));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.dropped_edge_count(), 3);
    }

    #[test]
    fn parallel_edges_are_retained() {
        let g = build_graph(&pipeline(&["a", "b"], &[("a", "b"), ("a", "b")]));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn self_loops_are_retained() {
        let g = build_graph(&pipeline(&["a"], &[("a", "a")]));
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn empty_pipeline_builds_empty_graph() {
        let g = build_graph(&pipeline(&[], &[]));
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }
}
