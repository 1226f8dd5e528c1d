//! The analysis entry point: one pipeline in, three facts out.
//!
//! [`analyze`] is the single operation the transport layers expose. It is
//! a pure function: building the ephemeral [`crate::FlowGraph`] and
//! running the acyclicity check have no side effects, so concurrent
//! invocations need no coordination.
use serde::{Deserialize, Serialize};

use crate::graph::{FlowGraph, build_graph, is_acyclic};
use crate::pipeline::Pipeline;

/// Summary facts reported for a submitted pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Number of nodes as submitted (duplicates included).
    pub num_nodes: usize,
    /// Number of edges as submitted (dangling edges included).
    pub num_edges: usize,
    /// Whether the derived graph is a directed acyclic graph.
    pub is_dag: bool,
}

impl PipelineReport {
    /// Builds the report for `pipeline` given its derived graph.
    ///
    /// The counts report the raw submitted list lengths: a duplicated
    /// node id or a dangling edge still counts toward its list total.
    /// The verdict is computed over `graph`, i.e. after duplicate-id
    /// collapse and dangling-edge drop.
    pub fn new(pipeline: &Pipeline, graph: &FlowGraph) -> Self {
        Self {
            num_nodes: pipeline.nodes.len(),
            num_edges: pipeline.edges.len(),
            is_dag: is_acyclic(graph),
        }
    }
}

/// Analyzes a submitted pipeline.
///
/// Builds the ephemeral derived graph and produces the report in one
/// step. Callers that also want the graph's construction statistics
/// (dropped-edge / collapsed-node counts) can run [`build_graph`] and
/// [`PipelineReport::new`] themselves.
pub fn analyze(pipeline: &Pipeline) -> PipelineReport {
    PipelineReport::new(pipeline, &build_graph(pipeline))
}
