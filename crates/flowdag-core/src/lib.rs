//! Core library for flowdag: the pipeline data model and the acyclicity
//! analysis that runs over it.
//!
//! The crate is pure — no I/O, no async, no shared state. Frontends
//! (the HTTP server, the CLI) deserialize a [`Pipeline`] at their
//! boundary and hand it to [`analyze`], which builds an ephemeral
//! [`FlowGraph`] and reports node count, edge count, and whether the
//! directed graph is acyclic.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod analysis;
pub mod enums;
pub mod graph;
pub mod newtypes;
pub mod pipeline;
pub mod structures;

pub use analysis::{PipelineReport, analyze};
pub use enums::{NodeType, NodeTypeTag};
pub use graph::{EdgeWeight, FlowGraph, NodeWeight, build_graph, is_acyclic};
pub use newtypes::{EdgeId, NewtypeError, NodeId};
pub use pipeline::Pipeline;
pub use structures::{Edge, Node, Position};

/// Returns the current version of the flowdag-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
