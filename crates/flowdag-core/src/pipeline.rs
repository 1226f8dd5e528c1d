//! Top-level pipeline request document.
//!
//! [`Pipeline`] is the root type deserialized from a submitted graph
//! description: a node list plus an edge list. It has no identity or
//! persistence — one is built per request and discarded with it.
//!
//! # Unknown field preservation
//!
//! The `extra` catch-all (`#[serde(flatten)]`) absorbs every JSON key that
//! is not explicitly declared on the struct, so editor payloads carrying
//! viewport state or other session data round-trip without loss. Do not
//! add `#[serde(deny_unknown_fields)]` here or on any child struct.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::structures::{Edge, Node};

/// A submitted pipeline: the full set of nodes and directed edges.
///
/// Deserialize from JSON with [`serde_json::from_str`] /
/// [`serde_json::from_value`]; both lists are required but may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Ordered list of all pipeline nodes.
    pub nodes: Vec<Node>,

    /// Ordered list of all pipeline edges.
    pub edges: Vec<Edge>,

    /// Unknown top-level JSON fields preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
