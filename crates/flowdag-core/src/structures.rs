//! Node and Edge structs for the pipeline graph data model.
//!
//! These mirror the JSON payload the browser editor submits. The core
//! only interprets identifiers; everything else (type tag, position,
//! attribute map, handle labels) is opaque metadata carried so the
//! transport layer can round-trip it.
//!
//! Key design decisions:
//! - Handle labels are `Option<String>` with `#[serde(default)]` so both
//!   an absent key and an explicit `null` deserialize to `None`.
//! - `#[serde(flatten)] pub extra` on both structs preserves unknown JSON
//!   fields across round trips, keeping the model forward-compatible with
//!   editor payload changes.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::NodeTypeTag;
use crate::newtypes::{EdgeId, NodeId};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A node's 2-D canvas position in editor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single node in a submitted pipeline.
///
/// The `id`, `type`, `position`, and `data` fields are required, matching
/// the editor payload. Unknown JSON fields are preserved in [`Node::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier for this node, unique within the request.
    pub id: NodeId,

    /// Node kind (known editor kind or extension string).
    #[serde(rename = "type")]
    pub node_type: NodeTypeTag,

    /// Canvas position of the node.
    pub position: Position,

    /// Free-form node attributes. The core never interprets these.
    pub data: Map<String, Value>,

    /// Unknown fields preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed connection between two nodes in a submitted pipeline.
///
/// The `id`, `source`, and `target` fields are required; the handle labels
/// identify which port on each node the connection attaches to and may be
/// absent or `null`. Unknown JSON fields are preserved in [`Edge::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Identifier for this edge, unique within the request.
    pub id: EdgeId,

    /// [`NodeId`] of the source (tail) node.
    pub source: NodeId,

    /// [`NodeId`] of the target (head) node.
    pub target: NodeId,

    /// Label of the source node's output port, when the editor set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,

    /// Label of the target node's input port, when the editor set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,

    /// Unknown fields preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
