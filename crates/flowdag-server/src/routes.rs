//! Route handlers for the pipeline analysis endpoints.
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use flowdag_core::{Pipeline, PipelineReport, build_graph};

use crate::error::ApiError;

/// Builds the route table for the service.
pub fn router() -> Router {
    Router::new()
        .route("/", get(ping))
        .route("/pipelines/parse", post(parse_pipeline))
}

/// Liveness ping.
async fn ping() -> Json<Value> {
    Json(json!({ "ping": "pong" }))
}

/// Analyzes a submitted pipeline and reports node count, edge count, and
/// whether the graph is acyclic.
///
/// Malformed bodies never reach the core: the `Json` rejection is mapped
/// to an [`ApiError`] here at the boundary.
async fn parse_pipeline(
    payload: Result<Json<Pipeline>, JsonRejection>,
) -> Result<Json<PipelineReport>, ApiError> {
    let Json(pipeline) = payload?;

    let graph = build_graph(&pipeline);
    let report = PipelineReport::new(&pipeline, &graph);

    tracing::debug!(
        num_nodes = report.num_nodes,
        num_edges = report.num_edges,
        is_dag = report.is_dag,
        dropped_edges = graph.dropped_edge_count(),
        collapsed_nodes = graph.collapsed_node_count(),
        "analyzed pipeline"
    );

    Ok(Json(report))
}
