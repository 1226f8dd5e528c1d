//! HTTP integration tests for the pipeline analysis endpoints.
//!
//! Runs the real router (CORS and trace layers included) behind an
//! in-process test server and exercises the wire contract the browser
//! editor depends on.
#![allow(clippy::expect_used)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use flowdag_server::{ServerConfig, create_router};

fn server() -> TestServer {
    let router = create_router(&ServerConfig::default()).expect("router builds");
    TestServer::new(router).expect("test server starts")
}

/// A node object in the editor's wire shape.
fn node(id: &str) -> Value {
    json!({
        "id": id,
        "type": "text",
        "position": { "x": 0.0, "y": 0.0 },
        "data": {}
    })
}

fn edge(id: &str, source: &str, target: &str) -> Value {
    json!({ "id": id, "source": source, "target": target })
}

// ---------------------------------------------------------------------------
// GET / (ping)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_responds_pong() {
    let server = server();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "ping": "pong" }));
}

// ---------------------------------------------------------------------------
// POST /pipelines/parse — happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn parse_linear_chain() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({
            "nodes": [node("a"), node("b"), node("c"), node("d")],
            "edges": [edge("e0", "a", "b"), edge("e1", "b", "c"), edge("e2", "c", "d")]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "num_nodes": 4, "num_edges": 3, "is_dag": true })
    );
}

#[tokio::test]
async fn parse_cyclic_pipeline() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({
            "nodes": [node("a"), node("b"), node("c"), node("d")],
            "edges": [
                edge("e0", "a", "b"),
                edge("e1", "b", "c"),
                edge("e2", "c", "d"),
                edge("e3", "d", "a")
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "num_nodes": 4, "num_edges": 4, "is_dag": false })
    );
}

#[tokio::test]
async fn parse_empty_pipeline() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({ "nodes": [], "edges": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "num_nodes": 0, "num_edges": 0, "is_dag": true })
    );
}

#[tokio::test]
async fn dangling_edges_count_but_do_not_fail() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({
            "nodes": [node("a"), node("b")],
            "edges": [edge("e0", "a", "b"), edge("e1", "a", "ghost")]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "num_nodes": 2, "num_edges": 2, "is_dag": true })
    );
}

#[tokio::test]
async fn editor_payload_with_handles_and_extras_is_accepted() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({
            "nodes": [
                {
                    "id": "customInput-1",
                    "type": "customInput",
                    "position": { "x": 100, "y": 100 },
                    "data": { "id": "customInput-1", "nodeType": "customInput" },
                    "width": 200,
                    "selected": false
                },
                {
                    "id": "llm-1",
                    "type": "llm",
                    "position": { "x": 400, "y": 100 },
                    "data": { "id": "llm-1", "nodeType": "llm" }
                }
            ],
            "edges": [
                {
                    "id": "reactflow__edge-customInput-1-llm-1",
                    "source": "customInput-1",
                    "target": "llm-1",
                    "sourceHandle": "customInput-1-value",
                    "targetHandle": "llm-1-prompt",
                    "animated": true
                }
            ],
            "viewport": { "x": 0, "y": 0, "zoom": 1 }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "num_nodes": 2, "num_edges": 1, "is_dag": true })
    );
}

// ---------------------------------------------------------------------------
// POST /pipelines/parse — rejection paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_nodes_field_is_rejected() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({ "edges": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert!(body.get("error").is_some(), "body should carry an error: {body}");
}

#[tokio::test]
async fn empty_node_id_is_rejected() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .json(&json!({
            "nodes": [node("")],
            "edges": []
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn syntactically_invalid_json_is_rejected() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .text(r#"{"nodes": ["#)
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_json_content_type_is_rejected() {
    let server = server();
    let response = server
        .post("/pipelines/parse")
        .text("nodes and edges")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn allowed_origin_receives_cors_headers() {
    let server = server();
    let response = server
        .get("/")
        .add_header("origin", "http://localhost:3000")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn unknown_origin_receives_no_allow_header() {
    let server = server();
    let response = server
        .get("/")
        .add_header("origin", "http://evil.example")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(
        response
            .maybe_header("access-control-allow-origin")
            .is_none(),
        "unknown origins must not be echoed"
    );
}
