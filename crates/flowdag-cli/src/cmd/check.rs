//! Implementation of `flowdag check <file>`.
//!
//! Parses a pipeline JSON document and prints the three analysis facts:
//! node count, edge count, and whether the graph is acyclic.
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed, plus stderr notes
//! when the lenient graph construction ignored dangling edges or
//! collapsed duplicate node ids.
//!
//! Exit codes:
//! - 0 = analyzed, the pipeline is a DAG
//! - 1 = analyzed, the pipeline contains a cycle
//! - 2 = input or parse failure
use flowdag_core::{Pipeline, PipelineReport, build_graph};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `check` command on pre-read input.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — content is not a valid pipeline document.
/// - [`CliError::CyclicPipeline`] — the report was printed but the graph
///   contains a cycle (exit code 1).
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    // --- Parse ---
    let pipeline: Pipeline = serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })?;

    // --- Analyze ---
    let graph = build_graph(&pipeline);
    let report = PipelineReport::new(&pipeline, &graph);

    // --- Emit ---
    match format {
        OutputFormat::Human => {
            println!("nodes:  {}", report.num_nodes);
            println!("edges:  {}", report.num_edges);
            println!("is_dag: {}", if report.is_dag { "yes" } else { "no" });

            if graph.dropped_edge_count() > 0 {
                eprintln!(
                    "note: ignored {} edge(s) referencing unknown nodes",
                    graph.dropped_edge_count()
                );
            }
            if graph.collapsed_node_count() > 0 {
                eprintln!(
                    "note: collapsed {} node(s) with duplicate ids",
                    graph.collapsed_node_count()
                );
            }
        }
        OutputFormat::Json => {
            let line =
                serde_json::to_string(&report).map_err(|e| CliError::IoError {
                    source: "stdout".to_owned(),
                    detail: e.to_string(),
                })?;
            println!("{line}");
        }
    }

    // --- Exit code ---
    if report.is_dag {
        Ok(())
    } else {
        Err(CliError::CyclicPipeline)
    }
}
