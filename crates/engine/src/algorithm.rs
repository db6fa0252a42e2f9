//! Algorithm selection and the search entry point.

use graphboard_core::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

use crate::canvas::CanvasSink;
use crate::graph::types::{BfsOptions, BfsOutcome};
use crate::graph::{traversal, GraphStore};

/// Search algorithms the shell offers in its run menu.
///
/// Only breadth-first search is implemented. The other kinds stay
/// selectable so the shell can present the full menu and report
/// `Unsupported` honestly instead of falling back to BFS silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Depth-first search. Selectable, not implemented.
    Dfs,
    /// Dijkstra shortest path. Selectable, not implemented.
    Dijkstra,
}

impl AlgorithmKind {
    /// Parses a menu label, case-insensitively.
    pub fn parse(label: &str) -> GraphResult<Self> {
        match label.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            other => Err(GraphError::invalid_input(format!(
                "unknown algorithm {other:?}"
            ))),
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
        }
    }
}

/// Snapshots the store and runs the selected algorithm between the marked
/// start and finish nodes.
///
/// Fails with `InvalidStart` / `InvalidFinish` when a role is unmarked, and
/// with `Unsupported` for any kind other than [`AlgorithmKind::Bfs`], in
/// both cases before any sink event fires.
pub fn run_search(
    store: &GraphStore,
    kind: AlgorithmKind,
    options: &BfsOptions,
    sink: &mut dyn CanvasSink,
) -> GraphResult<BfsOutcome> {
    if kind != AlgorithmKind::Bfs {
        return Err(GraphError::unsupported(kind.label()));
    }
    let start = store.start_node().ok_or(GraphError::InvalidStart)?;
    let finish = store.finish_node().ok_or(GraphError::InvalidFinish)?;
    let matrix = store.to_matrix();
    traversal::bfs(&matrix, start, finish, options, sink)
}
