//! Interactive graph editing and breadth-first search, with the drawing
//! shell left out.
//!
//! `graphboard` is the core of a canvas graph editor. Nodes and edges live
//! in a [`GraphStore`] that keeps its adjacency bookkeeping consistent under
//! arbitrary interactive mutation; searches run over a dense
//! [`AdjacencyMatrix`] snapshot; whole graphs round-trip through three
//! companion text files. The shell draws and reads input, implements
//! [`CanvasSink`] to receive state-change events, and calls in through the
//! types re-exported here; it never owns graph state.
//!
//! ```
//! use graphboard::{AlgorithmKind, BfsOptions, GraphStore, NullCanvas, Point, Role};
//!
//! # fn main() -> graphboard::GraphResult<()> {
//! let mut graph = GraphStore::default();
//! let depot = graph.add_node(Point::new(10.0, 10.0))?;
//! let dock = graph.add_node(Point::new(50.0, 10.0))?;
//! graph.connect(depot, dock)?;
//! graph.mark_role(depot, Role::Start)?;
//! graph.mark_role(dock, Role::Finish)?;
//!
//! let outcome = graphboard::run_search(
//!     &graph,
//!     AlgorithmKind::Bfs,
//!     &BfsOptions::default(),
//!     &mut NullCanvas,
//! )?;
//! assert!(outcome.reachable);
//! assert_eq!(outcome.path, Some(vec![depot, dock]));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod types;

// Re-exports
pub use types::*;
