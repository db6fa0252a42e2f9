//! Graph model and search engine behind the editor canvas.
//!
//! Four components carry the load: the graph store (nodes, edges, adjacency
//! bookkeeping), the adjacency matrix codec, the breadth-first traversal
//! engine, and the three-file persistence codec. Around them sit the
//! presentation contract the shell implements, typed editor dispatch, and
//! algorithm selection. The shell itself draws and reads input; everything
//! it knows about the graph it learns through this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod algorithm;
pub mod canvas;
pub mod editor;
pub mod graph;
pub mod persist;

// Re-exports
pub use algorithm::{run_search, AlgorithmKind};
pub use canvas::{CanvasEvent, CanvasSink, NullCanvas, RecordingCanvas};
pub use editor::{apply_action, CanvasItem, EditorAction};
pub use graph::{
    AdjacencyMatrix, BfsOptions, BfsOutcome, Edge, GraphStore, Node, Role, ScanOrder, VisitRecord,
};
