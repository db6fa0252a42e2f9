//! Public types for the graphboard unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Foundation types
pub use graphboard_core::{CanvasConfig, Point, Rect};
pub use graphboard_core::{EdgeId, NodeId};
pub use graphboard_core::{GraphError, GraphResult};

// Graph model
pub use graphboard_engine::graph::{AdjacencyMatrix, GraphStore};
pub use graphboard_engine::graph::{Edge, Node, Role};

// Dialog input validation
pub use graphboard_engine::graph::validate::{validate_tooltip, validate_weight};

// Traversal types
pub use graphboard_engine::graph::{BfsOptions, BfsOutcome, ScanOrder, VisitRecord};

// Presentation contract (the shell implements CanvasSink)
pub use graphboard_engine::canvas::{CanvasEvent, CanvasSink, NullCanvas, RecordingCanvas};

// Editor dispatch
pub use graphboard_engine::editor::{apply_action, CanvasItem, EditorAction};

// Search entry points
pub use graphboard_engine::algorithm::{run_search, AlgorithmKind};
pub use graphboard_engine::graph::traversal::bfs;

// Persistence
pub use graphboard_engine::persist::{load, save};
