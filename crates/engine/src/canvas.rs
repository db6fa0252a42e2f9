//! Presentation-layer contract.
//!
//! The shell injects a sink into the operations that produce visual feedback;
//! the core never reaches for a global view. Every hook has an empty default
//! body so a shell implements only what it draws.

use graphboard_core::{EdgeId, NodeId, Point};
use serde::{Deserialize, Serialize};

/// Outward canvas hooks invoked by store mutations, traversal, and load.
pub trait CanvasSink {
    /// A node was dequeued by the traversal before the path was confirmed;
    /// eligible for "in progress" marking.
    fn node_opened(&mut self, _node: NodeId) {}

    /// A node was confirmed to lie on the discovered start→finish path.
    fn path_node_marked(&mut self, _node: NodeId) {}

    /// An edge became directed, interactively or during load.
    fn edge_directed(&mut self, _edge: EdgeId) {}

    /// The store was cleared wholesale.
    fn graph_cleared(&mut self) {}

    /// Load materialized a node at `position`, with its tooltip when the
    /// annotations file carried one.
    fn node_restored(&mut self, _node: NodeId, _position: Point, _tooltip: Option<&str>) {}
}

/// Sink that drops every event. Headless operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl CanvasSink for NullCanvas {}

/// One recorded presentation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// See [`CanvasSink::node_opened`].
    NodeOpened(NodeId),
    /// See [`CanvasSink::path_node_marked`].
    PathNodeMarked(NodeId),
    /// See [`CanvasSink::edge_directed`].
    EdgeDirected(EdgeId),
    /// See [`CanvasSink::graph_cleared`].
    GraphCleared,
    /// See [`CanvasSink::node_restored`].
    NodeRestored {
        /// Restored node.
        node: NodeId,
        /// Center position from the layout file.
        position: Point,
        /// Tooltip from the annotations file, when non-empty.
        tooltip: Option<String>,
    },
}

/// Sink that accumulates events in emission order.
///
/// Used by the test suites and by headless embedders that want to replay
/// presentation changes after the fact.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    /// Events in emission order.
    pub events: Vec<CanvasEvent>,
}

impl RecordingCanvas {
    /// Fresh empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of nodes reported opened, in order.
    pub fn opened(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::NodeOpened(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Labels of path nodes marked, in order.
    pub fn path_marks(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::PathNodeMarked(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Edges reported directed, in order.
    pub fn directed_edges(&self) -> Vec<EdgeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CanvasEvent::EdgeDirected(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl CanvasSink for RecordingCanvas {
    fn node_opened(&mut self, node: NodeId) {
        self.events.push(CanvasEvent::NodeOpened(node));
    }

    fn path_node_marked(&mut self, node: NodeId) {
        self.events.push(CanvasEvent::PathNodeMarked(node));
    }

    fn edge_directed(&mut self, edge: EdgeId) {
        self.events.push(CanvasEvent::EdgeDirected(edge));
    }

    fn graph_cleared(&mut self) {
        self.events.push(CanvasEvent::GraphCleared);
    }

    fn node_restored(&mut self, node: NodeId, position: Point, tooltip: Option<&str>) {
        self.events.push(CanvasEvent::NodeRestored {
            node,
            position,
            tooltip: tooltip.map(str::to_string),
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
