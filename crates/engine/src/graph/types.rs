//! Data types for the graph model and traversal surface.

use graphboard_core::{EdgeId, GraphError, GraphResult, NodeId, Point};
use serde::{Deserialize, Serialize};

// =============================================================================
// GRAPH ENTITIES
// =============================================================================

/// A vertex on the canvas.
///
/// A node owns its adjacency bookkeeping: the labels of its neighbors and the
/// ids of its incident edges. Edges themselves are owned by the store; the
/// incident list holds references only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    position: Point,
    tooltip: Option<String>,
    neighbors: Vec<NodeId>,
    incident: Vec<EdgeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: Point) -> Self {
        Self {
            id,
            position,
            tooltip: None,
            neighbors: Vec::new(),
            incident: Vec::new(),
        }
    }

    /// The node's label.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Center position on the canvas.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Tooltip text, when one has been set.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Labels of neighboring nodes, in link order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Ids of incident edges, in link order. For a directed edge only the
    /// owning endpoint lists it.
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// True when `other` is connected to this node by any edge, directed or
    /// not.
    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn set_tooltip(&mut self, text: String) {
        self.tooltip = Some(text);
    }

    pub(crate) fn add_neighbor(&mut self, other: NodeId) {
        self.neighbors.push(other);
    }

    pub(crate) fn add_incident(&mut self, edge: EdgeId) {
        self.incident.push(edge);
    }

    /// Drops a neighbor link; reports the soft miss when it was not there.
    pub(crate) fn remove_neighbor(&mut self, other: NodeId) -> GraphResult<()> {
        let before = self.neighbors.len();
        self.neighbors.retain(|n| *n != other);
        if self.neighbors.len() == before {
            return Err(GraphError::not_found(format!(
                "neighbor {other} on node {}",
                self.id
            )));
        }
        Ok(())
    }

    /// Drops an incident link; reports the soft miss when it was not there.
    pub(crate) fn remove_incident(&mut self, edge: EdgeId) -> GraphResult<()> {
        let before = self.incident.len();
        self.incident.retain(|e| *e != edge);
        if self.incident.len() == before {
            return Err(GraphError::not_found(format!(
                "edge {edge} on node {}",
                self.id
            )));
        }
        Ok(())
    }
}

/// A connection between two nodes.
///
/// `second` stays unbound while the user is still dragging the edge out of
/// its first endpoint; a dangling edge participates in no adjacency. Weight 1
/// means "unweighted": the canvas shows no weight label for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    first: NodeId,
    second: Option<NodeId>,
    #[serde(default = "default_weight")]
    weight: u32,
    directed: bool,
}

fn default_weight() -> u32 {
    1
}

impl Edge {
    pub(crate) fn new(id: EdgeId, first: NodeId) -> Self {
        Self {
            id,
            first,
            second: None,
            weight: default_weight(),
            directed: false,
        }
    }

    /// The edge's id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// First endpoint. For a directed edge this is the owner and the arrow
    /// points away from it.
    pub fn first(&self) -> NodeId {
        self.first
    }

    /// Second endpoint, once bound.
    pub fn second(&self) -> Option<NodeId> {
        self.second
    }

    /// Both endpoints as written.
    pub fn endpoints(&self) -> (NodeId, Option<NodeId>) {
        (self.first, self.second)
    }

    /// Edge weight; 1 means unweighted.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// True when adjacency flows first→second only.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// True while the second endpoint is unbound.
    pub fn is_dangling(&self) -> bool {
        self.second.is_none()
    }

    /// True when the edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.first == a && self.second == Some(b)) || (self.first == b && self.second == Some(a))
    }

    /// The endpoint opposite `node`, when both endpoints are bound and
    /// `node` is one of them.
    pub fn other_endpoint(&self, node: NodeId) -> Option<NodeId> {
        let second = self.second?;
        if node == self.first {
            Some(second)
        } else if node == second {
            Some(self.first)
        } else {
            None
        }
    }

    pub(crate) fn bind_second(&mut self, second: NodeId) {
        self.second = Some(second);
    }

    pub(crate) fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }

    pub(crate) fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Swaps the endpoints so the current second endpoint becomes the owner.
    pub(crate) fn swap_endpoints(&mut self) {
        if let Some(second) = self.second {
            self.second = Some(self.first);
            self.first = second;
        }
    }
}

/// Start/finish designation. At most one node holds each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Traversal origin.
    Start,
    /// Traversal target.
    Finish,
}

// =============================================================================
// TRAVERSAL SURFACE
// =============================================================================

/// Column scan order during traversal row expansion.
///
/// The settings surface exposes this as "from the smallest bit" / "from the
/// biggest bit"; it changes visitation order, never reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanOrder {
    /// Smallest index first.
    #[default]
    Ascending,
    /// Largest index first.
    Descending,
}

/// Options for a traversal run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BfsOptions {
    /// Column scan order during row expansion.
    pub scan_order: ScanOrder,
}

/// One dequeued node in visitation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Matrix index of the dequeued node.
    pub index: usize,
    /// Label of the dequeued node.
    pub label: NodeId,
    /// Whether the node ended up on the discovered path.
    pub on_path: bool,
}

/// Result of a traversal run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BfsOutcome {
    /// Dequeue-order visitation records.
    pub visitation: Vec<VisitRecord>,
    /// Whether finish was reached from start.
    pub reachable: bool,
    /// Labels of the discovered start→finish path, when reachable.
    pub path: Option<Vec<NodeId>>,
}

// =============================================================================
// TESTS
// =============================================================================
