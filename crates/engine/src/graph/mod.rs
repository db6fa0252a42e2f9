//! Graph store: the single mutable source of truth behind the canvas.
//!
//! Owns every node and edge, keeps the adjacency bookkeeping pairwise
//! consistent under interactive mutation, and carries the start/finish marks
//! as weak references. The adjacency matrix, the traversal engine, and the
//! persistence codec all derive their views from this store and never hold
//! state of their own between calls.
//!
//! Mutations fail one at a time: an error leaves the store exactly as it was.
//! The one soft condition is a missing link during delete cleanup, which is
//! logged and skipped so the broader delete still completes.

mod integrity;
pub mod matrix;
pub mod traversal;
pub mod types;
pub mod validate;

use std::collections::BTreeMap;

use graphboard_core::{CanvasConfig, EdgeId, GraphError, GraphResult, NodeId, Point, Rect};
use tracing::{debug, warn};

use crate::canvas::CanvasSink;

pub use matrix::AdjacencyMatrix;
pub use types::{BfsOptions, BfsOutcome, Edge, Node, Role, ScanOrder, VisitRecord};

/// In-memory graph model driven by one interactive session.
#[derive(Debug, Clone)]
pub struct GraphStore {
    config: CanvasConfig,
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    next_label: u32,
    next_edge: u64,
    start: Option<NodeId>,
    finish: Option<NodeId>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl GraphStore {
    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Creates an empty store with the given canvas geometry.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_label: 1,
            next_edge: 1,
            start: None,
            finish: None,
        }
    }

    /// Canvas geometry the store was built with.
    pub fn config(&self) -> CanvasConfig {
        self.config
    }

    /// Deletes every node and edge and revokes both roles.
    ///
    /// The store afterwards is indistinguishable from a fresh one: label
    /// numbering restarts at 1.
    pub fn clear(&mut self, sink: &mut dyn CanvasSink) {
        self.nodes.clear();
        self.edges.clear();
        self.start = None;
        self.finish = None;
        self.next_label = 1;
        self.next_edge = 1;
        sink.graph_cleared();
    }

    // =========================================================================
    // NODE OPERATIONS
    // =========================================================================

    /// Adds a node centered at `position` and returns its label.
    ///
    /// Fails with `GeometryConflict` when the footprint would overlap (or
    /// touch) an existing node's footprint.
    pub fn add_node(&mut self, position: Point) -> GraphResult<NodeId> {
        let footprint = Rect::footprint(position, self.config.node_diameter);
        if self
            .nodes
            .values()
            .any(|node| footprint.intersects(&self.footprint_of(node)))
        {
            return Err(GraphError::GeometryConflict { position });
        }
        Ok(self.insert_node(position))
    }

    /// Allocates the next label and installs the node, skipping the collision
    /// test. Load path: saved layouts may legitimately overlap after drags.
    pub(crate) fn insert_node(&mut self, position: Point) -> NodeId {
        let id = NodeId(self.next_label);
        self.next_label += 1;
        self.nodes.insert(id, Node::new(id, position));
        self.debug_audit();
        id
    }

    /// Moves a node to `position`.
    ///
    /// Drag semantics: no overlap test is applied.
    pub fn move_node(&mut self, id: NodeId, position: Point) -> GraphResult<()> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::InvalidNode(id))?;
        node.set_position(position);
        Ok(())
    }

    /// Attaches a tooltip to a node. Empty text is rejected.
    pub fn set_tooltip(&mut self, id: NodeId, text: &str) -> GraphResult<()> {
        let text = validate::validate_tooltip(text)?;
        let node = self.nodes.get_mut(&id).ok_or(GraphError::InvalidNode(id))?;
        node.set_tooltip(text.to_string());
        Ok(())
    }

    /// Deletes a node together with every edge that touches it.
    ///
    /// Each neighbor drops its membership link and the connecting edge
    /// leaves the store. A directed edge owned by the deleted node is
    /// invisible from the far endpoint's incident set; that lookup miss is
    /// logged and the cleanup continues. Any role the node held is revoked.
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<()> {
        let neighbors: Vec<NodeId> = match self.nodes.get(&id) {
            Some(node) => node.neighbors().to_vec(),
            None => return Err(GraphError::InvalidNode(id)),
        };

        for neighbor in neighbors {
            match self.find_connecting_edge(neighbor, id) {
                Some(edge_id) => {
                    self.edges.remove(&edge_id);
                    if let Some(node) = self.nodes.get_mut(&neighbor) {
                        if let Err(err) = node.remove_incident(edge_id) {
                            warn!(node = %neighbor, edge = %edge_id, error = %err,
                                "incident link missing during node delete");
                        }
                        if let Err(err) = node.remove_neighbor(id) {
                            warn!(node = %neighbor, victim = %id, error = %err,
                                "neighbor link missing during node delete");
                        }
                    }
                }
                None => {
                    warn!(node = %neighbor, victim = %id,
                        "connecting edge missing during node delete");
                    if let Some(node) = self.nodes.get_mut(&neighbor) {
                        if let Err(err) = node.remove_neighbor(id) {
                            warn!(node = %neighbor, victim = %id, error = %err,
                                "neighbor link missing during node delete");
                        }
                    }
                }
            }
        }

        // Directed edges the node owns and any half-made drag edge appear in
        // no neighbor's incident set; sweep them out of the store directly.
        let own: Vec<EdgeId> = self
            .nodes
            .get(&id)
            .map(|node| node.incident_edges().to_vec())
            .unwrap_or_default();
        for edge_id in own {
            if self.edges.remove(&edge_id).is_some() {
                debug!(edge = %edge_id, node = %id, "edge removed with its node");
            }
        }

        if self.start == Some(id) {
            self.start = None;
        }
        if self.finish == Some(id) {
            self.finish = None;
        }
        self.nodes.remove(&id);
        self.debug_audit();
        Ok(())
    }

    // =========================================================================
    // EDGE OPERATIONS
    // =========================================================================

    /// Starts an interactive edge at `from`, far endpoint unbound.
    ///
    /// The dangling edge is linked into `from`'s incident set immediately so
    /// the shell can find and cancel it, but it participates in no adjacency
    /// until finalized. [`GraphStore::delete_edge`] is the cancel path.
    pub fn begin_edge(&mut self, from: NodeId) -> GraphResult<EdgeId> {
        let node = self.nodes.get_mut(&from).ok_or(GraphError::InvalidNode(from))?;
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        node.add_incident(id);
        self.edges.insert(id, Edge::new(id, from));
        self.debug_audit();
        Ok(id)
    }

    /// Binds the far endpoint of a dangling edge and completes the deferred
    /// neighbor bookkeeping.
    ///
    /// Self-loops and pairs that are already connected (in either
    /// orientation, directed or not) are rejected.
    pub fn finalize_edge(&mut self, id: EdgeId, to: NodeId) -> GraphResult<()> {
        let from = {
            let edge = self.edges.get(&id).ok_or(GraphError::InvalidEdge(id))?;
            if !edge.is_dangling() {
                return Err(GraphError::invalid_input(format!(
                    "edge {id} already has both endpoints"
                )));
            }
            edge.first()
        };
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::InvalidNode(to));
        }
        if to == from {
            return Err(GraphError::invalid_input(
                "an edge cannot join a node to itself",
            ));
        }
        if self.are_connected(from, to) {
            return Err(GraphError::invalid_input(format!(
                "nodes {from} and {to} are already connected"
            )));
        }

        if let Some(edge) = self.edges.get_mut(&id) {
            edge.bind_second(to);
        }
        if let Some(node) = self.nodes.get_mut(&from) {
            node.add_neighbor(to);
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.add_incident(id);
            node.add_neighbor(from);
        }
        self.debug_audit();
        Ok(())
    }

    /// Creates a complete undirected edge between two existing nodes in one
    /// step. Equivalent to begin + finalize.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> GraphResult<EdgeId> {
        if !self.nodes.contains_key(&a) {
            return Err(GraphError::InvalidNode(a));
        }
        if !self.nodes.contains_key(&b) {
            return Err(GraphError::InvalidNode(b));
        }
        if a == b {
            return Err(GraphError::invalid_input(
                "an edge cannot join a node to itself",
            ));
        }
        if self.are_connected(a, b) {
            return Err(GraphError::invalid_input(format!(
                "nodes {a} and {b} are already connected"
            )));
        }
        let id = self.begin_edge(a)?;
        self.finalize_edge(id, b)?;
        Ok(id)
    }

    /// Installs a complete edge with explicit weight and direction, with full
    /// bookkeeping. Restore path: weights arrive pre-parsed from the file.
    pub(crate) fn restore_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: u32,
        directed: bool,
    ) -> GraphResult<EdgeId> {
        let id = self.connect(a, b)?;
        if let Some(edge) = self.edges.get_mut(&id) {
            edge.set_weight(weight);
            if directed {
                edge.set_directed(true);
            }
        }
        if directed {
            // same one-sided shape interactive conversion produces
            if let Some(node) = self.nodes.get_mut(&b) {
                if let Err(err) = node.remove_incident(id) {
                    warn!(node = %b, edge = %id, error = %err,
                        "incident link missing during edge restore");
                }
            }
        }
        self.debug_audit();
        Ok(id)
    }

    /// Deletes an edge, dangling or complete.
    ///
    /// Each endpoint's incident and neighbor links are removed when present;
    /// a missing link (the far side of a directed edge gave up its incident
    /// entry at conversion time) is logged and skipped.
    pub fn delete_edge(&mut self, id: EdgeId) -> GraphResult<()> {
        let edge = self.edges.remove(&id).ok_or(GraphError::InvalidEdge(id))?;
        let (first, second) = edge.endpoints();
        self.unlink_endpoint(first, id, second);
        if let Some(second) = second {
            self.unlink_endpoint(second, id, Some(first));
        }
        self.debug_audit();
        Ok(())
    }

    /// Drops one endpoint's links to a removed edge, logging soft misses.
    fn unlink_endpoint(&mut self, node_id: NodeId, edge_id: EdgeId, other: Option<NodeId>) {
        let node = match self.nodes.get_mut(&node_id) {
            Some(node) => node,
            None => {
                warn!(node = %node_id, edge = %edge_id, "endpoint missing during edge delete");
                return;
            }
        };
        if let Err(err) = node.remove_incident(edge_id) {
            warn!(node = %node_id, edge = %edge_id, error = %err,
                "incident link missing during edge delete");
        }
        if let Some(other) = other {
            if let Err(err) = node.remove_neighbor(other) {
                warn!(node = %node_id, neighbor = %other, error = %err,
                    "neighbor link missing during edge delete");
            }
        }
    }

    /// Converts an edge to directed, attributing it to the endpoint whose
    /// footprint contains `anchor`.
    ///
    /// The owning endpoint becomes `first` (endpoints swap when the anchor
    /// sits on the far side) and the other endpoint's incident entry is
    /// dropped, so adjacency flows first→second only. Neighbor membership
    /// stays mutual for connectivity queries and delete cleanup. Converting
    /// an already-directed edge is a no-op.
    pub fn set_directed(
        &mut self,
        id: EdgeId,
        anchor: Point,
        sink: &mut dyn CanvasSink,
    ) -> GraphResult<()> {
        let (first, second, already_directed) = {
            let edge = self.edges.get(&id).ok_or(GraphError::InvalidEdge(id))?;
            let second = edge.second().ok_or_else(|| {
                GraphError::invalid_input(format!("edge {id} has no second endpoint yet"))
            })?;
            (edge.first(), second, edge.directed())
        };
        if already_directed {
            debug!(edge = %id, "edge is already directed");
            return Ok(());
        }

        let owner = if self.node_footprint(first)?.contains(anchor) {
            first
        } else if self.node_footprint(second)?.contains(anchor) {
            second
        } else {
            return Err(GraphError::invalid_input(format!(
                "anchor {anchor} touches neither endpoint of edge {id}"
            )));
        };
        let loser = if owner == first { second } else { first };

        if let Some(edge) = self.edges.get_mut(&id) {
            if edge.first() != owner {
                edge.swap_endpoints();
            }
            edge.set_directed(true);
        }
        if let Some(node) = self.nodes.get_mut(&loser) {
            if let Err(err) = node.remove_incident(id) {
                warn!(node = %loser, edge = %id, error = %err,
                    "incident link missing during directed conversion");
            }
        }
        sink.edge_directed(id);
        self.debug_audit();
        Ok(())
    }

    /// Sets an edge's weight from the raw dialog entry.
    pub fn set_weight(&mut self, id: EdgeId, input: &str) -> GraphResult<()> {
        let weight = validate::validate_weight(input)?;
        let edge = self.edges.get_mut(&id).ok_or(GraphError::InvalidEdge(id))?;
        edge.set_weight(weight);
        Ok(())
    }

    // =========================================================================
    // ROLES
    // =========================================================================

    /// Marks `id` as the unique holder of `role`, revoking any previous
    /// holder. A node may hold both roles at once.
    pub fn mark_role(&mut self, id: NodeId, role: Role) -> GraphResult<()> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::InvalidRole(id));
        }
        match role {
            Role::Start => self.start = Some(id),
            Role::Finish => self.finish = Some(id),
        }
        Ok(())
    }

    /// Current start node.
    pub fn start_node(&self) -> Option<NodeId> {
        self.start
    }

    /// Current finish node.
    pub fn finish_node(&self) -> Option<NodeId> {
        self.finish
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, dangling included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Looks up an edge.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Nodes in ascending label order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Live labels in ascending order.
    pub fn labels(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// True when any edge, directed or not, joins `a` and `b`.
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes.get(&a).map_or(false, |node| node.is_neighbor(b))
    }

    /// Footprint rectangle of a node, from its center and the configured
    /// diameter.
    pub fn node_footprint(&self, id: NodeId) -> GraphResult<Rect> {
        let node = self.nodes.get(&id).ok_or(GraphError::InvalidNode(id))?;
        Ok(self.footprint_of(node))
    }

    fn footprint_of(&self, node: &Node) -> Rect {
        Rect::footprint(node.position(), self.config.node_diameter)
    }

    /// Finds, in `from`'s incident set, the edge joining `from` and `to`.
    fn find_connecting_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        let node = self.nodes.get(&from)?;
        node.incident_edges()
            .iter()
            .copied()
            .find(|edge_id| {
                self.edges
                    .get(edge_id)
                    .map_or(false, |edge| edge.connects(from, to))
            })
    }

    /// Debug-build consistency sweep; release builds skip it.
    fn debug_audit(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_consistency() {
            panic!("graph bookkeeping violated: {err}");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
