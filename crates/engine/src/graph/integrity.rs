//! Pairwise bookkeeping audit over the whole store.
//!
//! Every mutation leaves redundant links behind: an edge names its
//! endpoints, each endpoint lists the edge, neighbors list each other. The
//! audit walks all of them and reports the first contradiction. Debug builds
//! run it after every structural mutation; callers can invoke it directly
//! after a load or before a save.

use std::collections::HashSet;

use graphboard_core::{GraphError, GraphResult, NodeId};

use super::GraphStore;

impl GraphStore {
    /// Verifies that nodes, edges, and role marks agree with each other.
    ///
    /// Checked per edge: both endpoints are live, the owner's incident set
    /// lists the edge exactly once, the far endpoint lists it exactly once
    /// when undirected and never when directed, and complete edges have
    /// mutual neighbor membership. Checked per node: incident entries point
    /// at live edges that touch the node, neighbor entries are live and
    /// backed by a connecting edge, and neither list holds duplicates. No
    /// unordered node pair may be joined by more than one edge, and role
    /// marks must point at live nodes.
    pub fn check_consistency(&self) -> GraphResult<()> {
        if let Some(start) = self.start {
            if !self.nodes.contains_key(&start) {
                return fail(format!("start mark points at dead node {start}"));
            }
        }
        if let Some(finish) = self.finish {
            if !self.nodes.contains_key(&finish) {
                return fail(format!("finish mark points at dead node {finish}"));
            }
        }

        for (id, edge) in &self.edges {
            if edge.id() != *id {
                return fail(format!("edge {id} stored under key {}", edge.id()));
            }
            let first = edge.first();
            let Some(owner) = self.nodes.get(&first) else {
                return fail(format!("edge {id} names dead endpoint {first}"));
            };
            let listed = owner.incident_edges().iter().filter(|e| **e == *id).count();
            if listed != 1 {
                return fail(format!(
                    "node {first} lists edge {id} {listed} times, expected 1"
                ));
            }

            let Some(second) = edge.second() else {
                continue;
            };
            let Some(target) = self.nodes.get(&second) else {
                return fail(format!("edge {id} names dead endpoint {second}"));
            };
            let listed = target.incident_edges().iter().filter(|e| **e == *id).count();
            if edge.directed() {
                if listed != 0 {
                    return fail(format!(
                        "directed edge {id} still listed by its target {second}"
                    ));
                }
            } else if listed != 1 {
                return fail(format!(
                    "node {second} lists edge {id} {listed} times, expected 1"
                ));
            }
            if !owner.is_neighbor(second) {
                return fail(format!(
                    "edge {id} joins {first} and {second} but {first} does not list {second}"
                ));
            }
            if !target.is_neighbor(first) {
                return fail(format!(
                    "edge {id} joins {first} and {second} but {second} does not list {first}"
                ));
            }
        }

        for (id, node) in &self.nodes {
            if node.id() != *id {
                return fail(format!("node {id} stored under key {}", node.id()));
            }
            let mut seen_edges = HashSet::new();
            for edge_id in node.incident_edges() {
                if !seen_edges.insert(*edge_id) {
                    return fail(format!("node {id} lists edge {edge_id} twice"));
                }
                let Some(edge) = self.edges.get(edge_id) else {
                    return fail(format!("node {id} lists dead edge {edge_id}"));
                };
                if edge.first() != *id && edge.second() != Some(*id) {
                    return fail(format!(
                        "node {id} lists edge {edge_id} which does not touch it"
                    ));
                }
            }
            let mut seen_neighbors = HashSet::new();
            for neighbor in node.neighbors() {
                if !seen_neighbors.insert(*neighbor) {
                    return fail(format!("node {id} lists neighbor {neighbor} twice"));
                }
                if *neighbor == *id {
                    return fail(format!("node {id} lists itself as a neighbor"));
                }
                if !self.nodes.contains_key(neighbor) {
                    return fail(format!("node {id} lists dead neighbor {neighbor}"));
                }
                if !self
                    .edges
                    .values()
                    .any(|edge| edge.connects(*id, *neighbor))
                {
                    return fail(format!(
                        "nodes {id} and {neighbor} list each other with no connecting edge"
                    ));
                }
            }
        }

        let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
        for edge in self.edges.values() {
            let Some(second) = edge.second() else {
                continue;
            };
            let first = edge.first();
            let key = if first <= second {
                (first, second)
            } else {
                (second, first)
            };
            if !pairs.insert(key) {
                return fail(format!(
                    "nodes {} and {} are joined by more than one edge",
                    key.0, key.1
                ));
            }
        }

        Ok(())
    }
}

fn fail(reason: String) -> GraphResult<()> {
    Err(GraphError::invalid_input(reason))
}
