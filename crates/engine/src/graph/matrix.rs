//! Dense adjacency snapshots of the live graph.
//!
//! The matrix is the exchange format between the store, the traversal
//! engine, and the on-disk files: rows and columns stand for nodes in
//! ascending label order, cells hold edge weights, zero means no edge. A
//! directed edge fills only its owner's row; an undirected edge fills both
//! mirror cells.

use graphboard_core::{GraphError, GraphResult, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::CanvasSink;

use super::GraphStore;

/// Weighted adjacency matrix with an explicit row-to-label mapping.
///
/// Deleted labels are never resurrected, so a live graph's label set can
/// have gaps; row `i` maps to the i-th smallest live label and the matrix
/// stays dense regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    labels: Vec<NodeId>,
    cells: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from raw rows, assigning the fresh labels `1..=n`.
    ///
    /// This is the load path: the file records no labels, and a rebuilt
    /// graph always numbers its nodes densely from 1.
    pub fn from_rows(cells: Vec<Vec<u32>>) -> GraphResult<Self> {
        let n = cells.len();
        for (i, row) in cells.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::invalid_input(format!(
                    "matrix row {} holds {} cells, expected {n}",
                    i + 1,
                    row.len()
                )));
            }
        }
        let labels = (1..=n as u32).map(NodeId).collect();
        Ok(Self { labels, cells })
    }

    /// Side length.
    pub fn dim(&self) -> usize {
        self.cells.len()
    }

    /// Weight stored in row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i][j]
    }

    /// Label that row `i` stands for.
    pub fn label_at(&self, i: usize) -> Option<NodeId> {
        self.labels.get(i).copied()
    }

    /// Row index a label maps to.
    pub fn index_of(&self, label: NodeId) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }

    /// Raw rows, outer index first.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Labels in row order.
    pub fn labels(&self) -> &[NodeId] {
        &self.labels
    }
}

impl GraphStore {
    /// Snapshots the current adjacency as a dense matrix.
    ///
    /// Dangling edges contribute nothing. The snapshot is detached: later
    /// store mutations do not touch it.
    pub fn to_matrix(&self) -> AdjacencyMatrix {
        let labels = self.labels();
        let n = labels.len();
        let mut cells = vec![vec![0u32; n]; n];
        for edge in self.edges() {
            let second = match edge.second() {
                Some(second) => second,
                None => continue,
            };
            let i = match labels.binary_search(&edge.first()) {
                Ok(i) => i,
                Err(_) => continue,
            };
            let j = match labels.binary_search(&second) {
                Ok(j) => j,
                Err(_) => continue,
            };
            cells[i][j] = edge.weight();
            if !edge.directed() {
                cells[j][i] = edge.weight();
            }
        }
        AdjacencyMatrix { labels, cells }
    }

    /// Replays a matrix onto the store's existing nodes, creating every edge
    /// it describes.
    ///
    /// The matrix side must equal the node count; rows pair with nodes in
    /// ascending label order. A symmetric cell pair becomes one undirected
    /// edge when the mirror cell is reached second; a cell whose mirror is
    /// zero becomes a directed edge owned by the row node, announced through
    /// the sink. Diagonal cells are ignored.
    pub fn restore_edges(
        &mut self,
        matrix: &AdjacencyMatrix,
        sink: &mut dyn CanvasSink,
    ) -> GraphResult<()> {
        if matrix.dim() != self.node_count() {
            return Err(GraphError::invalid_input(format!(
                "matrix is {0}x{0} but the store holds {1} nodes",
                matrix.dim(),
                self.node_count()
            )));
        }
        let n = matrix.dim();
        for i in 0..n {
            for j in 0..n {
                let weight = matrix.get(i, j);
                if weight == 0 {
                    continue;
                }
                if i == j {
                    debug!(row = i, "ignoring self-loop cell");
                    continue;
                }
                let (a, b) = match (matrix.label_at(i), matrix.label_at(j)) {
                    (Some(a), Some(b)) => (a, b),
                    _ => continue,
                };
                if self.are_connected(a, b) {
                    // mirror cell of an edge replayed earlier
                    continue;
                }
                let directed = matrix.get(j, i) == 0;
                let id = self.restore_edge(a, b, weight, directed)?;
                if directed {
                    sink.edge_directed(id);
                }
            }
        }
        Ok(())
    }
}
