//! Error taxonomy for graph mutation, traversal, and persistence.
//!
//! One enum covers the whole workspace. Interactive mutations fail one at a
//! time and leave the store in its last consistent state; persistence
//! operations fail wholesale. [`GraphError::NotFound`] is the single soft
//! condition: delete cleanup logs it and keeps going.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::geometry::Point;
use crate::id::{EdgeId, NodeId};

/// Convenience alias used across the workspace.
pub type GraphResult<T> = Result<T, GraphError>;

/// Unified error type for the graph core.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Operation referenced a node that is not in the store.
    #[error("node {0} does not exist")]
    InvalidNode(NodeId),

    /// Operation referenced an edge that is not in the store.
    #[error("edge {0} does not exist")]
    InvalidEdge(EdgeId),

    /// Role assignment referenced a node that is not in the store.
    #[error("cannot assign role: node {0} does not exist")]
    InvalidRole(NodeId),

    /// Free-form input failed validation.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// A new node's footprint would overlap an existing node's footprint.
    #[error("node footprint at {position} overlaps an existing node")]
    GeometryConflict {
        /// Requested center of the rejected node.
        position: Point,
    },

    /// An expected link was missing during delete cleanup. Soft: callers
    /// log this and continue the broader delete.
    #[error("{what} not found")]
    NotFound {
        /// Description of the missing link.
        what: String,
    },

    /// Traversal was requested without a usable start node.
    #[error("start node is not set or no longer exists")]
    InvalidStart,

    /// Traversal was requested without a usable finish node.
    #[error("finish node is not set or no longer exists")]
    InvalidFinish,

    /// The selected algorithm has no implementation.
    #[error("algorithm {algorithm} is not implemented")]
    Unsupported {
        /// Settings label of the selected algorithm.
        algorithm: String,
    },

    /// A file operation failed.
    #[error("io failure on {}: {source}", path.display())]
    Io {
        /// File the operation touched.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A persistence file did not parse.
    #[error("malformed file {}: {reason}", path.display())]
    MalformedFile {
        /// File that failed to parse.
        path: PathBuf,
        /// First problem encountered.
        reason: String,
    },
}

impl GraphError {
    /// Builds an [`GraphError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Builds a soft [`GraphError::NotFound`].
    pub fn not_found(what: impl Into<String>) -> Self {
        GraphError::NotFound { what: what.into() }
    }

    /// Builds an [`GraphError::Unsupported`].
    pub fn unsupported(algorithm: impl Into<String>) -> Self {
        GraphError::Unsupported {
            algorithm: algorithm.into(),
        }
    }

    /// Wraps an io error together with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        GraphError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Builds a [`GraphError::MalformedFile`].
    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        GraphError::MalformedFile {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// True for the soft cleanup condition deletes log and skip.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_name_the_entity() {
        assert_eq!(GraphError::InvalidNode(NodeId(4)).to_string(), "node 4 does not exist");
        assert_eq!(GraphError::InvalidEdge(EdgeId(2)).to_string(), "edge 2 does not exist");
        assert_eq!(
            GraphError::InvalidRole(NodeId(9)).to_string(),
            "cannot assign role: node 9 does not exist"
        );
    }

    #[test]
    fn constructor_helpers_build_the_right_variants() {
        assert!(matches!(
            GraphError::invalid_input("bad"),
            GraphError::InvalidInput { .. }
        ));
        assert!(matches!(
            GraphError::unsupported("DFS"),
            GraphError::Unsupported { .. }
        ));
        assert!(matches!(
            GraphError::malformed("graph.txt", "ragged row"),
            GraphError::MalformedFile { .. }
        ));
    }

    #[test]
    fn not_found_is_the_only_soft_condition() {
        assert!(GraphError::not_found("neighbor 3 on node 1").is_not_found());
        assert!(!GraphError::InvalidNode(NodeId(1)).is_not_found());
        assert!(!GraphError::invalid_input("x").is_not_found());
    }

    #[test]
    fn geometry_conflict_reports_the_requested_center() {
        let err = GraphError::GeometryConflict {
            position: Point::new(12.0, 34.0),
        };
        assert_eq!(
            err.to_string(),
            "node footprint at (12, 34) overlaps an existing node"
        );
    }

    #[test]
    fn io_errors_carry_the_path() {
        let err = GraphError::io(
            "saves/level.conf",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let text = err.to_string();
        assert!(text.contains("saves/level.conf"), "got: {text}");
    }
}
