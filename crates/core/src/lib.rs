//! Foundation types for graphboard
//!
//! This crate carries everything the engine layers share:
//! - Identifiers: 1-based node labels and session-unique edge ids
//! - Error taxonomy: one enum covering mutation, traversal, and persistence
//! - Plane geometry: points, rectangles, and node footprints
//! - Canvas configuration: the geometry settings injected into the store
//!
//! Nothing here owns graph state; these are value types.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;

// Re-exports
pub use config::CanvasConfig;
pub use error::{GraphError, GraphResult};
pub use geometry::{Point, Rect};
pub use id::{EdgeId, NodeId};
