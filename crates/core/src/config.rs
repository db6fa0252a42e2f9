//! Canvas configuration injected into the store and the persistence codec.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Geometry settings the graph core needs from the canvas.
///
/// The footprint diameter drives the collision test on node placement and
/// the anchor test on directed conversion. Positions are node centers, so
/// the codec needs no corner/center offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Side of the square footprint a node occupies on the canvas.
    pub node_diameter: f64,
}

impl CanvasConfig {
    /// Builds a config, rejecting non-positive or non-finite diameters.
    pub fn new(node_diameter: f64) -> GraphResult<Self> {
        if !node_diameter.is_finite() || node_diameter <= 0.0 {
            return Err(GraphError::invalid_input(format!(
                "node diameter must be positive and finite, got {node_diameter}"
            )));
        }
        Ok(Self { node_diameter })
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { node_diameter: 20.0 }
    }
}

// =============================================================================
// TESTS
// =============================================================================
