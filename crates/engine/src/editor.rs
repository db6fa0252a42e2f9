//! Typed dispatch from shell selections to store mutations.
//!
//! The shell reports what was clicked and what was chosen from the context
//! menu; the pairing is resolved here with a typed match instead of
//! downcasting, so a node action aimed at an edge is rejected before the
//! store is touched.

use graphboard_core::{EdgeId, GraphError, GraphResult, NodeId, Point};
use serde::{Deserialize, Serialize};

use crate::canvas::CanvasSink;
use crate::graph::types::Role;
use crate::graph::GraphStore;

/// A selectable item on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasItem {
    /// A node, by label.
    Node(NodeId),
    /// An edge, by id.
    Edge(EdgeId),
}

/// An action requested against the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    /// Delete the selected node together with its edges.
    DeleteNode,
    /// Delete the selected edge.
    DeleteEdge,
    /// Mark the selected node as the traversal start.
    MarkStart,
    /// Mark the selected node as the traversal finish.
    MarkFinish,
    /// Convert the selected edge to directed, attributed to the endpoint
    /// under the anchor.
    MakeDirected {
        /// Canvas point the conversion gesture touched.
        anchor: Point,
    },
    /// Set the selected edge's weight from a raw dialog entry.
    SetWeight {
        /// Raw text, validated before use.
        input: String,
    },
    /// Set the selected node's tooltip from a raw dialog entry.
    SetTooltip {
        /// Raw text, validated before use.
        input: String,
    },
}

/// Applies `action` to the selected `item`.
///
/// A mismatched pairing fails with `InvalidInput` and leaves the store
/// untouched; everything else forwards to the corresponding
/// [`GraphStore`] operation.
pub fn apply_action(
    store: &mut GraphStore,
    item: CanvasItem,
    action: EditorAction,
    sink: &mut dyn CanvasSink,
) -> GraphResult<()> {
    match (item, action) {
        (CanvasItem::Node(id), EditorAction::DeleteNode) => store.delete_node(id),
        (CanvasItem::Node(id), EditorAction::MarkStart) => store.mark_role(id, Role::Start),
        (CanvasItem::Node(id), EditorAction::MarkFinish) => store.mark_role(id, Role::Finish),
        (CanvasItem::Node(id), EditorAction::SetTooltip { input }) => {
            store.set_tooltip(id, &input)
        }
        (CanvasItem::Edge(id), EditorAction::DeleteEdge) => store.delete_edge(id),
        (CanvasItem::Edge(id), EditorAction::MakeDirected { anchor }) => {
            store.set_directed(id, anchor, sink)
        }
        (CanvasItem::Edge(id), EditorAction::SetWeight { input }) => store.set_weight(id, &input),
        (item, action) => Err(GraphError::invalid_input(format!(
            "action {action:?} does not apply to {item:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use crate::canvas::{NullCanvas, RecordingCanvas};

    use super::*;

    fn two_nodes() -> (GraphStore, NodeId, NodeId, EdgeId) {
        let mut store = GraphStore::default();
        let a = store.add_node(Point::new(10.0, 10.0)).unwrap();
        let b = store.add_node(Point::new(50.0, 10.0)).unwrap();
        let edge = store.connect(a, b).unwrap();
        (store, a, b, edge)
    }

    #[test]
    fn node_actions_reach_the_store() {
        let (mut store, a, b, _edge) = two_nodes();
        let mut sink = NullCanvas;

        apply_action(
            &mut store,
            CanvasItem::Node(a),
            EditorAction::MarkStart,
            &mut sink,
        )
        .unwrap();
        assert_eq!(store.start_node(), Some(a));

        apply_action(
            &mut store,
            CanvasItem::Node(b),
            EditorAction::SetTooltip {
                input: "depot".into(),
            },
            &mut sink,
        )
        .unwrap();
        assert_eq!(store.node(b).unwrap().tooltip(), Some("depot"));

        apply_action(
            &mut store,
            CanvasItem::Node(b),
            EditorAction::DeleteNode,
            &mut sink,
        )
        .unwrap();
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn edge_actions_reach_the_store() {
        let (mut store, a, _b, edge) = two_nodes();
        let mut canvas = RecordingCanvas::new();

        apply_action(
            &mut store,
            CanvasItem::Edge(edge),
            EditorAction::SetWeight { input: "7".into() },
            &mut canvas,
        )
        .unwrap();
        assert_eq!(store.edge(edge).unwrap().weight(), 7);

        apply_action(
            &mut store,
            CanvasItem::Edge(edge),
            EditorAction::MakeDirected {
                anchor: Point::new(10.0, 10.0),
            },
            &mut canvas,
        )
        .unwrap();
        let converted = store.edge(edge).unwrap();
        assert!(converted.directed());
        assert_eq!(converted.first(), a);
        assert_eq!(canvas.directed_edges(), vec![edge]);
    }

    #[test]
    fn mismatched_pairings_are_rejected_untouched() {
        let (mut store, a, _b, edge) = two_nodes();
        let mut sink = NullCanvas;

        let err = apply_action(
            &mut store,
            CanvasItem::Node(a),
            EditorAction::DeleteEdge,
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));

        let err = apply_action(
            &mut store,
            CanvasItem::Edge(edge),
            EditorAction::MarkFinish,
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.finish_node(), None);
    }

    #[test]
    fn actions_serialize_for_session_capture() {
        let action = EditorAction::SetWeight { input: "42".into() };
        let json = serde_json::to_string(&action).unwrap();
        let back: EditorAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);

        let item = CanvasItem::Edge(EdgeId(3));
        let json = serde_json::to_string(&item).unwrap();
        let back: CanvasItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
