//! Save/load through real files on disk.

use graphboard::{
    load, save, CanvasConfig, GraphError, GraphStore, NodeId, NullCanvas, Point, RecordingCanvas,
};
use tempfile::TempDir;

#[test]
fn a_session_survives_the_disk() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("campus");

    let mut canvas = RecordingCanvas::new();
    let mut graph = GraphStore::default();
    let gate = graph.add_node(Point::new(15.0, 15.0)).unwrap();
    let quad = graph.add_node(Point::new(70.0, 15.0)).unwrap();
    let hall = graph.add_node(Point::new(70.0, 70.0)).unwrap();
    graph.set_tooltip(gate, "main gate").unwrap();
    graph.connect(gate, quad).unwrap();
    let lane = graph.connect(quad, hall).unwrap();
    graph.set_weight(lane, "9").unwrap();
    graph
        .set_directed(lane, Point::new(70.0, 15.0), &mut canvas)
        .unwrap();

    save(&graph, &base).unwrap();
    let restored = load(&base, CanvasConfig::default(), &mut canvas).unwrap();

    assert_eq!(restored.node_count(), 3);
    assert_eq!(restored.to_matrix(), graph.to_matrix());
    assert_eq!(
        restored.node(NodeId(1)).unwrap().tooltip(),
        Some("main gate")
    );
    assert_eq!(
        restored.node(NodeId(3)).unwrap().position(),
        Point::new(70.0, 70.0)
    );
    let lane = restored.edges().find(|e| e.directed()).unwrap();
    assert_eq!(lane.weight(), 9);
    assert_eq!(lane.first(), NodeId(2));
    assert!(restored.check_consistency().is_ok());

    // roles are session state, not file state
    assert_eq!(restored.start_node(), None);
    assert_eq!(restored.finish_node(), None);
}

#[test]
fn loading_garbage_leaves_no_graph_behind() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("broken");

    // layout promises two nodes, matrix delivers three rows
    std::fs::write(dir.path().join("broken.conf"), "10 10\n50 10\n").unwrap();
    std::fs::write(dir.path().join("broken_tt.conf"), "1 \n2 \n").unwrap();
    std::fs::write(dir.path().join("broken.txt"), "0 1 0\n1 0 0\n0 0 0").unwrap();

    let mut canvas = RecordingCanvas::new();
    let err = load(&base, CanvasConfig::default(), &mut canvas).unwrap_err();
    assert!(matches!(err, GraphError::MalformedFile { .. }));
    // nothing was materialized before the failure
    assert!(canvas.events.is_empty());
}

#[test]
fn saving_an_empty_canvas_is_refused() {
    let dir = TempDir::new().unwrap();
    let err = save(&GraphStore::default(), dir.path().join("empty")).unwrap_err();
    assert!(matches!(err, GraphError::InvalidInput { .. }));
    assert!(!dir.path().join("empty.txt").exists());
}

#[test]
fn saved_files_reload_under_the_matrix_file_name() {
    let dir = TempDir::new().unwrap();
    let mut graph = GraphStore::default();
    graph.add_node(Point::new(15.0, 15.0)).unwrap();
    graph.add_node(Point::new(70.0, 15.0)).unwrap();
    graph.connect(NodeId(1), NodeId(2)).unwrap();
    save(&graph, dir.path().join("campus")).unwrap();

    // a file picker hands back the matrix file itself
    let restored = load(
        dir.path().join("campus.txt"),
        CanvasConfig::default(),
        &mut NullCanvas,
    )
    .unwrap();
    assert_eq!(restored.node_count(), 2);
    assert!(restored.are_connected(NodeId(1), NodeId(2)));
}
