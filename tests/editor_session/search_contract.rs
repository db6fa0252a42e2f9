//! The search contract the shell relies on: event gating, scan order,
//! stubbed algorithm refusal.

use graphboard::{
    run_search, AlgorithmKind, BfsOptions, GraphError, GraphStore, NodeId, Point, RecordingCanvas,
    Role, ScanOrder,
};

/// Diamond: 1 at the top, 2 and 3 in the middle, 4 at the bottom, all
/// edges undirected.
fn diamond() -> GraphStore {
    let mut graph = GraphStore::default();
    let top = graph.add_node(Point::new(50.0, 10.0)).unwrap();
    let left = graph.add_node(Point::new(10.0, 50.0)).unwrap();
    let right = graph.add_node(Point::new(90.0, 50.0)).unwrap();
    let bottom = graph.add_node(Point::new(50.0, 90.0)).unwrap();
    graph.connect(top, left).unwrap();
    graph.connect(top, right).unwrap();
    graph.connect(left, bottom).unwrap();
    graph.connect(right, bottom).unwrap();
    graph.mark_role(top, Role::Start).unwrap();
    graph.mark_role(bottom, Role::Finish).unwrap();
    graph
}

#[test]
fn opened_events_stop_once_the_path_is_confirmed() {
    let graph = diamond();
    let mut canvas = RecordingCanvas::new();
    let outcome = run_search(
        &graph,
        AlgorithmKind::Bfs,
        &BfsOptions::default(),
        &mut canvas,
    )
    .unwrap();

    assert!(outcome.reachable);
    assert_eq!(outcome.path, Some(vec![NodeId(1), NodeId(2), NodeId(4)]));
    // the finish turns up while node 2 expands; node 3 dequeues later and
    // is recorded but never announced as opened
    assert_eq!(canvas.opened(), vec![NodeId(1), NodeId(2)]);
    assert_eq!(canvas.path_marks(), vec![NodeId(1), NodeId(2), NodeId(4)]);
    assert_eq!(outcome.visitation.len(), 4);
}

#[test]
fn scan_order_changes_the_route() {
    let graph = diamond();
    let mut canvas = RecordingCanvas::new();
    let outcome = run_search(
        &graph,
        AlgorithmKind::Bfs,
        &BfsOptions {
            scan_order: ScanOrder::Descending,
        },
        &mut canvas,
    )
    .unwrap();

    // high columns first: node 3 expands before node 2
    assert_eq!(outcome.path, Some(vec![NodeId(1), NodeId(3), NodeId(4)]));
}

#[test]
fn stubbed_algorithms_refuse_to_run() {
    let graph = diamond();
    let mut canvas = RecordingCanvas::new();
    for kind in [AlgorithmKind::Dfs, AlgorithmKind::Dijkstra] {
        let err = run_search(&graph, kind, &BfsOptions::default(), &mut canvas).unwrap_err();
        assert!(matches!(err, GraphError::Unsupported { .. }));
    }
    assert!(canvas.events.is_empty());
}

#[test]
fn missing_roles_abort_before_any_event() {
    let mut graph = GraphStore::default();
    graph.add_node(Point::new(50.0, 10.0)).unwrap();
    let mut canvas = RecordingCanvas::new();

    let err = run_search(
        &graph,
        AlgorithmKind::Bfs,
        &BfsOptions::default(),
        &mut canvas,
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::InvalidStart));
    assert!(canvas.events.is_empty());
}
