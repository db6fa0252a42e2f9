//! A full interactive session: draw, wire, annotate, direct, search, clear.

use graphboard::{
    apply_action, run_search, AlgorithmKind, BfsOptions, CanvasEvent, CanvasItem, EditorAction,
    GraphStore, NodeId, Point, RecordingCanvas,
};

#[test]
fn full_editor_session() {
    let mut canvas = RecordingCanvas::new();
    let mut graph = GraphStore::default();

    let hub = graph.add_node(Point::new(20.0, 20.0)).unwrap();
    let north = graph.add_node(Point::new(80.0, 20.0)).unwrap();
    let south = graph.add_node(Point::new(20.0, 80.0)).unwrap();
    let depot = graph.add_node(Point::new(80.0, 80.0)).unwrap();

    // a drop too close to the hub is refused and burns no label
    assert!(graph.add_node(Point::new(25.0, 20.0)).is_err());
    assert_eq!(graph.node_count(), 4);

    graph.connect(hub, north).unwrap();
    graph.connect(hub, south).unwrap();
    let freight = graph.connect(north, depot).unwrap();

    // the freight lane becomes one-way out of north, with a weight
    apply_action(
        &mut graph,
        CanvasItem::Edge(freight),
        EditorAction::MakeDirected {
            anchor: Point::new(80.0, 20.0),
        },
        &mut canvas,
    )
    .unwrap();
    apply_action(
        &mut graph,
        CanvasItem::Edge(freight),
        EditorAction::SetWeight { input: "12".into() },
        &mut canvas,
    )
    .unwrap();
    apply_action(
        &mut graph,
        CanvasItem::Node(hub),
        EditorAction::SetTooltip {
            input: "central hub".into(),
        },
        &mut canvas,
    )
    .unwrap();
    assert_eq!(graph.node(hub).unwrap().tooltip(), Some("central hub"));

    apply_action(
        &mut graph,
        CanvasItem::Node(hub),
        EditorAction::MarkStart,
        &mut canvas,
    )
    .unwrap();
    apply_action(
        &mut graph,
        CanvasItem::Node(depot),
        EditorAction::MarkFinish,
        &mut canvas,
    )
    .unwrap();

    let outcome = run_search(
        &graph,
        AlgorithmKind::Bfs,
        &BfsOptions::default(),
        &mut canvas,
    )
    .unwrap();
    assert!(outcome.reachable);
    assert_eq!(outcome.path, Some(vec![hub, north, depot]));

    // deleting north severs the only route to the depot
    apply_action(
        &mut graph,
        CanvasItem::Node(north),
        EditorAction::DeleteNode,
        &mut canvas,
    )
    .unwrap();
    assert!(graph.check_consistency().is_ok());
    assert!(graph.are_connected(hub, south));
    assert!(!graph.are_connected(hub, north));

    let outcome = run_search(
        &graph,
        AlgorithmKind::Bfs,
        &BfsOptions::default(),
        &mut canvas,
    )
    .unwrap();
    assert!(!outcome.reachable);
    assert_eq!(outcome.path, None);

    // wipe the canvas; numbering restarts like a fresh session
    graph.clear(&mut canvas);
    assert!(graph.is_empty());
    assert_eq!(graph.start_node(), None);
    assert!(canvas.events.contains(&CanvasEvent::GraphCleared));
    assert_eq!(graph.add_node(Point::new(20.0, 20.0)).unwrap(), NodeId(1));
}

#[test]
fn two_phase_edge_drawing() {
    let mut graph = GraphStore::default();
    let a = graph.add_node(Point::new(20.0, 20.0)).unwrap();
    let b = graph.add_node(Point::new(80.0, 20.0)).unwrap();

    // drag started on a, released over b
    let drag = graph.begin_edge(a).unwrap();
    assert!(graph.edge(drag).unwrap().is_dangling());
    assert!(!graph.are_connected(a, b));
    graph.finalize_edge(drag, b).unwrap();
    assert!(graph.are_connected(a, b));

    // drag started and released over empty canvas: cancelled
    let cancelled = graph.begin_edge(b).unwrap();
    graph.delete_edge(cancelled).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.check_consistency().is_ok());
}
