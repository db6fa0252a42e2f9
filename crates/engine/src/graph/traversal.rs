//! Breadth-first traversal over an adjacency matrix snapshot.
//!
//! The engine treats the matrix as a reachability graph: a nonzero cell is
//! an edge, its weight plays no role in traversal cost. One run produces the
//! dequeue order, the discovered start-to-finish path when one exists, and a
//! stream of presentation events.
//!
//! Discovery of the finish does not stop the sweep. The queue keeps
//! draining so the whole connected component gets recorded, but once the
//! path is confirmed no further "opened" events fire and no new path is
//! derived.

use std::collections::VecDeque;

use graphboard_core::{GraphError, GraphResult, NodeId};
use tracing::debug;

use crate::canvas::CanvasSink;

use super::matrix::AdjacencyMatrix;
use super::types::{BfsOptions, BfsOutcome, ScanOrder, VisitRecord};

/// Runs breadth-first search from `start` toward `finish`.
///
/// Both labels must map to matrix rows; `InvalidStart` / `InvalidFinish`
/// abort the run before any sink event fires. Every node dequeued before
/// the finish is confirmed is announced through [`CanvasSink::node_opened`];
/// the confirmed chain is announced through
/// [`CanvasSink::path_node_marked`], start first, finish last.
///
/// The predecessor of each node is fixed at enqueue time, so the derived
/// path is a shortest path in edge count.
pub fn bfs(
    matrix: &AdjacencyMatrix,
    start: NodeId,
    finish: NodeId,
    options: &BfsOptions,
    sink: &mut dyn CanvasSink,
) -> GraphResult<BfsOutcome> {
    let start_ix = matrix.index_of(start).ok_or(GraphError::InvalidStart)?;
    let finish_ix = matrix.index_of(finish).ok_or(GraphError::InvalidFinish)?;
    let n = matrix.dim();

    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();
    let mut visitation: Vec<VisitRecord> = Vec::new();
    let mut path: Option<Vec<usize>> = None;

    let column_order: Vec<usize> = match options.scan_order {
        ScanOrder::Ascending => (0..n).collect(),
        ScanOrder::Descending => (0..n).rev().collect(),
    };

    visited[start_ix] = true;
    queue.push_back(start_ix);

    while let Some(current) = queue.pop_front() {
        let label = match matrix.label_at(current) {
            Some(label) => label,
            None => continue,
        };
        visitation.push(VisitRecord {
            index: current,
            label,
            on_path: path.as_ref().map_or(false, |chain| chain.contains(&current)),
        });
        if path.is_none() {
            sink.node_opened(label);
        }

        for &next in &column_order {
            if matrix.get(current, next) == 0 {
                continue;
            }
            if next == finish_ix && path.is_none() {
                let chain = reconstruct(&predecessor, start_ix, current, finish_ix);
                mark_path(&mut visitation, &chain);
                for &ix in &chain {
                    if let Some(label) = matrix.label_at(ix) {
                        sink.path_node_marked(label);
                    }
                }
                path = Some(chain);
            }
            if !visited[next] {
                visited[next] = true;
                predecessor[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    let reachable = path.is_some();
    debug!(
        visited = visitation.len(),
        reachable,
        order = ?visitation.iter().map(|r| r.label).collect::<Vec<_>>(),
        "breadth-first sweep finished"
    );
    let path = path.map(|chain| {
        chain
            .iter()
            .filter_map(|&ix| matrix.label_at(ix))
            .collect()
    });
    Ok(BfsOutcome {
        visitation,
        reachable,
        path,
    })
}

/// Walks the predecessor chain from the node that discovered the finish back
/// to the start, then appends the finish itself. Indices, start first.
fn reconstruct(
    predecessor: &[Option<usize>],
    start: usize,
    discovered_by: usize,
    finish: usize,
) -> Vec<usize> {
    let mut chain = vec![discovered_by];
    let mut cursor = discovered_by;
    while cursor != start {
        match predecessor[cursor] {
            Some(previous) => {
                chain.push(previous);
                cursor = previous;
            }
            None => break,
        }
    }
    chain.reverse();
    chain.push(finish);
    chain
}

/// Flags the already-recorded visits that sit on the confirmed chain.
/// Chain members dequeued later are flagged at record time instead.
fn mark_path(visitation: &mut [VisitRecord], chain: &[usize]) {
    for record in visitation.iter_mut() {
        if chain.contains(&record.index) {
            record.on_path = true;
        }
    }
}
