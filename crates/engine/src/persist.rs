//! Three-file text persistence for a whole graph.
//!
//! A graph saves to companion files sharing one base name:
//!
//! - `<base>.txt` holds the adjacency matrix, one space-separated row per
//!   line, no trailing newline after the last row;
//! - `<base>.conf` holds node centers, one `<x> <y>` line per node;
//! - `<base>_tt.conf` holds tooltips, one `<label> <tooltip>` line per
//!   node, the tooltip possibly empty.
//!
//! Line `i` of every file describes the node in row `i` of the matrix, in
//! ascending label order. Loading is all-or-nothing: all three files are
//! parsed and cross-checked before the first node materializes, so a bad
//! file never leaves a half-built graph behind. Labels recorded in the
//! tooltip file are checked for shape but not trusted: a graph saved after
//! deletions carries gaps, and the rebuilt graph always numbers densely
//! from 1.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use graphboard_core::{CanvasConfig, GraphError, GraphResult, Point};
use tracing::debug;

use crate::canvas::CanvasSink;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::GraphStore;

const MATRIX_SUFFIX: &str = ".txt";
const LAYOUT_SUFFIX: &str = ".conf";
const TOOLTIP_SUFFIX: &str = "_tt.conf";

/// Writes the three companion files for `store` under `base`.
///
/// `base` may be given with or without the `.txt` extension; either way
/// the same three files come out. An empty store is refused so a stray
/// save cannot clobber existing files with an empty graph.
pub fn save(store: &GraphStore, base: impl AsRef<Path>) -> GraphResult<()> {
    let base = base.as_ref();
    if store.is_empty() {
        return Err(GraphError::invalid_input("canvas is empty, nothing to save"));
    }
    let (matrix_path, layout_path, tooltip_path) = companions(base);

    let matrix = store.to_matrix();
    let rows: Vec<String> = matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    write(&matrix_path, rows.join("\n"))?;

    let mut layout = String::new();
    for node in store.nodes() {
        let center = node.position();
        layout.push_str(&format!("{} {}\n", center.x, center.y));
    }
    write(&layout_path, layout)?;

    let mut tooltips = String::new();
    for node in store.nodes() {
        tooltips.push_str(&format!("{} {}\n", node.id(), node.tooltip().unwrap_or("")));
    }
    write(&tooltip_path, tooltips)?;

    debug!(base = %base.display(), nodes = store.node_count(), "graph saved");
    Ok(())
}

/// Rebuilds a graph from the three companion files under `base`.
///
/// Nodes materialize in file order at their recorded centers, each one
/// announced through [`CanvasSink::node_restored`]; edges are then replayed
/// from the matrix, directed ones announced through
/// [`CanvasSink::edge_directed`]. Any parse failure or cross-file mismatch
/// aborts before the store is built.
pub fn load(
    base: impl AsRef<Path>,
    config: CanvasConfig,
    sink: &mut dyn CanvasSink,
) -> GraphResult<GraphStore> {
    let base = base.as_ref();
    let (matrix_path, layout_path, tooltip_path) = companions(base);

    let positions = parse_layout(&layout_path)?;
    let tooltips = parse_tooltips(&tooltip_path)?;
    let cells = parse_matrix(&matrix_path)?;

    if positions.is_empty() {
        return Err(GraphError::malformed(&layout_path, "layout file holds no nodes"));
    }
    if tooltips.len() != positions.len() {
        return Err(GraphError::malformed(
            &tooltip_path,
            format!(
                "{} tooltip lines for {} nodes",
                tooltips.len(),
                positions.len()
            ),
        ));
    }
    if cells.len() != positions.len() {
        return Err(GraphError::malformed(
            &matrix_path,
            format!("{} matrix rows for {} nodes", cells.len(), positions.len()),
        ));
    }
    let matrix = AdjacencyMatrix::from_rows(cells)?;

    let mut store = GraphStore::new(config);
    for (position, tooltip) in positions.iter().zip(&tooltips) {
        let id = store.insert_node(*position);
        if let Some(text) = tooltip {
            store.set_tooltip(id, text)?;
        }
        sink.node_restored(id, *position, tooltip.as_deref());
    }
    store.restore_edges(&matrix, sink)?;

    debug!(
        base = %base.display(),
        nodes = store.node_count(),
        edges = store.edge_count(),
        "graph loaded"
    );
    Ok(store)
}

/// Resolves the three companion paths for a base name.
///
/// A trailing `.txt` is stripped first, so dialogs handing over the matrix
/// file name resolve to the same trio. Other dots in the name are kept
/// as-is.
fn companions(base: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let stem = if base.extension().map_or(false, |ext| ext == "txt") {
        base.with_extension("")
    } else {
        base.to_path_buf()
    };
    let append = |suffix: &str| {
        let mut name = OsString::from(stem.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    };
    (
        append(MATRIX_SUFFIX),
        append(LAYOUT_SUFFIX),
        append(TOOLTIP_SUFFIX),
    )
}

fn write(path: &Path, contents: String) -> GraphResult<()> {
    fs::write(path, contents).map_err(|source| GraphError::io(path, source))
}

fn read(path: &Path) -> GraphResult<String> {
    fs::read_to_string(path).map_err(|source| GraphError::io(path, source))
}

fn parse_layout(path: &Path) -> GraphResult<Vec<Point>> {
    let text = read(path)?;
    let mut positions = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let (x, y) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(GraphError::malformed(
                    path,
                    format!("line {}: expected \"<x> <y>\"", number + 1),
                ))
            }
        };
        let x: f64 = x.parse().map_err(|_| {
            GraphError::malformed(path, format!("line {}: bad coordinate {x:?}", number + 1))
        })?;
        let y: f64 = y.parse().map_err(|_| {
            GraphError::malformed(path, format!("line {}: bad coordinate {y:?}", number + 1))
        })?;
        positions.push(Point::new(x, y));
    }
    Ok(positions)
}

fn parse_tooltips(path: &Path) -> GraphResult<Vec<Option<String>>> {
    let text = read(path)?;
    let mut tooltips = Vec::new();
    for (number, line) in text.lines().enumerate() {
        // everything after the first space belongs to the tooltip, so
        // multi-word annotations survive the trip
        let (label, rest) = match line.split_once(' ') {
            Some((label, rest)) => (label, rest),
            None => (line, ""),
        };
        if label.parse::<u32>().is_err() {
            return Err(GraphError::malformed(
                path,
                format!("line {}: bad node label {label:?}", number + 1),
            ));
        }
        tooltips.push(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        });
    }
    Ok(tooltips)
}

fn parse_matrix(path: &Path) -> GraphResult<Vec<Vec<u32>>> {
    let text = read(path)?;
    let mut rows = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let weight: u32 = token.parse().map_err(|_| {
                GraphError::malformed(path, format!("line {}: bad weight {token:?}", number + 1))
            })?;
            row.push(weight);
        }
        rows.push(row);
    }
    let n = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(GraphError::malformed(
                path,
                format!("line {} holds {} weights, expected {n}", i + 1, row.len()),
            ));
        }
    }
    Ok(rows)
}
