//! Host entry point: lenient ingestion of vertex ids and `"<a>-<b>"` edges
//!
//! Hosts hand over raw counts, a vertex id list and edge descriptors as text.
//! Only the first `total_vertices` ids and `total_edges` descriptors are read.
//! Bad input is dropped, never reported as an error:
//! - non-positive or oversized vertex ids (`warn`)
//! - descriptors without `-` or with unparseable endpoints (`debug`)
//! - endpoints outside the vertex set, self-loops, duplicates (`debug`)
//!
//! Accepted ids are compacted to `1..=k` in ascending order before solving,
//! so memory follows the vertex count rather than the largest id. The order
//! is preserved, which keeps every smallest-id tie-break unchanged.

use crate::algorithms::TreeDecomposition;
use crate::config::SolverConfig;
use crate::solver::TreewidthSolver;
use crate::storage::UndirectedGraph;
use anyhow::Result;
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Decomposition in host form: bags as id lists, 1-based tree edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionOutput {
    /// Bags in index order, vertices ascending
    pub bags: Vec<Vec<u32>>,

    /// Tree edges as 1-based bag index pairs
    pub edges: Vec<(usize, usize)>,

    /// Width of the decomposition
    pub width: usize,

    /// The search was cut short by cancellation
    pub cancelled: bool,
}

impl DecompositionOutput {
    fn new(host: &HostGraph, decomposition: &TreeDecomposition, cancelled: bool) -> Self {
        Self {
            bags: decomposition
                .bags()
                .iter()
                .map(|bag| bag.iter().map(|&v| host.host_id(v)).collect())
                .collect(),
            edges: decomposition.one_based_edges(),
            width: decomposition.width(),
            cancelled,
        }
    }
}

/// Parse an edge descriptor `"<a>-<b>"` split at the first `-`
fn parse_edge(descriptor: &str) -> Option<(i64, i64)> {
    let (a, b) = descriptor.split_once('-')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// Host input as a compact simple graph
///
/// The graph's vertices are `1..=k`; [`Self::host_id`] maps them back to the
/// ids the host supplied.
#[derive(Debug, Clone)]
pub struct HostGraph {
    /// Compacted graph
    pub graph: UndirectedGraph,

    /// Host id of compact vertex `i + 1`, ascending
    ids: Vec<u32>,
}

impl HostGraph {
    /// Host id of a compact vertex (identity outside `1..=k`)
    #[must_use]
    pub fn host_id(&self, v: u32) -> u32 {
        v.checked_sub(1)
            .and_then(|i| self.ids.get(i as usize))
            .copied()
            .unwrap_or(v)
    }
}

/// Build a simple graph from host input, dropping everything invalid
///
/// # Errors
///
/// Never fails on bad input; the `Result` only carries internal failures
pub fn build_graph<S: AsRef<str>>(
    total_vertices: usize,
    total_edges: usize,
    vertices: &[i64],
    edges: &[S],
) -> Result<HostGraph> {
    let mut accepted = BTreeSet::new();
    for &id in vertices.iter().take(total_vertices) {
        match u32::try_from(id) {
            Ok(v) if v > 0 => {
                accepted.insert(v);
            }
            _ => warn!("Dropping invalid vertex id {id}"),
        }
    }

    let ids: Vec<u32> = accepted.into_iter().collect();
    let compact: BTreeMap<u32, u32> = (1..).zip(&ids).map(|(d, &v)| (v, d)).collect();
    let mut graph = UndirectedGraph::with_vertices(compact.values().copied())?;

    for descriptor in edges.iter().take(total_edges) {
        let descriptor = descriptor.as_ref();
        let Some((a, b)) = parse_edge(descriptor) else {
            debug!("Dropping malformed edge {descriptor:?}");
            continue;
        };

        let endpoint = |id: i64| u32::try_from(id).ok().and_then(|v| compact.get(&v).copied());
        let Some((u, v)) = endpoint(a).zip(endpoint(b)).filter(|&(u, v)| u != v) else {
            debug!("Dropping edge {descriptor:?}: endpoints not valid vertices");
            continue;
        };

        if !graph.add_edge(u, v)? {
            debug!("Dropping duplicate edge {descriptor:?}");
        }
    }

    Ok(HostGraph { graph, ids })
}

/// Compute a tree decomposition from host input with default settings
///
/// # Errors
///
/// Returns error only if chordalization fails internally
///
/// # Example
///
/// ```
/// use chordal_td::run_treewidth;
///
/// let out = run_treewidth(3, 3, &[1, 2, 3], &["1-2", "2-3", "1-3"]).unwrap();
/// assert_eq!(out.bags, vec![vec![1, 2, 3]]);
/// assert!(out.edges.is_empty());
/// assert_eq!(out.width, 2);
/// ```
pub fn run_treewidth<S: AsRef<str>>(
    total_vertices: usize,
    total_edges: usize,
    vertices: &[i64],
    edges: &[S],
) -> Result<DecompositionOutput> {
    run_treewidth_with_config(
        total_vertices,
        total_edges,
        vertices,
        edges,
        SolverConfig::default(),
    )
}

/// Compute a tree decomposition from host input
///
/// # Errors
///
/// Returns error if chordalization exceeds the configured pass bound
pub fn run_treewidth_with_config<S: AsRef<str>>(
    total_vertices: usize,
    total_edges: usize,
    vertices: &[i64],
    edges: &[S],
    config: SolverConfig,
) -> Result<DecompositionOutput> {
    let host = build_graph(total_vertices, total_edges, vertices, edges)?;
    let solution = TreewidthSolver::new(config).solve(&host.graph)?;
    Ok(DecompositionOutput::new(
        &host,
        &solution.decomposition,
        solution.cancelled,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("1-2"), Some((1, 2)));
        assert_eq!(parse_edge(" 10 - 20 "), Some((10, 20)));
        assert_eq!(parse_edge("12"), None);
        assert_eq!(parse_edge("a-2"), None);
        assert_eq!(parse_edge("-1-2"), None);
    }

    #[test]
    fn test_drops_malformed_and_unknown_edges() {
        let graph = build_graph(
            3,
            6,
            &[1, 2, 3],
            &["1-2", "12", "2-9", "0-1", "x-y", "2-3"],
        )
        .unwrap()
        .graph;

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.is_adjacent(1, 2));
        assert!(graph.is_adjacent(2, 3));
    }

    #[test]
    fn test_drops_duplicates_in_either_direction() {
        let graph = build_graph(2, 3, &[1, 2], &["1-2", "2-1", "1-2"]).unwrap().graph;
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_drops_self_loops() {
        let graph = build_graph(2, 2, &[1, 2], &["1-1", "1-2"]).unwrap().graph;
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_drops_non_positive_vertices() {
        let graph = build_graph(4, 0, &[0, -3, 1, 2], &[] as &[&str]).unwrap().graph;
        assert_eq!(graph.num_vertices(), 2);
    }

    #[test]
    fn test_reads_only_declared_prefix() {
        let graph = build_graph(2, 1, &[1, 2, 3], &["1-2", "2-3"]).unwrap().graph;
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_output_is_one_based() {
        let config = SolverConfig::default().with_seed(5);
        let out = run_treewidth_with_config(4, 2, &[1, 2, 3, 4], &["1-2", "3-4"], config).unwrap();

        assert_eq!(out.bags.len(), 3);
        assert!(out.bags[0].is_empty());
        assert_eq!(out.edges, vec![(1, 2), (1, 3)]);
        assert_eq!(out.width, 1);
        assert!(!out.cancelled);
    }

    #[test]
    fn test_large_ids_are_compacted() {
        let host = build_graph(3, 2, &[3_000_000_000, 7, 1], &["7-3000000000", "1-7"]).unwrap();

        assert_eq!(host.graph.num_vertices(), 3);
        assert_eq!(host.graph.max_vertex_id(), 3);
        assert!(host.graph.is_adjacent(1, 2));
        assert!(host.graph.is_adjacent(2, 3));
        assert_eq!(host.host_id(1), 1);
        assert_eq!(host.host_id(2), 7);
        assert_eq!(host.host_id(3), 3_000_000_000);
    }

    #[test]
    fn test_large_ids_round_trip_through_solver() {
        let out = run_treewidth(2, 1, &[1, 3_000_000_000], &["1-3000000000"]).unwrap();

        assert_eq!(out.bags, vec![vec![1, 3_000_000_000]]);
        assert!(out.edges.is_empty());
        assert_eq!(out.width, 1);
    }
}
