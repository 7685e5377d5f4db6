//! Chordality test over a Lex-BFS ordering
//!
//! A graph is chordal iff its Lex-BFS ordering is a perfect elimination
//! ordering. The check walks the ordering once, pushing each vertex's higher
//! neighbourhood (minus its nearest higher neighbour `u`) onto `u`, and then
//! requires every vertex to be adjacent to everything pushed onto it.

use super::lexbfs::lex_bfs;
use crate::storage::UndirectedGraph;

/// Outcome of [`is_chordal`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordalityCheck {
    /// The ordering is a perfect elimination ordering
    pub is_chordal: bool,

    /// The Lex-BFS ordering that was tested
    pub ordering: Vec<u32>,
}

/// Test whether `graph` is chordal
///
/// Runs [`lex_bfs`] and checks the result with
/// [`is_perfect_elimination_ordering`]. When chordal, `ordering` can be fed
/// straight into [`crate::TreeDecomposition::from_elimination_ordering`].
///
/// # Example
///
/// ```
/// use chordal_td::{is_chordal, UndirectedGraph};
///
/// let square = UndirectedGraph::from_edge_list(
///     &[1, 2, 3, 4],
///     &[(1, 2), (2, 3), (3, 4), (4, 1)],
/// )
/// .unwrap();
/// assert!(!is_chordal(&square).is_chordal);
///
/// let mut triangulated = square.clone();
/// triangulated.add_edge(1, 3).unwrap();
/// assert!(is_chordal(&triangulated).is_chordal);
/// ```
#[must_use]
pub fn is_chordal(graph: &UndirectedGraph) -> ChordalityCheck {
    let ordering = lex_bfs(graph);
    let is_chordal = is_perfect_elimination_ordering(graph, &ordering);

    ChordalityCheck {
        is_chordal,
        ordering,
    }
}

/// Check that `ordering` is a perfect elimination ordering of `graph`
///
/// `ordering` must list every vertex of `graph` exactly once. Returns `false`
/// as soon as some vertex misses an edge to a vertex pushed onto it.
#[must_use]
pub fn is_perfect_elimination_ordering(graph: &UndirectedGraph, ordering: &[u32]) -> bool {
    let bound = graph.id_bound();
    let mut position = vec![usize::MAX; bound];
    for (i, &v) in ordering.iter().enumerate() {
        position[v as usize] = i;
    }

    // pending[u]: vertices that must all be adjacent to u
    let mut pending: Vec<Vec<u32>> = vec![Vec::new(); bound];

    for &v in ordering.iter().take(ordering.len().saturating_sub(1)) {
        let pos_v = position[v as usize];
        let mut higher: Vec<u32> = graph
            .adj(v)
            .iter()
            .copied()
            .filter(|&w| position[w as usize] > pos_v)
            .collect();

        let nearest = higher
            .iter()
            .enumerate()
            .min_by_key(|&(_, &w)| position[w as usize])
            .map(|(idx, &w)| (idx, w));

        if let Some((idx, u)) = nearest {
            higher.swap_remove(idx);
            pending[u as usize].extend(higher);
        }

        if pending[v as usize].iter().any(|&w| !graph.is_adjacent(v, w)) {
            return false;
        }
    }

    true
}
