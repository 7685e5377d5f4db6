//! Lexicographic breadth-first search by partition refinement
//!
//! Based on Rose, Tarjan & Lueker (1976), "Algorithmic aspects of vertex
//! elimination on graphs".
//!
//! The search numbers vertices from `n` down to `1`. The returned ordering lists
//! them by number, so `ordering[0]` is the vertex visited last. On a chordal
//! graph this is a perfect elimination ordering; on any other graph it is only
//! a candidate that [`crate::is_chordal`] rejects.

use crate::storage::UndirectedGraph;
use std::collections::BTreeSet;

/// Compute a Lex-BFS ordering of all vertices
///
/// The partition starts as `{V}`. Each step takes the smallest vertex of the
/// first non-empty part, numbers it, and splits every remaining part `P` into
/// `P ∩ N(v)` (placed first) and `P \ N(v)`.
///
/// # Arguments
///
/// * `graph` - Graph to order
///
/// # Returns
///
/// Vertices in elimination order (position `i` holds `σ(i + 1)`)
///
/// # Example
///
/// ```
/// use chordal_td::{lex_bfs, UndirectedGraph};
///
/// // Path 1 - 2 - 3: the search starts at 1 and ends at 3
/// let graph = UndirectedGraph::from_edge_list(&[1, 2, 3], &[(1, 2), (2, 3)]).unwrap();
/// assert_eq!(lex_bfs(&graph), vec![3, 2, 1]);
/// ```
#[must_use]
pub fn lex_bfs(graph: &UndirectedGraph) -> Vec<u32> {
    let n = graph.num_vertices();
    let mut ordering = vec![0_u32; n];
    let mut partition: Vec<BTreeSet<u32>> = vec![graph.vertices().clone()];
    let mut numbered = vec![false; graph.id_bound()];

    for i in (0..n).rev() {
        partition.retain(|part| !part.is_empty());
        let Some(v) = partition.first_mut().and_then(BTreeSet::pop_first) else {
            break;
        };

        ordering[i] = v;
        numbered[v as usize] = true;

        let pivot: BTreeSet<u32> = graph
            .adj(v)
            .iter()
            .copied()
            .filter(|&w| !numbered[w as usize])
            .collect();
        if pivot.is_empty() {
            continue;
        }

        partition = refine(partition, &pivot);
    }

    ordering
}

/// Split every part by `pivot`, neighbours first
fn refine(partition: Vec<BTreeSet<u32>>, pivot: &BTreeSet<u32>) -> Vec<BTreeSet<u32>> {
    let mut refined = Vec::with_capacity(partition.len() * 2);

    for part in partition {
        let (inside, outside): (BTreeSet<u32>, BTreeSet<u32>) =
            part.into_iter().partition(|v| pivot.contains(v));

        if !inside.is_empty() {
            refined.push(inside);
        }
        if !outside.is_empty() {
            refined.push(outside);
        }
    }

    refined
}
