//! Randomized chordal completion
//!
//! Each pass enumerates the chordless cycles, breaks every cycle that no chord
//! of this pass already touches with `|C| - 3` random chords, and re-runs the
//! chordality test. Every pass on a non-chordal graph adds at least one edge,
//! so the loop is bounded by the number of missing edges.

use super::chordal::is_chordal;
use super::cycles::chordless_cycles;
use crate::error::DecompositionError;
use crate::storage::UndirectedGraph;
use cancel_this::is_cancelled;
use log::trace;
use rand::Rng;
use std::collections::BTreeSet;

/// Outcome of [`chordalize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chordalization {
    /// Perfect elimination ordering of the completed graph
    pub ordering: Vec<u32>,

    /// Chords added across all passes, in insertion order
    pub chords: Vec<(u32, u32)>,

    /// Passes executed
    pub passes: usize,
}

/// Upper bound on chordalization passes: missing edges + 1
#[must_use]
pub fn default_pass_limit(graph: &UndirectedGraph) -> usize {
    let n = graph.num_vertices();
    let complete = n.saturating_mul(n.saturating_sub(1)) / 2;
    complete.saturating_sub(graph.num_edges()) + 1
}

/// Add random chords to every cycle in `cycles`
///
/// A cycle is skipped when some chord added earlier in this call has both
/// endpoints on it. For the rest, starting at a random position, the walk
/// repeatedly jumps to a random vertex 2..=|C|-2 steps ahead and joins the two
/// vertices unless they are already adjacent.
///
/// # Returns
///
/// The chords actually inserted
///
/// # Errors
///
/// Returns error if a cycle names a vertex that is not in `graph`
pub fn add_random_chords<R: Rng>(
    graph: &mut UndirectedGraph,
    cycles: &BTreeSet<Vec<u32>>,
    rng: &mut R,
) -> Result<Vec<(u32, u32)>, DecompositionError> {
    let mut chords: Vec<(u32, u32)> = Vec::new();

    for cycle in cycles {
        let size = cycle.len();
        if size < 4 {
            continue;
        }

        let broken = chords
            .iter()
            .any(|(a, b)| cycle.contains(a) && cycle.contains(b));
        if broken {
            continue;
        }

        let mut at = rng.random_range(0..size);
        for _ in 0..size - 3 {
            let next = (at + 2 + rng.random_range(0..size - 3)) % size;
            let (u, v) = (cycle[at], cycle[next]);

            if graph.add_edge(u, v)? {
                chords.push((u, v));
            }
            at = next;
        }
    }

    Ok(chords)
}

/// Complete `graph` to a chordal graph in place
///
/// Repeats cycle enumeration, [`add_random_chords`] and [`is_chordal`] until
/// the graph is chordal. Checks for cancellation before every pass.
///
/// # Arguments
///
/// * `graph` - Graph to complete (mutated)
/// * `rng` - Random source for chord selection
/// * `max_passes` - Pass bound (see [`default_pass_limit`])
///
/// # Errors
///
/// - [`DecompositionError::ChordalizationDiverged`] if `max_passes` passes run
///   without reaching a chordal graph
/// - [`DecompositionError::Cancelled`] if cancellation is requested
///
/// # Example
///
/// ```
/// use chordal_td::{chordalize, default_pass_limit, UndirectedGraph};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut graph = UndirectedGraph::from_edge_list(
///     &[1, 2, 3, 4],
///     &[(1, 2), (2, 3), (3, 4), (4, 1)],
/// )
/// .unwrap();
/// let limit = default_pass_limit(&graph);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = chordalize(&mut graph, &mut rng, limit).unwrap();
///
/// assert_eq!(result.chords.len(), 1);
/// assert_eq!(graph.num_edges(), 5);
/// ```
pub fn chordalize<R: Rng>(
    graph: &mut UndirectedGraph,
    rng: &mut R,
    max_passes: usize,
) -> Result<Chordalization, DecompositionError> {
    let mut chords = Vec::new();
    let mut passes = 0;

    loop {
        is_cancelled!()?;
        if passes >= max_passes {
            return Err(DecompositionError::ChordalizationDiverged { passes });
        }
        passes += 1;

        let cycles = chordless_cycles(graph);
        let added = add_random_chords(graph, &cycles, rng)?;
        trace!(
            "Chordalization pass {passes}: {} chordless cycles, {} chords added",
            cycles.len(),
            added.len()
        );
        chords.extend(added);

        let check = is_chordal(graph);
        if check.is_chordal {
            return Ok(Chordalization {
                ordering: check.ordering,
                chords,
                passes,
            });
        }
    }
}
