//! Chordless cycle enumeration
//!
//! Based on Dias, de Castro & Rodrigues (2013), "Chordless cycles in
//! undirected graphs". Vertices get a min-degree labelling; every chordless
//! path `x - u - y` with `ℓ(u) < ℓ(x) < ℓ(y)` seeds a search that only extends
//! through vertices labelled above `ℓ(u)`, so each chordless cycle is reported
//! from exactly one seed. A vertex can join the path only while exactly one
//! path vertex is adjacent to it (its `blocked` count is 1), which keeps the
//! path induced.
//!
//! All scratch state (labels, blocked counters, triples, cycles) is owned by
//! one [`ChordlessCycles`] value and indexed by vertex id.

use crate::storage::UndirectedGraph;
use std::collections::BTreeSet;

/// Enumerator of the chordless cycles (length ≥ 4) of a graph
#[derive(Debug, Clone)]
pub struct ChordlessCycles<'a> {
    graph: &'a UndirectedGraph,

    /// Min-degree label per vertex id (1..=n, 0 = unlabelled)
    labels: Vec<usize>,

    /// Reference count of path vertices adjacent to each vertex
    blocked: Vec<u32>,

    /// Chordless paths `x - u - y` awaiting extension
    triples: BTreeSet<Vec<u32>>,

    /// Completed chordless cycles, in cyclic order
    cycles: BTreeSet<Vec<u32>>,
}

impl<'a> ChordlessCycles<'a> {
    /// Create an enumerator with fresh scratch state for `graph`
    #[must_use]
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        let bound = graph.id_bound();
        Self {
            graph,
            labels: vec![0; bound],
            blocked: vec![0; bound],
            triples: BTreeSet::new(),
            cycles: BTreeSet::new(),
        }
    }

    /// Label vertices by repeated min-residual-degree selection
    ///
    /// Ties go to the smallest vertex id. Residual degree counts unlabelled
    /// neighbours only.
    pub fn degree_labelling(&mut self) {
        let graph = self.graph;
        let mut residual = vec![0_usize; self.labels.len()];
        let mut queue: BTreeSet<(usize, u32)> = BTreeSet::new();
        for &v in graph.vertices() {
            residual[v as usize] = graph.degree(v);
            self.labels[v as usize] = 0;
            queue.insert((residual[v as usize], v));
        }

        let mut label = 0;
        while let Some((_, v)) = queue.pop_first() {
            label += 1;
            self.labels[v as usize] = label;
            for &w in graph.adj(v) {
                if self.labels[w as usize] == 0 {
                    let degree = &mut residual[w as usize];
                    queue.remove(&(*degree, w));
                    *degree = degree.saturating_sub(1);
                    queue.insert((*degree, w));
                }
            }
        }
    }

    /// Collect every chordless path `x - u - y` with `ℓ(u) < ℓ(x) < ℓ(y)`
    pub fn find_triples(&mut self) {
        let graph = self.graph;
        for &u in graph.vertices() {
            let lu = self.labels[u as usize];
            for &x in graph.adj(u) {
                let lx = self.labels[x as usize];
                if lx <= lu {
                    continue;
                }
                for &y in graph.adj(u) {
                    if lx < self.labels[y as usize] && !graph.is_adjacent(x, y) {
                        self.triples.insert(vec![x, u, y]);
                    }
                }
            }
        }
    }

    /// Pending triples (populated by [`Self::find_triples`])
    #[must_use]
    pub const fn triples(&self) -> &BTreeSet<Vec<u32>> {
        &self.triples
    }

    /// Min-degree label of a vertex (0 before labelling)
    #[must_use]
    pub fn label(&self, v: u32) -> usize {
        self.labels.get(v as usize).copied().unwrap_or(0)
    }

    fn block_neighbours(&mut self, v: u32) {
        for &w in self.graph.adj(v) {
            self.blocked[w as usize] += 1;
        }
    }

    fn unblock_neighbours(&mut self, v: u32) {
        for &w in self.graph.adj(v) {
            let count = &mut self.blocked[w as usize];
            *count = count.saturating_sub(1);
        }
    }

    /// Extend the chordless path `path` through vertices labelled above `key`
    ///
    /// Depth-first with one frame (next neighbour index) per path vertex from
    /// the current tail onwards. A vertex blocks its neighbours when its frame
    /// is pushed and unblocks them when the frame is popped.
    fn visit(&mut self, path: &mut Vec<u32>, key: usize) {
        let graph = self.graph;
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return;
        };

        self.block_neighbours(last);
        let mut frames: Vec<usize> = vec![0];

        while let Some(&next) = frames.last() {
            let Some(&tail) = path.last() else { break };

            let Some(&c) = graph.adj(tail).get(next) else {
                self.unblock_neighbours(tail);
                frames.pop();
                // The seed path belongs to the caller
                if !frames.is_empty() {
                    path.pop();
                }
                continue;
            };
            if let Some(top) = frames.last_mut() {
                *top += 1;
            }

            if self.labels[c as usize] <= key || self.blocked[c as usize] != 1 {
                continue;
            }

            path.push(c);
            if graph.is_adjacent(c, first) {
                self.cycles.insert(path.clone());
                path.pop();
            } else {
                self.block_neighbours(c);
                frames.push(0);
            }
        }
    }

    /// Enumerate every chordless cycle of length ≥ 4
    ///
    /// Runs [`Self::degree_labelling`] and [`Self::find_triples`], then drains
    /// the triples, extending each one. Triangles are not reported.
    ///
    /// # Example
    ///
    /// ```
    /// use chordal_td::{ChordlessCycles, UndirectedGraph};
    ///
    /// // Square 1 - 2 - 3 - 4 with a pendant 4 - 5
    /// let graph = UndirectedGraph::from_edge_list(
    ///     &[1, 2, 3, 4, 5],
    ///     &[(1, 2), (2, 3), (3, 4), (4, 1), (4, 5)],
    /// )
    /// .unwrap();
    ///
    /// let cycles = ChordlessCycles::new(&graph).enumerate();
    /// assert_eq!(cycles.len(), 1);
    /// assert_eq!(cycles.iter().next().map(Vec::len), Some(4));
    /// ```
    #[must_use]
    pub fn enumerate(mut self) -> BTreeSet<Vec<u32>> {
        self.degree_labelling();
        self.find_triples();
        self.blocked.iter_mut().for_each(|count| *count = 0);

        while let Some(triple) = self.triples.pop_first() {
            let u = triple[1];
            let key = self.labels[u as usize];
            let mut path = triple;

            self.block_neighbours(u);
            self.visit(&mut path, key);
            self.unblock_neighbours(u);
        }

        self.cycles
    }
}

/// Enumerate the chordless cycles of `graph` with fresh scratch state
#[must_use]
pub fn chordless_cycles(graph: &UndirectedGraph) -> BTreeSet<Vec<u32>> {
    ChordlessCycles::new(graph).enumerate()
}
