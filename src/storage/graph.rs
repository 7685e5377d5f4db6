//! Simple undirected graph over positive vertex ids
//!
//! Adjacency is stored per vertex id in a `Vec` indexed by id, so ids are
//! assumed to live in `1..=max_id`. Id 0 is reserved.
//!
//! ```text
//! Graph: 1 - 2, 2 - 3, 1 - 3, 3 - 4
//!
//! adjacency:
//!   [0]: []          // reserved
//!   [1]: [2, 3]
//!   [2]: [1, 3]
//!   [3]: [2, 1, 4]
//!   [4]: [3]
//! ```

use crate::error::DecompositionError;
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

/// Vertex identifier (positive, not necessarily contiguous)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Undirected simple graph
///
/// Invariants:
/// - adjacency is symmetric
/// - no self-loops, no parallel edges
/// - every endpoint is an active vertex
///
/// Cloning deep-copies the adjacency, so every trial of the solver can mutate
/// its own copy.
///
/// # Example
///
/// ```
/// use chordal_td::{UndirectedGraph, VertexId};
///
/// let mut graph = UndirectedGraph::with_vertices([1, 2, 3]).unwrap();
/// graph.add_edge(1, 2).unwrap();
/// graph.add_edge(2, 3).unwrap();
///
/// assert_eq!(graph.neighbors(VertexId(2)).unwrap().len(), 2);
/// assert!(!graph.add_edge(3, 2).unwrap()); // already present
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    /// Neighbor lists indexed by vertex id (index 0 unused)
    adjacency: Vec<Vec<u32>>,

    /// Active vertex ids, ascending
    vertices: BTreeSet<u32>,

    /// Number of undirected edges
    num_edges: usize,
}

impl UndirectedGraph {
    /// Create new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: vec![Vec::new()],
            vertices: BTreeSet::new(),
            num_edges: 0,
        }
    }

    /// Create graph with the given vertices and no edges
    ///
    /// Duplicate ids are merged.
    ///
    /// # Errors
    ///
    /// Returns error if any id is 0
    pub fn with_vertices<I: IntoIterator<Item = u32>>(vertices: I) -> Result<Self> {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v)?;
        }
        Ok(graph)
    }

    /// Create graph from a vertex list and an edge list
    ///
    /// Construction is strict: the input must already describe a simple graph.
    ///
    /// # Errors
    ///
    /// Returns a [`DecompositionError`] if a vertex id is 0, an endpoint is not
    /// in `vertices`, an edge is a self-loop, or an edge repeats (either direction)
    pub fn from_edge_list(vertices: &[u32], edges: &[(u32, u32)]) -> Result<Self> {
        let mut graph = Self::with_vertices(vertices.iter().copied())?;

        for &(u, v) in edges {
            if !graph.add_edge(u, v)? {
                return Err(DecompositionError::ParallelEdge(u, v).into());
            }
        }

        Ok(graph)
    }

    /// Add an isolated vertex (no-op if present)
    ///
    /// # Errors
    ///
    /// Returns error if `v` is 0
    pub fn add_vertex(&mut self, v: u32) -> Result<()> {
        if v == 0 {
            return Err(DecompositionError::InvalidVertex(v).into());
        }

        let idx = v as usize;
        if idx >= self.adjacency.len() {
            self.adjacency.resize_with(idx + 1, Vec::new);
        }
        self.vertices.insert(v);

        Ok(())
    }

    /// Add undirected edge `u - v`
    ///
    /// Returns `Ok(false)` if the edge is already present.
    ///
    /// # Errors
    ///
    /// Returns error for a self-loop or an endpoint that is not a vertex
    pub fn add_edge(&mut self, u: u32, v: u32) -> Result<bool, DecompositionError> {
        if u == v {
            return Err(DecompositionError::SelfLoop(u));
        }
        for endpoint in [u, v] {
            if !self.contains_vertex(endpoint) {
                return Err(DecompositionError::UnknownVertex(endpoint));
            }
        }

        if self.is_adjacent(u, v) {
            return Ok(false);
        }

        self.adjacency[u as usize].push(v);
        self.adjacency[v as usize].push(u);
        self.num_edges += 1;

        Ok(true)
    }

    /// Get neighbors of a vertex
    ///
    /// # Errors
    ///
    /// Returns error if the vertex is not in the graph
    pub fn neighbors(&self, vertex: VertexId) -> Result<&[u32]> {
        if !self.contains_vertex(vertex.0) {
            return Err(anyhow!("Vertex {} not in graph", vertex.0));
        }

        Ok(&self.adjacency[vertex.0 as usize])
    }

    /// Neighbor list of an active vertex (empty for unknown ids)
    pub(crate) fn adj(&self, v: u32) -> &[u32] {
        match self.adjacency.get(v as usize) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Check whether `u - v` is an edge
    #[must_use]
    pub fn is_adjacent(&self, u: u32, v: u32) -> bool {
        // Scan the shorter list
        let (a, b) = if self.adj(u).len() <= self.adj(v).len() {
            (u, v)
        } else {
            (v, u)
        };
        self.adj(a).contains(&b)
    }

    /// Check whether `v` is an active vertex
    #[must_use]
    pub fn contains_vertex(&self, v: u32) -> bool {
        self.vertices.contains(&v)
    }

    /// Active vertex ids in ascending order
    #[must_use]
    pub const fn vertices(&self) -> &BTreeSet<u32> {
        &self.vertices
    }

    /// Degree of a vertex (0 for unknown ids)
    #[must_use]
    pub fn degree(&self, v: u32) -> usize {
        self.adj(v).len()
    }

    /// Get number of vertices
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get number of edges
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Largest vertex id (0 for an empty graph)
    #[must_use]
    pub fn max_vertex_id(&self) -> u32 {
        self.vertices.last().copied().unwrap_or(0)
    }

    /// Size of vertex-indexed scratch storage (`max_id + 1`)
    #[must_use]
    pub(crate) fn id_bound(&self) -> usize {
        self.max_vertex_id() as usize + 1
    }

    /// Iterate over edges as `(u, v)` with `u < v`
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.vertices.iter().flat_map(move |&u| {
            self.adj(u)
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| (u, v))
        })
    }

    /// Subgraph induced by `keep`
    ///
    /// Ids outside the graph are ignored. Vertex ids are preserved.
    #[must_use]
    pub fn induced_subgraph(&self, keep: &BTreeSet<u32>) -> Self {
        let mut sub = Self::new();
        let kept: Vec<u32> = keep
            .iter()
            .copied()
            .filter(|&v| self.contains_vertex(v))
            .collect();

        if let Some(&max) = kept.last() {
            sub.adjacency.resize_with(max as usize + 1, Vec::new);
        }
        for &v in &kept {
            sub.vertices.insert(v);
        }

        for &u in &kept {
            for &v in self.adj(u) {
                if keep.contains(&v) {
                    sub.adjacency[u as usize].push(v);
                    if u < v {
                        sub.num_edges += 1;
                    }
                }
            }
        }

        sub
    }
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}
