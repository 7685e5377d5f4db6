//! Tree decompositions from perfect elimination orderings
//!
//! Processing the ordering from its last vertex backwards, each vertex either
//! joins the bag that equals its higher neighbourhood `H`, or opens a new bag
//! `H ∪ {v}` hung below a bag that contains `H`. For a perfect elimination
//! ordering of a chordal graph, the bags are the maximal cliques and the width
//! is optimal for that graph.
//!
//! # Example
//!
//! ```
//! use chordal_td::{is_chordal, TreeDecomposition, UndirectedGraph};
//!
//! // Two triangles sharing the edge 2 - 3
//! let graph = UndirectedGraph::from_edge_list(
//!     &[1, 2, 3, 4],
//!     &[(1, 2), (1, 3), (2, 3), (2, 4), (3, 4)],
//! )
//! .unwrap();
//! let check = is_chordal(&graph);
//! assert!(check.is_chordal);
//!
//! let td = TreeDecomposition::from_elimination_ordering(&graph, &check.ordering);
//! assert_eq!(td.num_bags(), 2);
//! assert_eq!(td.width(), 2);
//! assert!(td.verify(&graph).is_ok());
//! ```

use super::set_ops::intersect;
use crate::error::DecompositionError;
use crate::storage::UndirectedGraph;
use std::collections::{BTreeSet, VecDeque};

/// Bags plus the tree edges between them (0-based bag indices)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeDecomposition {
    bags: Vec<BTreeSet<u32>>,
    edges: Vec<(usize, usize)>,
}

impl TreeDecomposition {
    /// Create empty decomposition (no bags)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decomposition from raw parts
    ///
    /// No validation happens here; call [`Self::verify`] to check the result.
    #[must_use]
    pub fn from_parts(bags: Vec<BTreeSet<u32>>, edges: Vec<(usize, usize)>) -> Self {
        Self { bags, edges }
    }

    /// Single bag holding every vertex
    ///
    /// Always valid; used when no trial finished for a component.
    #[must_use]
    pub fn trivial<I: IntoIterator<Item = u32>>(vertices: I) -> Self {
        Self {
            bags: vec![vertices.into_iter().collect()],
            edges: Vec::new(),
        }
    }

    /// Build a decomposition from an elimination ordering of `graph`
    ///
    /// `ordering` must list every vertex of `graph` once. When it is a perfect
    /// elimination ordering, the result is a valid tree decomposition.
    /// A vertex with no higher neighbour opens a bag attached to bag 0, which
    /// keeps the bag graph a single tree.
    #[must_use]
    pub fn from_elimination_ordering(graph: &UndirectedGraph, ordering: &[u32]) -> Self {
        let mut td = Self::new();
        let Some((&last, rest)) = ordering.split_last() else {
            return td;
        };

        let mut position = vec![usize::MAX; graph.id_bound()];
        for (i, &v) in ordering.iter().enumerate() {
            position[v as usize] = i;
        }

        td.bags.push(BTreeSet::from([last]));

        for (i, &v) in rest.iter().enumerate().rev() {
            let higher: BTreeSet<u32> = graph
                .adj(v)
                .iter()
                .copied()
                .filter(|&w| position[w as usize] > i)
                .collect();

            if let Some(bag) = td.bags.iter_mut().find(|bag| **bag == higher) {
                bag.insert(v);
                continue;
            }

            let parent = td
                .bags
                .iter()
                .position(|bag| intersect(&higher, bag).len() == higher.len())
                .unwrap_or(0);

            let mut bag = higher;
            bag.insert(v);
            td.edges.push((parent, td.bags.len()));
            td.bags.push(bag);
        }

        td
    }

    /// Join several decompositions under one empty root bag
    ///
    /// Bag 0 of the result is empty; each part's first bag is attached to it
    /// and the part's own edges are shifted by its offset. An empty root never
    /// raises the width.
    #[must_use]
    pub fn merge<I: IntoIterator<Item = Self>>(parts: I) -> Self {
        let mut merged = Self {
            bags: vec![BTreeSet::new()],
            edges: Vec::new(),
        };

        for part in parts {
            if part.bags.is_empty() {
                continue;
            }

            let offset = merged.bags.len();
            merged.edges.push((0, offset));
            merged
                .edges
                .extend(part.edges.iter().map(|&(a, b)| (a + offset, b + offset)));
            merged.bags.extend(part.bags);
        }

        merged
    }

    /// Bags in index order
    #[must_use]
    pub fn bags(&self) -> &[BTreeSet<u32>] {
        &self.bags
    }

    /// Tree edges as 0-based bag index pairs
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Tree edges as 1-based bag index pairs
    #[must_use]
    pub fn one_based_edges(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|&(a, b)| (a + 1, b + 1)).collect()
    }

    /// Get number of bags
    #[must_use]
    pub fn num_bags(&self) -> usize {
        self.bags.len()
    }

    /// Largest bag cardinality (0 without bags)
    #[must_use]
    pub fn max_bag_size(&self) -> usize {
        self.bags.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Width: largest bag size minus one (0 when there is no non-empty bag)
    #[must_use]
    pub fn width(&self) -> usize {
        self.max_bag_size().saturating_sub(1)
    }

    /// Check that this is a tree decomposition of `graph`
    ///
    /// Verifies, in order:
    /// 1. every vertex is in some bag
    /// 2. both endpoints of every edge share a bag
    /// 3. the bag graph is a tree (`bags - 1` edges, connected)
    /// 4. the bags holding any vertex form a connected subtree
    ///
    /// # Errors
    ///
    /// Returns [`DecompositionError::InvalidDecomposition`] naming the first
    /// violated condition
    pub fn verify(&self, graph: &UndirectedGraph) -> Result<(), DecompositionError> {
        let invalid = |msg: String| Err(DecompositionError::InvalidDecomposition(msg));

        for &v in graph.vertices() {
            if !self.bags.iter().any(|bag| bag.contains(&v)) {
                return invalid(format!("vertex {v} is in no bag"));
            }
        }

        for (u, v) in graph.edges() {
            if !self.bags.iter().any(|bag| bag.contains(&u) && bag.contains(&v)) {
                return invalid(format!("edge {u}-{v} is in no bag"));
            }
        }

        let n = self.bags.len();
        if n == 0 {
            return Ok(());
        }
        if self.edges.len() != n - 1 {
            return invalid(format!("{} tree edges for {n} bags", self.edges.len()));
        }

        let mut adjacency = vec![Vec::new(); n];
        for &(a, b) in &self.edges {
            if a >= n || b >= n || a == b {
                return invalid(format!("tree edge ({a}, {b}) is out of range"));
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        if reachable(&adjacency, 0, |_| true).len() != n {
            return invalid("bag graph is not connected".to_string());
        }

        for &v in graph.vertices() {
            let holding: Vec<usize> = (0..n).filter(|&i| self.bags[i].contains(&v)).collect();
            let subtree = reachable(&adjacency, holding[0], |i| self.bags[i].contains(&v));
            if subtree.len() != holding.len() {
                return invalid(format!("bags containing vertex {v} are not connected"));
            }
        }

        Ok(())
    }
}

/// Bag indices reachable from `start` through bags accepted by `keep`
fn reachable<F: Fn(usize) -> bool>(adjacency: &[Vec<usize>], start: usize, keep: F) -> Vec<usize> {
    let mut seen = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    seen[start] = true;

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in &adjacency[current] {
            if !seen[next] && keep(next) {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::chordal::is_chordal;

    fn graph(vertices: &[u32], edges: &[(u32, u32)]) -> UndirectedGraph {
        UndirectedGraph::from_edge_list(vertices, edges).unwrap()
    }

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    fn decompose(g: &UndirectedGraph) -> TreeDecomposition {
        let check = is_chordal(g);
        assert!(check.is_chordal);
        TreeDecomposition::from_elimination_ordering(g, &check.ordering)
    }

    #[test]
    fn test_empty_ordering() {
        let td = TreeDecomposition::from_elimination_ordering(&UndirectedGraph::new(), &[]);
        assert_eq!(td.num_bags(), 0);
        assert_eq!(td.width(), 0);
    }

    #[test]
    fn test_triangle_single_bag() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);
        let td = decompose(&g);

        assert_eq!(td.bags(), &[set(&[1, 2, 3])]);
        assert!(td.edges().is_empty());
        assert_eq!(td.width(), 2);
    }

    #[test]
    fn test_path_bags_are_edges() {
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
        let td = decompose(&g);

        assert_eq!(td.num_bags(), 3);
        assert_eq!(td.width(), 1);
        assert!(td.verify(&g).is_ok());
    }

    #[test]
    fn test_triangulated_square() {
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)]);
        let td = decompose(&g);

        assert_eq!(td.num_bags(), 2);
        assert_eq!(td.width(), 2);
        assert_eq!(td.edges().len(), 1);
        assert!(td.verify(&g).is_ok());
    }

    #[test]
    fn test_isolated_vertex_attaches_to_first_bag() {
        let g = graph(&[1, 2, 3], &[(1, 2)]);
        let td = TreeDecomposition::from_elimination_ordering(&g, &[3, 1, 2]);

        assert_eq!(td.num_bags(), 2);
        assert_eq!(td.edges(), &[(0, 1)]);
        assert!(td.verify(&g).is_ok());
    }

    #[test]
    fn test_merge_under_empty_root() {
        let a = TreeDecomposition::trivial([1, 2]);
        let b = TreeDecomposition::from_parts(vec![set(&[3, 4]), set(&[4, 5])], vec![(0, 1)]);
        let merged = TreeDecomposition::merge([a, b]);

        assert_eq!(merged.num_bags(), 4);
        assert!(merged.bags()[0].is_empty());
        assert_eq!(merged.edges(), &[(0, 1), (0, 2), (2, 3)]);
        assert_eq!(merged.one_based_edges(), vec![(1, 2), (1, 3), (3, 4)]);
        assert_eq!(merged.width(), 1);
    }

    #[test]
    fn test_merge_of_nothing_is_lone_root() {
        let merged = TreeDecomposition::merge(Vec::new());
        assert_eq!(merged.num_bags(), 1);
        assert_eq!(merged.width(), 0);
    }

    #[test]
    fn test_verify_rejects_missing_edge() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);
        let td = TreeDecomposition::from_parts(vec![set(&[1, 2]), set(&[2, 3])], vec![(0, 1)]);
        let err = td.verify(&g).unwrap_err();
        assert!(err.to_string().contains("edge 1-3"));
    }

    #[test]
    fn test_verify_rejects_broken_running_intersection() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let td = TreeDecomposition::from_parts(
            vec![set(&[1, 2]), set(&[3]), set(&[2, 3])],
            vec![(0, 1), (1, 2)],
        );
        let err = td.verify(&g).unwrap_err();
        assert!(err.to_string().contains("vertex 2"));
    }

    #[test]
    fn test_verify_rejects_cycle_in_bag_graph() {
        let g = graph(&[1, 2], &[(1, 2)]);
        let td = TreeDecomposition::from_parts(
            vec![set(&[1, 2]), set(&[1]), set(&[2])],
            vec![(0, 1), (1, 2), (2, 0)],
        );
        assert!(td.verify(&g).is_err());
    }
}
