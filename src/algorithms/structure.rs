//! Graph structure: connected components and the cycle pre-check
//!
//! - `find_components`: depth-first scan numbering components from 1 in
//!   discovery order, plus a back-edge signal telling whether the graph has a cycle
//! - `component_subgraphs`: induced subgraph of each component
//!
//! # Example
//!
//! ```
//! use chordal_td::{find_components, UndirectedGraph};
//!
//! // Two components: 1 - 2 and 3 - 4 - 5 - 3
//! let graph = UndirectedGraph::from_edge_list(
//!     &[1, 2, 3, 4, 5],
//!     &[(1, 2), (3, 4), (4, 5), (5, 3)],
//! )
//! .unwrap();
//!
//! let components = find_components(&graph);
//! assert_eq!(components.count(), 2);
//! assert_eq!(components.component_of(4), Some(2));
//! assert!(components.cycle_found());
//! ```

use crate::storage::UndirectedGraph;
use std::collections::{BTreeMap, BTreeSet};

/// Vertex state during the DFS scan
#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// Not yet visited
    Unvisited,
    /// Currently on the DFS stack
    InProgress,
    /// Fully processed
    Done,
}

/// Result of [`find_components`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    /// Component id per vertex id (0 = not a vertex)
    component_of: Vec<usize>,

    /// Component id (1-based) -> its vertices
    members: BTreeMap<usize, BTreeSet<u32>>,

    /// Some edge reached an already finished vertex of the same DFS tree
    cycle_found: bool,
}

impl Components {
    /// Number of components
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Component id of a vertex (1-based)
    #[must_use]
    pub fn component_of(&self, v: u32) -> Option<usize> {
        self.component_of
            .get(v as usize)
            .copied()
            .filter(|&id| id != 0)
    }

    /// Vertices of a component
    #[must_use]
    pub fn members(&self, id: usize) -> Option<&BTreeSet<u32>> {
        self.members.get(&id)
    }

    /// Iterate over `(component id, vertices)` in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<u32>)> + '_ {
        self.members.iter().map(|(&id, set)| (id, set))
    }

    /// Whether the scan saw a back edge (the graph has a cycle)
    #[must_use]
    pub const fn cycle_found(&self) -> bool {
        self.cycle_found
    }
}

/// Find connected components with a depth-first scan
///
/// Vertices are scanned in ascending id order; each unvisited vertex starts a
/// new component, numbered from 1 upward.
///
/// # Arguments
///
/// * `graph` - The graph to analyze
///
/// # Returns
///
/// [`Components`] with the per-vertex assignment, the member sets and the
/// cycle signal
#[must_use]
pub fn find_components(graph: &UndirectedGraph) -> Components {
    let bound = graph.id_bound();
    let mut state = vec![VisitState::Unvisited; bound];
    let mut components = Components {
        component_of: vec![0; bound],
        members: BTreeMap::new(),
        cycle_found: false,
    };

    let mut next_id = 0;
    for &start in graph.vertices() {
        if state[start as usize] == VisitState::Unvisited {
            next_id += 1;
            components.members.insert(next_id, BTreeSet::new());
            dfs_visit(graph, start, next_id, &mut state, &mut components);
        }
    }

    components
}

/// DFS from `start`, assigning everything reached to component `id`
///
/// Uses an explicit stack of `(vertex, next neighbour index)` frames, so the
/// depth is bounded by the heap rather than the call stack.
fn dfs_visit(
    graph: &UndirectedGraph,
    start: u32,
    id: usize,
    state: &mut [VisitState],
    components: &mut Components,
) {
    let mut stack: Vec<(u32, usize)> = vec![(start, 0)];
    enter(start, id, state, components);

    while let Some(&(v, next)) = stack.last() {
        let Some(&w) = graph.adj(v).get(next) else {
            state[v as usize] = VisitState::Done;
            stack.pop();
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }

        match state[w as usize] {
            VisitState::Done => {
                // w finished inside v's subtree and still points back at v
                components.cycle_found = true;
            }
            VisitState::Unvisited => {
                enter(w, id, state, components);
                stack.push((w, 0));
            }
            VisitState::InProgress => {}
        }
    }
}

/// Mark `v` as on the stack and record it in component `id`
fn enter(v: u32, id: usize, state: &mut [VisitState], components: &mut Components) {
    state[v as usize] = VisitState::InProgress;
    components.component_of[v as usize] = id;
    if let Some(set) = components.members.get_mut(&id) {
        set.insert(v);
    }
}

/// Induced subgraph for every component, in component id order
#[must_use]
pub fn component_subgraphs(graph: &UndirectedGraph, components: &Components) -> Vec<UndirectedGraph> {
    components
        .iter()
        .map(|(_, members)| graph.induced_subgraph(members))
        .collect()
}
