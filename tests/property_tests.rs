//! Property-based tests for chordal-td
//!
//! Verifies decomposition and chordalization invariants for arbitrary simple
//! graphs

use chordal_td::algorithms::{
    intersect, is_perfect_elimination_ordering, is_subset, set_minus, SubsetRelation,
};
use chordal_td::{
    chordalize, chordless_cycles, default_pass_limit, is_chordal, lex_bfs, SolverConfig,
    TreeDecomposition, TreewidthSolver, UndirectedGraph,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

// Property: every solve yields a valid tree decomposition
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_solution_is_tree_decomposition(graph in prop_simple_graph(1..=9_u32), seed in any::<u64>()) {
        let config = SolverConfig::default()
            .with_seed(seed)
            .with_connected_trials(3)
            .with_component_trials(2);
        let solution = TreewidthSolver::new(config).solve(&graph).unwrap();

        prop_assert!(!solution.cancelled);
        prop_assert!(solution.decomposition.verify(&graph).is_ok());
        prop_assert!(solution.width() < graph.num_vertices().max(1));
    }
}

// Property: chordalization reaches a chordal supergraph with fresh chords only
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_chordalize_fixed_point(graph in prop_simple_graph(1..=9_u32), seed in any::<u64>()) {
        let mut completed = graph.clone();
        let limit = default_pass_limit(&completed);
        let mut rng = StdRng::seed_from_u64(seed);
        let result = chordalize(&mut completed, &mut rng, limit).unwrap();

        // Fixed point: the returned ordering is a PEO of the completed graph
        prop_assert!(is_chordal(&completed).is_chordal);
        prop_assert!(is_perfect_elimination_ordering(&completed, &result.ordering));

        // Input edges survive, chords are new, distinct and loop-free
        for (u, v) in graph.edges() {
            prop_assert!(completed.is_adjacent(u, v));
        }
        let mut seen = BTreeSet::new();
        for &(u, v) in &result.chords {
            prop_assert_ne!(u, v);
            prop_assert!(!graph.is_adjacent(u, v));
            prop_assert!(seen.insert((u.min(v), u.max(v))));
        }
        prop_assert_eq!(completed.num_edges(), graph.num_edges() + result.chords.len());

        // The decomposition of the completed graph also covers the input graph
        let td = TreeDecomposition::from_elimination_ordering(&completed, &result.ordering);
        prop_assert!(td.verify(&completed).is_ok());
        prop_assert!(td.verify(&graph).is_ok());
    }
}

// Property: a graph is chordal exactly when it has no chordless cycle
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_chordless_cycles_match_chordality(graph in prop_simple_graph(1..=8_u32)) {
        let cycles = chordless_cycles(&graph);
        prop_assert_eq!(cycles.is_empty(), is_chordal(&graph).is_chordal);

        for cycle in &cycles {
            let k = cycle.len();
            prop_assert!(k >= 4);
            for i in 0..k {
                for j in (i + 1)..k {
                    let consecutive = j == i + 1 || (i == 0 && j == k - 1);
                    prop_assert_eq!(graph.is_adjacent(cycle[i], cycle[j]), consecutive);
                }
            }
        }
    }
}

// Property: Lex-BFS orders every vertex exactly once
proptest! {
    #[test]
    fn prop_lex_bfs_is_permutation(graph in prop_simple_graph(0..=12_u32)) {
        let mut ordering = lex_bfs(&graph);
        ordering.sort_unstable();
        let expected: Vec<u32> = graph.vertices().iter().copied().collect();
        prop_assert_eq!(ordering, expected);
    }
}

// Property: set operations satisfy the usual algebra laws
proptest! {
    #[test]
    fn prop_set_algebra(a in prop_vertex_set(), b in prop_vertex_set()) {
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
        prop_assert!(set_minus(&a, &a).is_empty());
        prop_assert_eq!(is_subset(&a, &a), SubsetRelation::Equal);

        let common = intersect(&a, &b);
        prop_assert_ne!(is_subset(&common, &a), SubsetRelation::NotSubset);
        prop_assert!(intersect(&set_minus(&a, &b), &b).is_empty());

        let mut union = a.clone();
        union.extend(&b);
        let expected = if a.len() == union.len() {
            SubsetRelation::Equal
        } else {
            SubsetRelation::Proper
        };
        prop_assert_eq!(is_subset(&a, &union), expected);
    }
}

// Property: Parquet roundtrip preserves the decomposition
#[cfg(feature = "storage")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_parquet_roundtrip(graph in prop_simple_graph(1..=8_u32), seed in any::<u64>()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        runtime.block_on(async {
            let config = SolverConfig::default().with_seed(seed).with_connected_trials(2);
            let td = TreewidthSolver::new(config).solve(&graph).unwrap().decomposition;

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("prop_test_td");

            td.write_parquet(&path).await.unwrap();
            let loaded = TreeDecomposition::read_parquet(&path).await.unwrap();

            prop_assert_eq!(loaded, td);

            Ok(())
        })?;
    }
}

// Helper: Generate arbitrary simple graph on vertices 1..=n
fn prop_simple_graph(
    num_vertices: impl Strategy<Value = u32>,
) -> impl Strategy<Value = UndirectedGraph> {
    num_vertices.prop_flat_map(|n| {
        let pairs: Vec<(u32, u32)> = (1..=n)
            .flat_map(|u| ((u + 1)..=n).map(move |v| (u, v)))
            .collect();
        let count = pairs.len();
        prop::collection::vec(any::<bool>(), count).prop_map(move |keep| {
            let vertices: Vec<u32> = (1..=n).collect();
            let edges: Vec<(u32, u32)> = pairs
                .iter()
                .zip(keep)
                .filter_map(|(&pair, k)| k.then_some(pair))
                .collect();
            UndirectedGraph::from_edge_list(&vertices, &edges).unwrap()
        })
    })
}

// Helper: Generate arbitrary vertex set
fn prop_vertex_set() -> impl Strategy<Value = BTreeSet<u32>> {
    prop::collection::btree_set(1u32..30, 0..12)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_graph_solution() {
        let solution = TreewidthSolver::default().solve(&UndirectedGraph::new()).unwrap();
        assert_eq!(solution.decomposition.num_bags(), 0);
        assert!(solution.decomposition.verify(&UndirectedGraph::new()).is_ok());
    }

    #[test]
    fn test_complete_graph_width() {
        let vertices: Vec<u32> = (1..=5).collect();
        let edges: Vec<(u32, u32)> = (1..=5)
            .flat_map(|u| ((u + 1)..=5).map(move |v| (u, v)))
            .collect();
        let graph = UndirectedGraph::from_edge_list(&vertices, &edges).unwrap();

        let solution = TreewidthSolver::new(SolverConfig::default().with_seed(0))
            .solve(&graph)
            .unwrap();
        assert_eq!(solution.width(), 4);
        assert_eq!(solution.decomposition.num_bags(), 1);
    }
}
