//! chordal-td: heuristic tree decompositions via randomized chordal completion
//!
//! # Overview
//!
//! chordal-td computes tree decompositions of simple undirected graphs. Each
//! trial breaks every chordless cycle with random chords until the graph is
//! chordal, then reads the maximal cliques off a Lex-BFS perfect elimination
//! ordering. The narrowest of many trials wins.
//!
//! # Quick Start
//!
//! ```no_run
//! use chordal_td::{SolverConfig, TreewidthSolver, UndirectedGraph};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 5-cycle 1 - 2 - 3 - 4 - 5 - 1
//! let graph = UndirectedGraph::from_edge_list(
//!     &[1, 2, 3, 4, 5],
//!     &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)],
//! )?;
//!
//! let mut solver = TreewidthSolver::new(SolverConfig::default().with_seed(42));
//! let solution = solver.solve(&graph)?;
//! assert_eq!(solution.width(), 2);
//!
//! // PACE .td output
//! print!("{}", solution.decomposition.pace(graph.num_vertices()));
//!
//! // Save to Parquet
//! solution.decomposition.write_parquet("cycle").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: adjacency-list simple graph, PACE text I/O, Parquet persistence
//! - **Algorithms**: components, Lex-BFS, chordality test, chordless cycle
//!   enumeration, randomized chordalization, clique-tree construction
//! - **Solver**: strategy selection and best-of-k search with cooperative
//!   cancellation (`cancel-this`)
//! - **Input**: lenient host entry point over raw id and `"a-b"` edge lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod input;
pub mod solver;
pub mod storage;

// Re-export core types
pub use algorithms::{
    chordalize, chordless_cycles, default_pass_limit, find_components, is_chordal, lex_bfs,
    ChordalityCheck, Chordalization, ChordlessCycles, Components, TreeDecomposition,
};
pub use config::SolverConfig;
pub use error::DecompositionError;
pub use input::{run_treewidth, run_treewidth_with_config, DecompositionOutput};
pub use solver::{Solution, Strategy, TreewidthSolver};
pub use storage::{UndirectedGraph, VertexId};

// Error type
pub use anyhow::{Error, Result};
