//! Graph algorithms for heuristic tree decomposition
//!
//! Pipeline: components → chordless cycles → random chords → Lex-BFS
//! chordality test → tree decomposition from the perfect elimination ordering.

pub mod chordal;
pub mod cycles;
pub mod decomposition;
pub mod lexbfs;
pub mod set_ops;
pub mod structure;
pub mod triangulate;

pub use chordal::{is_chordal, is_perfect_elimination_ordering, ChordalityCheck};
pub use cycles::{chordless_cycles, ChordlessCycles};
pub use decomposition::TreeDecomposition;
pub use lexbfs::lex_bfs;
pub use set_ops::{intersect, is_subset, set_minus, SubsetRelation};
pub use structure::{component_subgraphs, find_components, Components};
pub use triangulate::{add_random_chords, chordalize, default_pass_limit, Chordalization};
