//! Graph storage layer
//!
//! Provides the adjacency-list graph, PACE text I/O and Parquet persistence
//! of tree decompositions.

pub mod graph;
pub mod pace;
#[cfg(feature = "storage")]
pub mod parquet;

pub use graph::{UndirectedGraph, VertexId};
