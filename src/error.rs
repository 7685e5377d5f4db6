//! Typed errors for graph construction, chordalization and decomposition
//!
//! Public APIs return [`anyhow::Result`]; these variants travel inside the
//! `anyhow::Error` and can be recovered with `downcast_ref::<DecompositionError>()`.

use cancel_this::Cancelled;
use thiserror::Error;

/// Failures raised by the graph and decomposition algorithms
#[derive(Debug, Error)]
pub enum DecompositionError {
    /// Vertex id 0 is reserved (ids live in `1..=max_id`)
    #[error("Vertex id {0} is invalid: ids must be positive")]
    InvalidVertex(u32),

    /// Edge endpoint that was never declared as a vertex
    #[error("Vertex {0} is not part of the graph")]
    UnknownVertex(u32),

    /// Edge from a vertex to itself
    #[error("Self-loop on vertex {0} is not allowed in a simple graph")]
    SelfLoop(u32),

    /// Edge given twice (in either direction)
    #[error("Parallel edge {0}-{1} is not allowed in a simple graph")]
    ParallelEdge(u32, u32),

    /// Randomized chordal completion did not reach a chordal graph in time
    #[error("Chordalization did not converge after {passes} passes")]
    ChordalizationDiverged {
        /// Passes executed before giving up
        passes: usize,
    },

    /// A tree decomposition failed verification
    #[error("Invalid tree decomposition: {0}")]
    InvalidDecomposition(String),

    /// Cooperative cancellation was observed
    #[error("Computation cancelled: {0}")]
    Cancelled(Cancelled),
}

impl From<Cancelled> for DecompositionError {
    fn from(value: Cancelled) -> Self {
        Self::Cancelled(value)
    }
}

impl DecompositionError {
    /// True if this error only reports a cancellation
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
