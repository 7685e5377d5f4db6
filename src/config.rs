//! Solver configuration
//!
//! Trial counts, the master seed and the chordalization pass bound.

/// Trials for a single connected component that contains a cycle
pub const DEFAULT_CONNECTED_TRIALS: usize = 1000;

/// Trials per component when the graph is disconnected
pub const DEFAULT_COMPONENT_TRIALS: usize = 50;

/// Configuration for [`crate::TreewidthSolver`]
///
/// # Example
///
/// ```
/// use chordal_td::SolverConfig;
///
/// let config = SolverConfig::default().with_seed(42).with_connected_trials(200);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.connected_trials, 200);
/// assert_eq!(config.component_trials, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Trials for a single general component with a cycle (default 1000)
    pub connected_trials: usize,

    /// Trials per component in the disconnected case (default 50)
    pub component_trials: usize,

    /// Master seed; `None` seeds from the thread-local generator
    pub seed: Option<u64>,

    /// Chordalization pass bound; `None` uses missing edges + 1
    pub max_chordalization_passes: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            connected_trials: DEFAULT_CONNECTED_TRIALS,
            component_trials: DEFAULT_COMPONENT_TRIALS,
            seed: None,
            max_chordalization_passes: None,
        }
    }
}

impl SolverConfig {
    /// Set trial count for a single connected component (at least 1)
    #[must_use]
    pub fn with_connected_trials(mut self, trials: usize) -> Self {
        self.connected_trials = trials.max(1);
        self
    }

    /// Set trial count per component of a disconnected graph (at least 1)
    #[must_use]
    pub fn with_component_trials(mut self, trials: usize) -> Self {
        self.component_trials = trials.max(1);
        self
    }

    /// Fix the master seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the chordalization pass bound
    #[must_use]
    pub const fn with_max_chordalization_passes(mut self, passes: usize) -> Self {
        self.max_chordalization_passes = Some(passes);
        self
    }
}
