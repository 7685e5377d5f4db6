//! Best-of-k treewidth search
//!
//! The solver picks a strategy from the shape of the graph:
//!
//! | Strategy | Condition | Trials |
//! |----------|-----------|--------|
//! | `Empty` | no vertices | none |
//! | `SingleCycle` | one component, `n == m` | 1 |
//! | `Disconnected` | more than one component | `component_trials` per component |
//! | `Connected` | one component | `connected_trials` if it has a cycle, else 1 |
//!
//! Every trial chordalizes a fresh copy of its graph with its own generator and
//! builds a decomposition from the resulting perfect elimination ordering. The
//! narrowest decomposition per component wins. Disconnected results are merged
//! under an empty root bag.
//!
//! Cancellation is checked before each trial and each chordalization pass.
//! When observed, the best result so far is kept and any component without a
//! finished trial falls back to a single bag holding all its vertices.

use crate::algorithms::{
    chordalize, component_subgraphs, default_pass_limit, find_components, Components,
    TreeDecomposition,
};
use crate::config::SolverConfig;
use crate::error::DecompositionError;
use crate::storage::UndirectedGraph;
use anyhow::Result;
use cancel_this::is_cancelled;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Search strategy chosen for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Graph without vertices
    Empty,
    /// One component with as many edges as vertices
    SingleCycle,
    /// Several components solved independently
    Disconnected {
        /// Number of components
        components: usize,
    },
    /// One general component
    Connected,
}

/// Result of [`TreewidthSolver::solve`]
#[derive(Debug, Clone)]
pub struct Solution {
    /// Narrowest decomposition found
    pub decomposition: TreeDecomposition,

    /// Strategy that produced it
    pub strategy: Strategy,

    /// Trials that ran to completion, over all components
    pub trials_run: usize,

    /// The search stopped early on cancellation
    pub cancelled: bool,
}

impl Solution {
    /// Width of the decomposition
    #[must_use]
    pub fn width(&self) -> usize {
        self.decomposition.width()
    }
}

/// Outcome of the trials for one graph
struct Search {
    best: Option<TreeDecomposition>,
    trials_run: usize,
    cancelled: bool,
}

/// Randomized tree decomposition solver
///
/// # Example
///
/// ```
/// use chordal_td::{SolverConfig, TreewidthSolver, UndirectedGraph};
///
/// let square = UndirectedGraph::from_edge_list(
///     &[1, 2, 3, 4],
///     &[(1, 2), (2, 3), (3, 4), (4, 1)],
/// )
/// .unwrap();
///
/// let mut solver = TreewidthSolver::new(SolverConfig::default().with_seed(1));
/// let solution = solver.solve(&square).unwrap();
///
/// assert_eq!(solution.width(), 2);
/// assert!(solution.decomposition.verify(&square).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TreewidthSolver {
    config: SolverConfig,
    rng: StdRng,
}

impl Default for TreewidthSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl TreewidthSolver {
    /// Create solver, seeding the master generator from `config.seed`
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Pick the search strategy for `graph`
    #[must_use]
    pub fn strategy(graph: &UndirectedGraph) -> Strategy {
        Self::strategy_for(graph, &find_components(graph))
    }

    /// Pick the search strategy from already computed components
    fn strategy_for(graph: &UndirectedGraph, components: &Components) -> Strategy {
        if graph.num_vertices() == 0 {
            return Strategy::Empty;
        }

        let components = components.count();
        if components > 1 {
            Strategy::Disconnected { components }
        } else if graph.num_vertices() == graph.num_edges() {
            Strategy::SingleCycle
        } else {
            Strategy::Connected
        }
    }

    /// Compute a tree decomposition of `graph`
    ///
    /// # Errors
    ///
    /// Returns error if chordalization exceeds the configured pass bound.
    /// Cancellation is not an error: it yields a valid best-so-far
    /// [`Solution`] with `cancelled` set.
    pub fn solve(&mut self, graph: &UndirectedGraph) -> Result<Solution> {
        let components = find_components(graph);
        let strategy = Self::strategy_for(graph, &components);
        info!(
            "Solving graph with {} vertices, {} edges: {strategy:?}",
            graph.num_vertices(),
            graph.num_edges()
        );

        let solution = match strategy {
            Strategy::Empty => Solution {
                decomposition: TreeDecomposition::new(),
                strategy,
                trials_run: 0,
                cancelled: false,
            },
            Strategy::SingleCycle | Strategy::Connected => {
                let trials = match strategy {
                    Strategy::Connected if components.cycle_found() => {
                        self.config.connected_trials
                    }
                    _ => 1,
                };
                let search = self.search(graph, trials)?;
                Solution {
                    decomposition: search.best.unwrap_or_else(|| {
                        TreeDecomposition::trivial(graph.vertices().iter().copied())
                    }),
                    strategy,
                    trials_run: search.trials_run,
                    cancelled: search.cancelled,
                }
            }
            Strategy::Disconnected { .. } => {
                let mut parts = Vec::with_capacity(components.count());
                let mut trials_run = 0;
                let mut cancelled = false;

                let subgraphs = component_subgraphs(graph, &components);
                for (index, component) in subgraphs.iter().enumerate() {
                    let fallback =
                        || TreeDecomposition::trivial(component.vertices().iter().copied());
                    if cancelled {
                        parts.push(fallback());
                        continue;
                    }

                    let search = self.search(component, self.config.component_trials)?;
                    trials_run += search.trials_run;
                    cancelled = search.cancelled;

                    let part = search.best.unwrap_or_else(fallback);
                    debug!(
                        "Component {} ({} vertices): width {} after {} trials",
                        index + 1,
                        component.num_vertices(),
                        part.width(),
                        search.trials_run
                    );
                    parts.push(part);
                }

                Solution {
                    decomposition: TreeDecomposition::merge(parts),
                    strategy,
                    trials_run,
                    cancelled,
                }
            }
        };

        info!(
            "Decomposition: {} bags, width {}{}",
            solution.decomposition.num_bags(),
            solution.width(),
            if solution.cancelled { " (cancelled)" } else { "" }
        );
        Ok(solution)
    }

    /// Run up to `trials` independent trials on `graph`, keeping the narrowest
    fn search(
        &mut self,
        graph: &UndirectedGraph,
        trials: usize,
    ) -> Result<Search, DecompositionError> {
        let max_passes = self
            .config
            .max_chordalization_passes
            .unwrap_or_else(|| default_pass_limit(graph));

        let mut search = Search {
            best: None,
            trials_run: 0,
            cancelled: false,
        };

        for trial in 0..trials {
            if is_cancelled!().is_err() {
                search.cancelled = true;
                break;
            }

            let mut trial_rng = StdRng::seed_from_u64(self.rng.random());
            let decomposition = match run_trial(graph, &mut trial_rng, max_passes) {
                Ok(decomposition) => decomposition,
                Err(err) if err.is_cancelled() => {
                    search.cancelled = true;
                    break;
                }
                Err(err) => return Err(err),
            };
            search.trials_run += 1;

            let improved = search
                .best
                .as_ref()
                .is_none_or(|best| decomposition.width() < best.width());
            if improved {
                debug!("Trial {trial}: new best width {}", decomposition.width());
                search.best = Some(decomposition);
            }
        }

        Ok(search)
    }
}

/// Chordalize a copy of `graph` and decompose it
fn run_trial(
    graph: &UndirectedGraph,
    rng: &mut StdRng,
    max_passes: usize,
) -> Result<TreeDecomposition, DecompositionError> {
    let mut completed = graph.clone();
    let chordal = chordalize(&mut completed, rng, max_passes)?;
    Ok(TreeDecomposition::from_elimination_ordering(
        &completed,
        &chordal.ordering,
    ))
}
