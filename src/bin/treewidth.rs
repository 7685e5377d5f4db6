//! Command-line tree decomposition of PACE `.gr` graphs
//!
//! ```text
//! treewidth graph.gr --seed=7 --timeout-secs=30 -o graph.td
//! ```

use anyhow::{Context, Result};
use cancel_this::Cancelled;
use chordal_td::{DecompositionError, SolverConfig, TreewidthSolver, UndirectedGraph};
use clap::Parser;
use env_logger::Builder;
use log::{info, warn, LevelFilter};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "treewidth")]
#[command(about = "Heuristic tree decomposition of a PACE graph")]
struct Args {
    /// Path to a PACE `.gr` graph
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Master seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Trials for a connected graph with a cycle
    #[arg(long, default_value_t = chordal_td::config::DEFAULT_CONNECTED_TRIALS)]
    trials: usize,

    /// Trials per component of a disconnected graph
    #[arg(long, default_value_t = chordal_td::config::DEFAULT_COMPONENT_TRIALS)]
    component_trials: usize,

    /// Stop after this many seconds and print the best decomposition so far
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write the `.td` output here instead of stdout
    #[arg(short, long, value_name = "OUT")]
    output: Option<PathBuf>,

    /// Verbose logging level: "trace", "debug", or "info"
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Warn,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let graph = UndirectedGraph::read_pace(BufReader::new(file))?;
    info!(
        "Loaded {} with {} vertices and {} edges",
        args.file.display(),
        graph.num_vertices(),
        graph.num_edges()
    );

    let mut config = SolverConfig::default()
        .with_connected_trials(args.trials)
        .with_component_trials(args.component_trials);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut solver = TreewidthSolver::new(config);

    let solution = match args.timeout_secs {
        Some(secs) => cancel_this::on_timeout(Duration::from_secs(secs), || {
            Ok::<_, Cancelled>(solver.solve(&graph))
        })
        .map_err(DecompositionError::from)??,
        None => solver.solve(&graph)?,
    };
    if solution.cancelled {
        warn!("Timed out after {} trials, reporting best decomposition so far", solution.trials_run);
    }

    match args.output {
        Some(path) => {
            let out = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            solution.decomposition.write_pace(out, graph.num_vertices())?;
        }
        None => solution
            .decomposition
            .write_pace(io::stdout().lock(), graph.num_vertices())?,
    }

    Ok(())
}
