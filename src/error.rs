//! Error taxonomy: configuration errors (rejected before any
//! evaluation) and evaluation errors (abort the run in progress).

use crate::dds::IterationRecord;

/// Invalid configuration, detected before the first evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("bounds must contain at least one decision variable")]
    EmptyBounds,

    #[error("variable '{name}': lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { name: String, lower: f64, upper: f64 },

    #[error("discrete variable '{name}' has non-integral bounds")]
    NonIntegralBounds { name: String },

    #[error("initial_samples must be at least 1")]
    ZeroInitialSamples,

    #[error(
        "max_evaluations ({max_evaluations}) must exceed initial_samples \
         ({initial_samples}) by at least 2; the selection probability \
         schedule is undefined otherwise"
    )]
    InsufficientBudget {
        initial_samples: usize,
        max_evaluations: usize,
    },

    #[error("initial_samples == 1 requires a caller-supplied initial solution")]
    MissingInitialSolution,

    #[error("an initial solution may only be supplied when initial_samples == 1")]
    UnexpectedInitialSolution,

    #[error("initial solution has {actual} components, bounds define {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("workers = {0} is not supported; multi-worker execution is not implemented (use 1)")]
    UnsupportedWorkers(usize),

    #[error("trials must be at least 1")]
    ZeroTrials,

    #[error("{provided} initial solutions supplied for {trials} trials")]
    InitialSolutionCount { trials: usize, provided: usize },
}

/// Objective evaluation failure.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("objective evaluation failed: {0}")]
    Failed(String),

    #[error("objective returned a non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("model I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("model process exited with {status}")]
    ModelExit { status: std::process::ExitStatus },

    #[error("model output '{text}' is not a single scalar")]
    OutputParse { text: String },
}

/// Top-level error returned by the search engine and trial driver.
#[derive(Debug, thiserror::Error)]
pub enum DdsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The run aborted after `completed` successful evaluations.
    ///
    /// `history` holds the records accumulated before the failure,
    /// exposed for diagnostics; the run is incomplete.
    #[error("run aborted after {completed} evaluations: {source}")]
    Evaluation {
        completed: usize,
        source: EvalError,
        history: Vec<IterationRecord>,
    },
}
