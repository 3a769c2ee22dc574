//! Multi-trial orchestration.
//!
//! Runs several independent DDS trials off one continuing random
//! stream and averages their convergence behavior. Averaging covers
//! the main-loop records only (the initialization phase is excluded),
//! matching the usual way DDS convergence curves are reported.

use crate::bounds::Bounds;
use crate::dds::{DdsConfig, DdsResult, DdsRunner, Direction, Objective};
use crate::error::{ConfigError, DdsError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Aggregated outcome of a batch of trials.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    /// Per-trial results, in execution order.
    pub runs: Vec<DdsResult>,

    /// Best-so-far fitness averaged across trials, one entry per
    /// main-loop iteration, in the caller's sign convention.
    pub mean_best: Vec<f64>,

    /// Per-iteration candidate fitness averaged across trials, same
    /// shape as `mean_best`.
    pub mean_fitness: Vec<f64>,

    /// Direction the trials optimized in.
    pub direction: Direction,
}

impl TrialSummary {
    /// The trial with the best final fitness, respecting the direction.
    ///
    /// `None` only for an empty batch; the driver rejects zero trials,
    /// so summaries it produces always yield a run.
    pub fn best_run(&self) -> Option<&DdsResult> {
        let sign = self.direction.sign();
        self.runs
            .iter()
            .min_by(|a, b| (sign * a.best_fitness).total_cmp(&(sign * b.best_fitness)))
    }
}

/// Executes batches of independent DDS trials.
pub struct TrialRunner;

impl TrialRunner {
    /// Runs `trials` independent trials, all drawing sequentially from
    /// one generator seeded by `config.seed`.
    ///
    /// Trials run strictly one after another and never reseed, so a
    /// batch is deterministic as a whole under a fixed seed.
    pub fn run<O: Objective>(
        objective: &O,
        bounds: &Bounds,
        config: &DdsConfig,
        trials: usize,
    ) -> Result<TrialSummary, DdsError> {
        if trials == 0 {
            return Err(ConfigError::ZeroTrials.into());
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut runs = Vec::with_capacity(trials);
        for t in 0..trials {
            log::info!("trial {} of {} executing", t + 1, trials);
            let started = Instant::now();
            let result = DdsRunner::run_with_rng(objective, bounds, config, &mut rng)?;
            log::info!(
                "trial {}: best {} at iteration {} ({:.3}s)",
                t + 1,
                result.best_fitness,
                result.best_iteration,
                started.elapsed().as_secs_f64()
            );
            runs.push(result);
        }
        Ok(Self::summarize(runs, config.initial_samples, config))
    }

    /// Runs `trials` trials, each starting from its own caller-supplied
    /// initial solution.
    ///
    /// Each trial evaluates its starting vector instead of random
    /// initialization (`initial_samples` is forced to 1); everything
    /// else matches [`TrialRunner::run`]. The number of supplied
    /// solutions must equal `trials`.
    pub fn run_with_initials<O: Objective>(
        objective: &O,
        bounds: &Bounds,
        config: &DdsConfig,
        trials: usize,
        initials: &[Vec<f64>],
    ) -> Result<TrialSummary, DdsError> {
        if trials == 0 {
            return Err(ConfigError::ZeroTrials.into());
        }
        if initials.len() != trials {
            return Err(ConfigError::InitialSolutionCount {
                trials,
                provided: initials.len(),
            }
            .into());
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut runs = Vec::with_capacity(initials.len());
        for (t, initial) in initials.iter().enumerate() {
            log::info!("trial {} of {} executing", t + 1, initials.len());
            let trial_config = config.clone().with_initial_solution(initial.clone());
            let started = Instant::now();
            let result = DdsRunner::run_with_rng(objective, bounds, &trial_config, &mut rng)?;
            log::info!(
                "trial {}: best {} at iteration {} ({:.3}s)",
                t + 1,
                result.best_fitness,
                result.best_iteration,
                started.elapsed().as_secs_f64()
            );
            runs.push(result);
        }
        Ok(Self::summarize(runs, 1, config))
    }

    fn summarize(runs: Vec<DdsResult>, its: usize, config: &DdsConfig) -> TrialSummary {
        let span = config.max_evaluations - its;

        // Sum across trials first, divide once at the end; per-trial
        // scaling would make the mean of identical values inexact.
        let mut mean_best = vec![0.0; span];
        let mut mean_fitness = vec![0.0; span];
        for run in &runs {
            for (k, record) in run.history[its..].iter().enumerate() {
                mean_best[k] += record.best_fitness;
                mean_fitness[k] += record.fitness;
            }
        }
        let n = runs.len() as f64;
        for v in mean_best.iter_mut().chain(mean_fitness.iter_mut()) {
            *v /= n;
        }

        TrialSummary {
            runs,
            mean_best,
            mean_fitness,
            direction: config.direction,
        }
    }
}
