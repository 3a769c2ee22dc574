//! DDS execution loop.

use super::config::DdsConfig;
use super::neighborhood::{perturb_continuous, perturb_discrete};
use super::types::Objective;
use crate::bounds::{Bounds, VariableKind};
use crate::error::{DdsError, EvalError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One row of the run history: the solution evaluated at an iteration
/// together with its objective value and the best value so far, both in
/// the caller's sign convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Zero-based evaluation index.
    pub iteration: usize,

    /// Best objective value found up to and including this iteration.
    pub best_fitness: f64,

    /// Objective value of the solution evaluated at this iteration.
    pub fitness: f64,

    /// The decision vector evaluated at this iteration.
    pub solution: Vec<f64>,
}

/// Result of a DDS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DdsResult {
    /// Iteration at which the best solution was last improved.
    pub best_iteration: usize,

    /// The best decision vector found.
    pub best_solution: Vec<f64>,

    /// Objective value of the best solution, in the caller's sign
    /// convention.
    pub best_fitness: f64,

    /// Total objective evaluations consumed; always equals
    /// `max_evaluations`.
    pub evaluations: usize,

    /// One record per evaluation, in order.
    pub history: Vec<IterationRecord>,
}

/// Probability that a variable is included in the perturbation subset
/// at main-loop iteration `i` of `remaining` total.
///
/// `1 - ln(1+i) / ln(remaining)`: exactly 1 at the first iteration,
/// exactly 0 at the last, strictly decreasing in between. The
/// denominator uses the remaining budget after initialization, not the
/// total budget. Requires `remaining >= 2`, enforced by configuration
/// validation.
pub fn selection_probability(i: usize, remaining: usize) -> f64 {
    1.0 - ((i + 1) as f64).ln() / (remaining as f64).ln()
}

/// Draws the perturbation subset for one main-loop iteration: each of
/// the `n` variables independently with probability `pn`, falling back
/// to a single uniformly chosen variable when none was selected.
///
/// Always returns at least one index, so every iteration moves.
pub fn select_variables<R: Rng + ?Sized>(n: usize, pn: f64, rng: &mut R) -> Vec<usize> {
    let mut selected = Vec::new();
    for j in 0..n {
        if rng.random::<f64>() < pn {
            selected.push(j);
        }
    }
    if selected.is_empty() {
        selected.push((n as f64 * rng.random::<f64>()).floor() as usize);
    }
    selected
}

/// Draws one uniform random solution over the bounds: continuous
/// components uniform on `[lower, upper]`, discrete components uniform
/// over the integers in `[lower, upper]`.
fn random_solution<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Vec<f64> {
    bounds
        .iter()
        .map(|var| match var.kind {
            VariableKind::Continuous => var.lower + var.range() * rng.random::<f64>(),
            VariableKind::Discrete => {
                rng.random_range(var.lower as i64..=var.upper as i64) as f64
            }
        })
        .collect()
}

fn checked_eval<O: Objective>(objective: &O, x: &[f64]) -> Result<f64, EvalError> {
    let value = objective.evaluate(x)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite { value });
    }
    Ok(value)
}

/// Executes the DDS algorithm.
pub struct DdsRunner;

impl DdsRunner {
    /// Runs DDS, seeding a fresh generator from `config.seed`.
    pub fn run<O: Objective>(
        objective: &O,
        bounds: &Bounds,
        config: &DdsConfig,
    ) -> Result<DdsResult, DdsError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs DDS drawing from a caller-owned generator.
    ///
    /// `config.seed` is ignored here; the caller controls seeding and
    /// whether consecutive runs share one continuing stream (as the
    /// trial driver does) or use isolated streams.
    pub fn run_with_rng<O: Objective, R: Rng + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &DdsConfig,
        rng: &mut R,
    ) -> Result<DdsResult, DdsError> {
        config.validate(bounds)?;

        let sign = config.direction.sign();
        let its = config.initial_samples;
        let maxiter = config.max_evaluations;
        let mut history: Vec<IterationRecord> = Vec::with_capacity(maxiter);

        // Initialization: evaluate the supplied solution, or draw and
        // evaluate `its` uniform random solutions.
        let mut best: Vec<f64> = Vec::new();
        let mut best_fitness = f64::INFINITY;
        let mut best_iteration = 0usize;

        for i in 0..its {
            let candidate = match &config.initial_solution {
                Some(s) => s.clone(),
                None => random_solution(bounds, rng),
            };
            let raw = match checked_eval(objective, &candidate) {
                Ok(v) => v,
                Err(source) => {
                    return Err(DdsError::Evaluation {
                        completed: history.len(),
                        source,
                        history,
                    })
                }
            };
            let fitness = sign * raw;
            // Non-strict: on ties the latest candidate wins.
            if i == 0 || fitness <= best_fitness {
                best_fitness = fitness;
                best = candidate.clone();
                best_iteration = i;
            }
            history.push(IterationRecord {
                iteration: i,
                best_fitness: sign * best_fitness,
                fitness: raw,
                solution: candidate,
            });
        }

        // Main loop: perturb a shrinking subset of variables around the
        // best solution.
        let remaining = maxiter - its;
        for i in 0..remaining {
            let pn = selection_probability(i, remaining);
            let selected = select_variables(bounds.len(), pn, rng);

            let mut candidate = best.clone();
            for &j in &selected {
                let var = &bounds[j];
                candidate[j] = match var.kind {
                    VariableKind::Continuous => {
                        perturb_continuous(best[j], var.lower, var.upper, rng)
                    }
                    VariableKind::Discrete => {
                        perturb_discrete(best[j], var.lower, var.upper, rng)
                    }
                };
            }

            let raw = match checked_eval(objective, &candidate) {
                Ok(v) => v,
                Err(source) => {
                    return Err(DdsError::Evaluation {
                        completed: history.len(),
                        source,
                        history,
                    })
                }
            };
            let fitness = sign * raw;
            if fitness <= best_fitness {
                best_fitness = fitness;
                best.copy_from_slice(&candidate);
                best_iteration = i + its;
            }
            history.push(IterationRecord {
                iteration: i + its,
                best_fitness: sign * best_fitness,
                fitness: raw,
                solution: candidate,
            });
        }

        Ok(DdsResult {
            best_iteration,
            best_solution: best,
            best_fitness: sign * best_fitness,
            evaluations: maxiter,
            history,
        })
    }
}
