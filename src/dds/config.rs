//! DDS configuration.

use crate::bounds::Bounds;
use crate::error::ConfigError;

/// Optimization direction.
///
/// The engine always minimizes internally; for maximization it negates
/// the objective on the way in and negates every reported value on the
/// way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Sign applied to raw objective values to obtain the internal
    /// (minimized) fitness: `+1` for minimize, `-1` for maximize.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Minimize => 1.0,
            Direction::Maximize => -1.0,
        }
    }
}

/// Configuration for a DDS run.
///
/// # Examples
///
/// ```
/// use dds_search::dds::{DdsConfig, Direction};
///
/// let config = DdsConfig::new(1000)
///     .with_direction(Direction::Maximize)
///     .with_initial_samples(10)
///     .with_seed(42);
/// assert_eq!(config.max_evaluations, 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DdsConfig {
    /// Total evaluation budget. The run performs exactly this many
    /// objective calls.
    pub max_evaluations: usize,

    /// Number of evaluations spent on the initialization phase.
    ///
    /// With 1, the caller must supply `initial_solution`; with more,
    /// that many uniform random solutions are drawn and the best one
    /// seeds the main loop. `DdsConfig::new` defaults this to
    /// `max(5, 0.5% of max_evaluations)`.
    pub initial_samples: usize,

    /// Minimize or maximize. Defaults to minimize.
    pub direction: Direction,

    /// Caller-supplied starting solution, required iff
    /// `initial_samples == 1`.
    pub initial_solution: Option<Vec<f64>>,

    /// Worker count for the parallel initialization extension.
    ///
    /// Only 1 (serial) is implemented; validation rejects any other
    /// value rather than silently running serially.
    pub workers: usize,

    /// Random seed. `None` seeds from entropy (non-reproducible).
    pub seed: Option<u64>,
}

impl DdsConfig {
    /// Creates a configuration with the given evaluation budget and the
    /// default initialization size `max(5, round(0.005 * budget))`.
    pub fn new(max_evaluations: usize) -> Self {
        let its = (0.005 * max_evaluations as f64).round_ties_even() as usize;
        Self {
            max_evaluations,
            initial_samples: its.max(5),
            direction: Direction::Minimize,
            initial_solution: None,
            workers: 1,
            seed: None,
        }
    }

    pub fn with_initial_samples(mut self, n: usize) -> Self {
        self.initial_samples = n;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Supplies a starting solution and sets `initial_samples` to 1.
    pub fn with_initial_solution(mut self, solution: Vec<f64>) -> Self {
        self.initial_solution = Some(solution);
        self.initial_samples = 1;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against the bounds it will run over.
    ///
    /// Called once at the start of a run, before any evaluation.
    pub fn validate(&self, bounds: &Bounds) -> Result<(), ConfigError> {
        bounds.validate()?;

        if self.workers != 1 {
            return Err(ConfigError::UnsupportedWorkers(self.workers));
        }
        if self.initial_samples == 0 {
            return Err(ConfigError::ZeroInitialSamples);
        }
        // The schedule divides by ln(max_evaluations - initial_samples),
        // which requires at least 2 main-loop iterations.
        if self.max_evaluations < self.initial_samples + 2 {
            return Err(ConfigError::InsufficientBudget {
                initial_samples: self.initial_samples,
                max_evaluations: self.max_evaluations,
            });
        }
        match &self.initial_solution {
            None if self.initial_samples == 1 => Err(ConfigError::MissingInitialSolution),
            Some(_) if self.initial_samples > 1 => Err(ConfigError::UnexpectedInitialSolution),
            Some(s) if s.len() != bounds.len() => Err(ConfigError::DimensionMismatch {
                expected: bounds.len(),
                actual: s.len(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::DecisionVariable;

    fn one_var() -> Bounds {
        Bounds::new(vec![DecisionVariable::continuous("x", 0.0, 1.0)])
    }

    #[test]
    fn test_default_initial_samples_floor() {
        // 0.5% of small budgets is below the floor of 5
        assert_eq!(DdsConfig::new(100).initial_samples, 5);
        assert_eq!(DdsConfig::new(1000).initial_samples, 5);
    }

    #[test]
    fn test_default_initial_samples_fraction() {
        assert_eq!(DdsConfig::new(10_000).initial_samples, 50);
        assert_eq!(DdsConfig::new(100_000).initial_samples, 500);
    }

    #[test]
    fn test_validate_ok() {
        assert!(DdsConfig::new(100).with_seed(1).validate(&one_var()).is_ok());
    }

    #[test]
    fn test_validate_zero_initial_samples() {
        let config = DdsConfig::new(100).with_initial_samples(0);
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::ZeroInitialSamples)
        ));
    }

    #[test]
    fn test_validate_budget_not_above_samples() {
        let config = DdsConfig::new(5).with_initial_samples(5);
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::InsufficientBudget { .. })
        ));
    }

    #[test]
    fn test_validate_degenerate_schedule() {
        // one main-loop iteration: ln(1) == 0 in the denominator
        let config = DdsConfig::new(6).with_initial_samples(5);
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::InsufficientBudget { .. })
        ));
    }

    #[test]
    fn test_validate_missing_initial_solution() {
        let config = DdsConfig::new(10).with_initial_samples(1);
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::MissingInitialSolution)
        ));
    }

    #[test]
    fn test_validate_unexpected_initial_solution() {
        let mut config = DdsConfig::new(10).with_initial_solution(vec![0.5]);
        config.initial_samples = 5;
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::UnexpectedInitialSolution)
        ));
    }

    #[test]
    fn test_validate_dimension_mismatch() {
        let config = DdsConfig::new(10).with_initial_solution(vec![0.5, 0.5]);
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_validate_workers() {
        let config = DdsConfig::new(100).with_workers(4);
        assert!(matches!(
            config.validate(&one_var()),
            Err(ConfigError::UnsupportedWorkers(4))
        ));
    }

    #[test]
    fn test_with_initial_solution_forces_single_sample() {
        let config = DdsConfig::new(10).with_initial_solution(vec![0.5]);
        assert_eq!(config.initial_samples, 1);
        assert!(config.validate(&one_var()).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = DdsConfig::new(100)
            .with_direction(Direction::Maximize)
            .with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: DdsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_evaluations, 100);
        assert_eq!(back.direction, Direction::Maximize);
        assert_eq!(back.seed, Some(7));
    }
}
