//! Dynamically Dimensioned Search (DDS).
//!
//! A single-solution stochastic heuristic for global optimization under
//! a fixed evaluation budget. Each iteration perturbs a random subset
//! of decision variables around the current best solution; the
//! probability of including a variable in that subset decays
//! logarithmically with the iteration count, so the search narrows from
//! nearly all dimensions (global) to one dimension (local) as the
//! budget is spent. Perturbation magnitudes are Gaussian with a fixed
//! 0.2 neighborhood ratio, reflected or absorbed at the bounds.
//!
//! The algorithm has no convergence tolerance and no restart logic:
//! it always consumes exactly `max_evaluations` objective calls.
//!
//! # References
//!
//! - Tolson & Shoemaker (2007), "Dynamically dimensioned search
//!   algorithm for computationally efficient watershed model
//!   calibration", Water Resources Research 43, W01413

mod config;
mod neighborhood;
mod runner;
mod types;

pub use config::{DdsConfig, Direction};
pub use neighborhood::{
    perturb_continuous, perturb_discrete, standard_normal, NEIGHBORHOOD_RATIO,
};
pub use runner::{
    select_variables, selection_probability, DdsResult, DdsRunner, IterationRecord,
};
pub use types::Objective;
