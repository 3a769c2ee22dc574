//! Dynamically Dimensioned Search (DDS) global optimization.
//!
//! DDS is a stochastic, single-solution heuristic for calibrating
//! expensive black-box models under a strict budget of function
//! evaluations. It perturbs a probabilistically shrinking subset of
//! decision variables each iteration, transitioning automatically from
//! global exploration to local refinement as the budget runs out.
//!
//! - [`dds`]: the search engine — configuration, iteration loop,
//!   neighborhood perturbation, and the `Objective` trait.
//! - [`bounds`]: decision variable definitions (continuous or discrete,
//!   each with a `[lower, upper]` range).
//! - [`benchmarks`]: Rastrigin, Griewank, and Ackley test functions.
//! - [`external`]: an `Objective` implementation that drives an
//!   external simulation executable through exchange files.
//! - [`trials`]: multi-trial orchestration with averaged convergence
//!   curves.
//!
//! # Example
//!
//! ```
//! use dds_search::bounds::{Bounds, DecisionVariable};
//! use dds_search::dds::{DdsConfig, DdsRunner};
//!
//! let bounds = Bounds::new(vec![
//!     DecisionVariable::continuous("x0", -5.0, 5.0),
//!     DecisionVariable::continuous("x1", -5.0, 5.0),
//! ]);
//! let config = DdsConfig::new(200).with_seed(42);
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//!
//! let result = DdsRunner::run(&sphere, &bounds, &config).unwrap();
//! assert_eq!(result.history.len(), 200);
//! ```
//!
//! # References
//!
//! - Tolson & Shoemaker (2007), "Dynamically dimensioned search
//!   algorithm for computationally efficient watershed model
//!   calibration", Water Resources Research 43, W01413.

pub mod benchmarks;
pub mod bounds;
pub mod dds;
pub mod error;
pub mod external;
pub mod trials;
