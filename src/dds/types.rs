//! Objective function trait.

use crate::error::EvalError;

/// A black-box objective function over a decision vector.
///
/// The engine calls `evaluate` exactly once per consumed budget unit
/// and treats the call as opaque and blocking; any timeout or retry
/// policy belongs inside the implementation. Returned values must be
/// finite — the engine rejects `NaN` and infinities as evaluation
/// failures.
///
/// Plain closures work directly for the infallible case:
///
/// ```
/// use dds_search::dds::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]).unwrap(), 25.0);
/// ```
///
/// Fallible evaluators (external simulations, I/O-backed models)
/// implement the trait directly and surface failures as [`EvalError`].
pub trait Objective {
    /// Computes the objective value for a decision vector.
    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError>;
}

impl<F: Fn(&[f64]) -> f64> Objective for F {
    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_blanket_impl() {
        let constant = |_: &[f64]| 7.0;
        assert_eq!(constant.evaluate(&[1.0, 2.0]).unwrap(), 7.0);
    }

    #[test]
    fn test_fallible_impl() {
        struct AlwaysFails;
        impl Objective for AlwaysFails {
            fn evaluate(&self, _: &[f64]) -> Result<f64, EvalError> {
                Err(EvalError::Failed("simulation crashed".into()))
            }
        }
        assert!(AlwaysFails.evaluate(&[0.0]).is_err());
    }
}
