//! Neighborhood perturbation operators.
//!
//! One decision variable at a time is perturbed around the current best
//! value by a Gaussian step scaled to 20% of the variable's range, with
//! reflect-or-absorb handling at the bounds. Discrete variables use the
//! same step on half-integer margins and round to the nearest integer.

use rand::Rng;

/// Neighborhood size as a fraction of the variable range.
///
/// Published tuning constant from Tolson & Shoemaker (2007); proven
/// robust across calibration problems. Do not change.
pub const NEIGHBORHOOD_RATIO: f64 = 0.2;

/// Returns one standard Gaussian deviate via Marsaglia's polar method.
///
/// Each call consumes a fresh pair of uniforms per rejection round plus
/// one coin flip, and returns a single deviate; the second deviate of
/// the accepted pair is discarded, never cached. Callers that depend on
/// a reproducible draw schedule rely on this one-deviate-per-call
/// contract.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let w1 = 2.0 * rng.random::<f64>() - 1.0;
        let w2 = 2.0 * rng.random::<f64>() - 1.0;
        let s = w1 * w1 + w2 * w2;
        if s >= 1.0 || s == 0.0 {
            continue;
        }
        let scale = (-2.0 * s.ln() / s).sqrt();
        return if rng.random::<f64>() < 0.5 {
            w1 * scale
        } else {
            w2 * scale
        };
    }
}

/// Perturbs a continuous variable, returning a value in `[lower, upper]`.
///
/// Out-of-range steps are reflected off the crossed bound with
/// probability 0.5 and absorbed onto it otherwise; a reflection that
/// overshoots the opposite bound collapses back to the crossed bound.
/// The reflect/absorb coin is drawn on every call, whether or not a
/// bound is crossed, to keep the draw schedule independent of the step.
pub fn perturb_continuous<R: Rng + ?Sized>(value: f64, lower: f64, upper: f64, rng: &mut R) -> f64 {
    let range = upper - lower;
    let z = standard_normal(rng);
    let mut new = value + range * NEIGHBORHOOD_RATIO * z;

    let p = rng.random::<f64>();
    if new < lower {
        new = if p <= 0.5 { lower + (lower - new) } else { lower };
        if new > upper {
            new = lower;
        }
    } else if new > upper {
        new = if p <= 0.5 { upper - (new - upper) } else { upper };
        if new < lower {
            new = upper;
        }
    }
    new
}

/// Perturbs a discrete variable, returning an integer in `[lower, upper]`.
///
/// Uses the same Gaussian step as the continuous case but reflects off
/// the half-integer margins `lower - 0.5` and `upper + 0.5` (absorbing
/// onto the bound itself), then rounds to the nearest integer. When the
/// rounded result equals the input and the range spans more than one
/// integer, a uniform resample guarantees a different value: the
/// comparison against the input is asymmetric near the range endpoints
/// (see the tests), a quirk carried over from the reference algorithm.
pub fn perturb_discrete<R: Rng + ?Sized>(value: f64, lower: f64, upper: f64, rng: &mut R) -> f64 {
    let range = upper - lower;
    let z = standard_normal(rng);
    let mut new = value + range * NEIGHBORHOOD_RATIO * z;

    let p = rng.random::<f64>();
    if new < lower - 0.5 {
        new = if p <= 0.5 {
            (lower - 0.5) + ((lower - 0.5) - new)
        } else {
            lower
        };
        if new > upper + 0.5 {
            new = lower;
        }
    } else if new > upper + 0.5 {
        new = if p <= 0.5 {
            (upper + 0.5) - (new - (upper + 0.5))
        } else {
            upper
        };
        if new < lower - 0.5 {
            new = upper;
        }
    }

    let mut new = new.round();

    // Degenerate step: force a different integer whenever one exists.
    if new == value && range > 0.0 {
        let offset = (range * rng.random::<f64>()).ceil().max(1.0);
        let sample = lower - 1.0 + offset;
        new = if sample < value { sample } else { sample + 1.0 };
    }
    new
}
