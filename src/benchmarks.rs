//! Benchmark objective functions.
//!
//! D-dimensional multimodal test surfaces for exercising the optimizer.
//! All are free functions over a slice, so they plug into the engine
//! directly through the closure blanket impl of
//! [`Objective`](crate::dds::Objective).
//!
//! The Rastrigin and Ackley variants here omit the customary additive
//! constants (`10n` and `20 + e`), so their global minima at the origin
//! are `-n` and `-20 - e` rather than 0. Griewank is the standard form
//! with minimum 0 at the origin.

use std::f64::consts::{E, PI};

/// Rastrigin function (Mühlenbein's D-dimensional generalization,
/// without the `10n` offset): `sum(x_i^2 - cos(2*pi*x_i))`.
///
/// Global minimum `-n` at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    x.iter().map(|&v| v * v - (2.0 * PI * v).cos()).sum()
}

/// Griewank function (1981):
/// `sum(x_i^2)/4000 - prod(cos(x_i / sqrt(i+1))) + 1`.
///
/// Global minimum 0 at the origin.
pub fn griewank(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|&v| v * v).sum();
    let product: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &v)| (v / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum / 4000.0 - product + 1.0
}

/// Ackley function (1987), without the `20 + e` offset:
/// `-20*exp(-0.2*sqrt(mean(x_i^2))) - exp(mean(cos(2*pi*x_i)))`.
///
/// Global minimum `-20 - e` at the origin.
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&v| v * v).sum();
    let sum_cos: f64 = x.iter().map(|&v| (2.0 * PI * v).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rastrigin_minimum_at_origin() {
        let origin = [0.0; 4];
        assert!((rastrigin(&origin) + 4.0).abs() < 1e-12);
        assert!(rastrigin(&[1.3, -0.7, 2.1, 0.4]) > rastrigin(&origin));
    }

    #[test]
    fn test_griewank_minimum_at_origin() {
        let origin = [0.0; 6];
        assert!(griewank(&origin).abs() < 1e-12);
        assert!(griewank(&[10.0, -20.0, 5.0, 1.0, 0.0, 3.0]) > 0.0);
    }

    #[test]
    fn test_ackley_minimum_at_origin() {
        let origin = [0.0; 3];
        assert!((ackley(&origin) + 20.0 + E).abs() < 1e-12);
        assert!(ackley(&[2.0, -1.5, 0.5]) > ackley(&origin));
    }

    #[test]
    fn test_rastrigin_multimodal_wells() {
        // integer coordinates are local wells: cos term at its maximum
        assert!(rastrigin(&[1.0]) < rastrigin(&[0.5]));
    }
}
