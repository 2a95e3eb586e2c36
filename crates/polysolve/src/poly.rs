//! Polynomial evaluation.

use std::ops::{Add, Mul};

/// Evaluate the polynomial with the given coefficients at `x`.
///
/// Coefficients are ordered from the highest power down to the constant
/// term, so `[a, b, c]` is `ax^2 + bx + c`. Uses Horner's scheme and works
/// for real as well as complex `x`. An empty slice is the zero polynomial.
pub fn polyval<T>(coeffs: &[f64], x: T) -> T
where
    T: Copy + From<f64> + Add<Output = T> + Mul<Output = T>,
{
    coeffs
        .iter()
        .fold(T::from(0.0), |acc, &coeff| acc * x + T::from(coeff))
}
