//! Closed-form roots for polynomials of degree two and three.

use num_complex::Complex64;

use crate::config::CubicShift;
use crate::diag::{SolveError, SolveResult};

/// The imaginary part of the primitive cube root of unity, `i·√3/2`.
pub const CBRT_UNITY_IM: Complex64 = Complex64::new(0.0, 0.866_025_403_784_438_6);

/// Find both roots of the quadratic polynomial `ax^2 + bx + c`.
///
/// Returns the `+` root of the quadratic formula first and the `-` root
/// second, even when they coincide. Fails with
/// [`NegativeDiscriminant`](SolveError::NegativeDiscriminant) when the roots
/// are complex. A zero `a` is not checked and yields infinities or NaNs.
pub fn quadratic(a: f64, b: f64, c: f64) -> SolveResult<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    log::trace!("quadratic discriminant {discriminant}");

    if discriminant < 0.0 {
        return Err(SolveError::NegativeDiscriminant { discriminant });
    }

    // No normalization here: `-b` keeps the sign of zero.
    let root = discriminant.sqrt();
    Ok(((-b + root) / (2.0 * a), (-b - root) / (2.0 * a)))
}

/// Find all three roots of the cubic polynomial `ax^3 + bx^2 + cx + d` with
/// Cardano's method.
///
/// The first root is the real one for real coefficients, up to an imaginary
/// residue from complex intermediates that is left in place. The other two
/// are the `+` and `-` branches around it. A zero `a` is not checked and
/// yields infinities or NaNs.
pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> (Complex64, Complex64, Complex64) {
    cardano(a, b, c, d, CubicShift::Corrected)
}

/// Cardano's formula with a configurable back-substitution shift.
pub(crate) fn cardano(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    shift: CubicShift,
) -> (Complex64, Complex64, Complex64) {
    let q = (3.0 * a * c - b * b) / (9.0 * a * a);
    let r = (9.0 * a * b * c - 27.0 * a * a * d - 2.0 * b * b * b) / (54.0 * a * a * a);
    let discriminant = q * q * q + r * r;
    log::trace!("cubic q={q} r={r} discriminant {discriminant}");

    let (s, t) = if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        (Complex64::from((r + root).cbrt()), Complex64::from((r - root).cbrt()))
    } else {
        // Principal square root of a negative real, then principal cube roots.
        let root = Complex64::new(0.0, (-discriminant).sqrt());
        ((r + root).cbrt(), (r - root).cbrt())
    };

    let offset = shift.offset(a, b);
    let sum = s + t;
    let spread = CBRT_UNITY_IM * (s - t);
    let mid = -sum / 2.0 - offset;

    (sum - offset, mid + spread, mid - spread)
}
