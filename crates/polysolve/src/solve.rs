//! A configurable front-end over the closed-form root formulas.

use num_complex::Complex64;

use crate::config::{LeadingPolicy, SolverConfig};
use crate::diag::{SolveError, SolveResult};
use crate::roots;

/// Solves quadratics and cubics according to a [`SolverConfig`].
///
/// The default solver behaves exactly like [`roots::quadratic`] and
/// [`roots::cubic`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a new solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this solver was created with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find both roots of `ax^2 + bx + c`, the `+` root first.
    pub fn quadratic(&self, a: f64, b: f64, c: f64) -> SolveResult<(f64, f64)> {
        self.check_leading(a, 2)?;
        roots::quadratic(a, b, c)
    }

    /// Find all three roots of `ax^3 + bx^2 + cx + d`.
    pub fn cubic(
        &self,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) -> SolveResult<(Complex64, Complex64, Complex64)> {
        self.check_leading(a, 3)?;
        Ok(roots::cardano(a, b, c, d, self.config.cubic_shift))
    }

    fn check_leading(&self, a: f64, degree: usize) -> SolveResult<()> {
        if self.config.leading == LeadingPolicy::Reject && a == 0.0 {
            log::debug!("rejecting degree {degree} polynomial with zero leading coefficient");
            return Err(SolveError::DegenerateLeading { degree });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CubicShift;

    fn rejecting() -> Solver {
        Solver::new(SolverConfig { leading: LeadingPolicy::Reject, ..Default::default() })
    }

    #[test]
    fn test_default_solver_matches_free_functions() {
        let solver = Solver::default();
        assert_eq!(
            solver.quadratic(3.0, 0.0, -1.0).unwrap(),
            roots::quadratic(3.0, 0.0, -1.0).unwrap(),
        );
        assert_eq!(
            solver.cubic(2.0, -3.0, 5.0, 7.0).unwrap(),
            roots::cubic(2.0, -3.0, 5.0, 7.0),
        );
    }

    #[test]
    fn test_default_solver_propagates_zero_leading() {
        let (plus, _) = Solver::default().quadratic(0.0, 1.0, 1.0).unwrap();
        assert!(plus.is_nan());
    }

    #[test]
    fn test_rejecting_solver_guards_zero_leading() {
        let solver = rejecting();
        assert!(matches!(
            solver.quadratic(0.0, 1.0, 1.0),
            Err(SolveError::DegenerateLeading { degree: 2 }),
        ));
        assert!(matches!(
            solver.cubic(-0.0, 1.0, 1.0, 1.0),
            Err(SolveError::DegenerateLeading { degree: 3 }),
        ));
    }

    #[test]
    fn test_rejecting_solver_still_reports_negative_discriminant() {
        assert!(matches!(
            rejecting().quadratic(1.0, 2.0, 3.0),
            Err(SolveError::NegativeDiscriminant { .. }),
        ));
    }

    #[test]
    fn test_reference_shift_solver() {
        let solver = Solver::new(SolverConfig {
            cubic_shift: CubicShift::Reference,
            ..Default::default()
        });
        let (x1, _, _) = solver.cubic(2.0, -12.0, 22.0, -12.0).unwrap();
        assert_approx_eq!(x1, Complex64::new(9.0, 0.0));
    }
}
