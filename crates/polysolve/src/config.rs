//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::diag::SolveResult;

/// Tunable behaviour of a [`Solver`](crate::Solver).
///
/// All keys are optional in TOML form:
/// ```toml
/// leading = "reject"
/// cubic-shift = "reference"
/// ```
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverConfig {
    /// What to do with a zero leading coefficient.
    pub leading: LeadingPolicy,
    /// How Cardano's method shifts the depressed cubic back.
    pub cubic_shift: CubicShift,
}

impl SolverConfig {
    /// Parse a configuration from TOML source.
    pub fn from_toml(src: &str) -> SolveResult<Self> {
        let config: Self = toml::from_str(src)?;
        log::debug!("loaded solver config {config:?}");
        Ok(config)
    }
}

/// Handling of polynomials whose leading coefficient is zero.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadingPolicy {
    /// Divide by the zero coefficient and let infinities and NaNs through.
    #[default]
    Propagate,
    /// Fail with [`DegenerateLeading`](crate::SolveError::DegenerateLeading).
    Reject,
}

/// The back-substitution term `x = y - shift` of Cardano's method.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CubicShift {
    /// The mathematically correct `b / (3a)`.
    #[default]
    Corrected,
    /// `(b / 3) * a`, which agrees with the corrected term only for `a = 1`.
    Reference,
}

impl CubicShift {
    /// The shift for the cubic with leading coefficients `a` and `b`.
    pub fn offset(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Corrected => b / (3.0 * a),
            Self::Reference => b / 3.0 * a,
        }
    }
}
