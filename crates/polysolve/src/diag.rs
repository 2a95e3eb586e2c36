//! Diagnostics.

use thiserror::Error;

/// Result type alias for fallible solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors that can occur while solving a polynomial.
#[derive(Error, Debug)]
pub enum SolveError {
    /// The quadratic discriminant `b² - 4ac` is negative, so the roots are
    /// complex and cannot be reported as a pair of reals.
    #[error("negative discriminant {discriminant}: roots are complex")]
    NegativeDiscriminant {
        /// The offending discriminant.
        discriminant: f64,
    },

    /// The leading coefficient is zero and the solver was configured to
    /// reject degenerate input.
    #[error("leading coefficient of degree {degree} polynomial is zero")]
    DegenerateLeading {
        /// The nominal degree of the polynomial.
        degree: usize,
    },

    /// The solver configuration could not be parsed.
    #[error("invalid solver configuration: {0}")]
    Config(#[from] toml::de::Error),
}
