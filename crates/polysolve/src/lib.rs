//! Closed-form roots of quadratic and cubic polynomials.
//!
//! # Solvers
//! - **Quadratic:** [`quadratic`] applies the quadratic formula and reports
//!   the two real roots, or a [negative discriminant] error when they are
//!   complex.
//! - **Cubic:** [`cubic`] applies Cardano's method and reports three
//!   [complex] roots, the first being the real one for real coefficients.
//!
//! Both are pure functions. A [`Solver`] wraps them with a [`SolverConfig`]
//! that can reject zero leading coefficients or reproduce the historic cubic
//! shift term. Roots can be checked with [`polyval`].
//!
//! [negative discriminant]: SolveError::NegativeDiscriminant
//! [complex]: num_complex::Complex64

#[macro_use]
pub mod approx;
pub mod config;
pub mod diag;
pub mod poly;
pub mod roots;
pub mod solve;

pub use num_complex::Complex64;

pub use crate::config::{CubicShift, LeadingPolicy, SolverConfig};
pub use crate::diag::{SolveError, SolveResult};
pub use crate::poly::polyval;
pub use crate::roots::{cubic, quadratic, CBRT_UNITY_IM};
pub use crate::solve::Solver;
