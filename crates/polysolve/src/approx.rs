//! Approximate floating point comparisons.

use num_complex::Complex64;

/// The default tolerance for approximate comparisons.
pub const EPS: f64 = 1.0e-9;

/// Trait for approximate floating point comparisons.
pub trait ApproxEq {
    /// Whether `self` and `other` differ by at most `tolerance`.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        // Equal infinities have a NaN difference.
        self == other || (self - other).abs() <= tolerance
    }
}

impl ApproxEq for Complex64 {
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.re.approx_eq(&other.re, tolerance) && self.im.approx_eq(&other.im, tolerance)
    }
}

impl<A, B> ApproxEq for (A, B)
where
    A: ApproxEq,
    B: ApproxEq,
{
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0.approx_eq(&other.0, tolerance) && self.1.approx_eq(&other.1, tolerance)
    }
}

impl<A, B, C> ApproxEq for (A, B, C)
where
    A: ApproxEq,
    B: ApproxEq,
    C: ApproxEq,
{
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0.approx_eq(&other.0, tolerance)
            && self.1.approx_eq(&other.1, tolerance)
            && self.2.approx_eq(&other.2, tolerance)
    }
}

impl<T> ApproxEq for [T]
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(x, y)| x.approx_eq(y, tolerance))
    }
}

impl<T> ApproxEq for Vec<T>
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}

/// Ensures that two values are approximately equal per the `ApproxEq` trait.
///
/// Uses [`EPS`] unless a tolerance is given explicitly.
///
/// # Example
/// ```
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(3.0_f64.sqrt(), 1.732, tolerance = 1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, tolerance = $crate::approx::EPS)
    };

    ($left:expr, $right:expr, tolerance = $tolerance:expr $(,)?) => {{
        let (left, right, tolerance) = (&$left, &$right, $tolerance);
        if !$crate::approx::ApproxEq::approx_eq(left, right, tolerance) {
            panic!(
                "approximate assertion failed: `(left !~= right)`\n  left: `{:?}`,\n right: `{:?}`,\n   tol: `{}`",
                left, right, tolerance,
            );
        }
    }};
}
