//! Numerical integration and root finding.
//!
//! ## Submodules
//! - `quadrature`: Fixed-order Gauss-Legendre integration over a finite interval
//! - `solvers`: Brent's method for bracketed scalar root finding
//!
//! Both are generic over `T: num_traits::Float` and hold no state between
//! calls; the only shared data is the constant coefficient table.

use num_traits::Float;

pub mod quadrature;
pub mod solvers;

/// Default convergence threshold for callers without a problem-specific one.
///
/// Curve code uses it for root searches in parameter space, where `1e-5` is
/// well below any visible distance on a unit-parameterised curve.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Convert an `f64` constant into `T`, yielding NaN if `T` cannot hold it.
#[inline]
pub(crate) fn from_f64<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
