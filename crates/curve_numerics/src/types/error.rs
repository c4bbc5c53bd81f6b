//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the checked root finder
//!
//! The unchecked entry points (`integrate`, `find_root`) never produce
//! errors; only [`BrentSolver::find_root_checked`](crate::BrentSolver::find_root_checked)
//! returns this type.

use thiserror::Error;

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Iteration budget exhausted before convergence
/// - `NoBracket`: Function values at the bracket endpoints share a sign
/// - `NonFiniteValue`: The function is NaN or infinite at a bracket endpoint
///
/// # Examples
/// ```
/// use curve_numerics::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, best: 0.5 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations (best estimate {best})")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Estimate held when the budget ran out
        best: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Function value at a bracket endpoint is NaN or infinite.
    #[error("Non-finite function value at x = {x}")]
    NonFiniteValue {
        /// The endpoint where the function was not finite
        x: f64,
    },
}
