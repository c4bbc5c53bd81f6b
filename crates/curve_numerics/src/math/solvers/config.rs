//! Solver configuration types.

use crate::math::{from_f64, DEFAULT_TOLERANCE};
use num_traits::Float;

/// Configuration for the bracketed root finder.
///
/// Holds the absolute convergence tolerance on the root's position and the
/// cap on iterations (each iteration costs one function evaluation).
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use curve_numerics::{SolverConfig, DEFAULT_TOLERANCE};
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
/// assert_eq!(config.max_iterations, 100);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 32,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the root's position.
    ///
    /// The search stops once the bracket half-width drops to about half of
    /// this value. Zero asks for full machine precision.
    pub tolerance: T,

    /// Maximum number of iterations.
    ///
    /// When exhausted, the best estimate so far is returned.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: [`DEFAULT_TOLERANCE`] (1e-5)
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: from_f64(DEFAULT_TOLERANCE),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is negative or NaN, or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_numerics::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-9, 64);
    /// assert_eq!(config.max_iterations, 64);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance >= T::zero(), "tolerance must be non-negative");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Tight tolerance (1e-12) with a larger budget (200 iterations).
    pub fn high_precision() -> Self {
        Self {
            tolerance: from_f64(1e-12),
            max_iterations: 200,
        }
    }

    /// Replace the tolerance.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self { tolerance, ..self }
    }

    /// Replace the iteration cap.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}
