//! Convergence diagnostics for root searches.

/// Why a root search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The bracket shrank to within tolerance of the estimate.
    Converged,
    /// The function evaluated to exactly zero at the estimate.
    ExactRoot,
    /// The iteration budget ran out before either condition held.
    IterationLimit,
}

/// Outcome of a root search together with how it ended.
///
/// `root` is always the value the never-fails API would have returned for
/// the same inputs.
///
/// # Example
///
/// ```
/// use curve_numerics::{BrentSolver, SolverConfig, Termination};
///
/// let solver = BrentSolver::new(SolverConfig::new(1e-10, 50));
/// let report = solver.solve(|x: f64| x * x - 2.0, 0.0, 2.0);
///
/// assert!(report.converged());
/// assert_eq!(report.termination, Termination::Converged);
/// assert_eq!(report.evaluations, report.iterations + 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootReport<T> {
    /// Best estimate of the root.
    pub root: T,
    /// Completed update steps, one function evaluation each.
    pub iterations: usize,
    /// Total function evaluations, including the two bracket endpoints.
    pub evaluations: usize,
    /// Stopping reason.
    pub termination: Termination,
}

impl<T> RootReport<T> {
    /// `true` unless the iteration budget was exhausted.
    pub fn converged(&self) -> bool {
        !matches!(self.termination, Termination::IterationLimit)
    }
}
