//! Bracketed root finding for scalar functions.
//!
//! Curve code reaches for a root finder whenever an equation in the curve
//! parameter has no closed form: the parameter at which the arc length hits
//! a target, a zero of a derivative for extrema, or a zero of a signed
//! distance for intersections. The caller always supplies the bracket.
//!
//! ## Available Solvers
//!
//! - [`find_root`]: Free-function entry point; never fails
//! - [`BrentSolver`]: Same algorithm driven by a [`SolverConfig`], with
//!   convergence diagnostics ([`BrentSolver::solve`]) and a checked variant
//!   ([`BrentSolver::find_root_checked`])
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries:
//! - `tolerance`: Convergence tolerance on the root position (default: 1e-5)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use curve_numerics::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = BrentSolver::new(SolverConfig::new(1e-12, 100));
//! let report = solver.solve(|x: f64| x * x - 2.0, 0.0, 2.0);
//!
//! assert!(report.converged());
//! assert!((report.root - std::f64::consts::SQRT_2).abs() < 1e-11);
//! ```

mod brent;
mod config;
mod report;

// Re-export public types at module level
pub use brent::{find_root, BrentSolver};
pub use config::SolverConfig;
pub use report::{RootReport, Termination};
