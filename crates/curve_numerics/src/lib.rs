//! # curve_numerics: Numerical Kernel for Curve Geometry
//!
//! Provides the two numerical primitives that vector-graphics code falls back
//! on whenever a closed-form answer is unavailable:
//! - Fixed-order Gauss-Legendre quadrature (`math::quadrature`), used for
//!   arc lengths and other integrals along a curve
//! - Brent's method root finding (`math::solvers`), used for curve
//!   intersections, extrema and parameter-at-length lookups
//! - Solver error types (`types::error`)
//!
//! ## Never-Fails Contract
//!
//! [`integrate`] and [`find_root`] never panic and never return an error.
//! Non-finite inputs propagate as NaN/Infinity, and a root search that runs
//! out of iterations returns its best estimate. Callers that need to know
//! whether a search converged use [`BrentSolver::solve`] or
//! [`BrentSolver::find_root_checked`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_numerics::{find_root, integrate, DEFAULT_TOLERANCE};
//!
//! // ∫₀¹ x² dx = 1/3, exact for any order >= 2
//! let area = integrate(|x: f64| x * x, 0.0, 1.0, 2);
//! assert!((area - 1.0 / 3.0).abs() < 1e-12);
//!
//! // Root of x - 0.5 in [0, 1]
//! let root = find_root(|x: f64| x - 0.5, 0.0, 1.0, 100, DEFAULT_TOLERANCE);
//! assert!((root - 0.5).abs() < DEFAULT_TOLERANCE);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig`, `QuadratureOrder` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use math::quadrature::{integrate, GaussLegendre, QuadratureOrder};
pub use math::solvers::{find_root, BrentSolver, RootReport, SolverConfig, Termination};
pub use math::DEFAULT_TOLERANCE;
pub use types::SolverError;
