//! Gauss-Legendre quadrature for definite integrals.
//!
//! Curve code integrates quantities that have no closed form, most often the
//! speed `|B'(t)|` of a Bézier curve to obtain its arc length. This module
//! provides a fixed-order rule for that purpose.
//!
//! ## Available Items
//!
//! - [`integrate`]: Free-function entry point taking the order per call
//! - [`GaussLegendre`]: Integrator with its order fixed at construction
//! - [`QuadratureOrder`]: Clamped node count (2 to 8)
//! - [`tables`]: The shared abscissa and weight tables
//!
//! ## Example
//!
//! ```
//! use curve_numerics::math::quadrature::{integrate, GaussLegendre, QuadratureOrder};
//!
//! // Length of the straight segment (0,0)-(3,4) parameterised over [0, 1]
//! let speed = |_t: f64| (3.0_f64 * 3.0 + 4.0 * 4.0).sqrt();
//! assert!((integrate(speed, 0.0, 1.0, 2) - 5.0).abs() < 1e-12);
//!
//! let rule = GaussLegendre::with_order(QuadratureOrder::MAX);
//! assert!((rule.integrate(speed, 0.0, 1.0) - 5.0).abs() < 1e-12);
//! ```

mod gauss_legendre;
mod order;
pub mod tables;

pub use gauss_legendre::{integrate, GaussLegendre};
pub use order::QuadratureOrder;
