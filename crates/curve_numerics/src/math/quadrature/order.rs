//! Quadrature order selection.

use super::tables::{segment, ABSCISSAS, MAX_ORDER, MIN_ORDER, WEIGHTS};

/// Number of Gauss-Legendre nodes used for one integral.
///
/// Always lies in `2..=8`. Construction clamps out-of-range requests instead
/// of rejecting them, so `QuadratureOrder::clamped(0)` is order 2 and
/// `QuadratureOrder::clamped(100)` is order 8. An order `n` rule integrates
/// polynomials of degree up to `2n - 1` exactly.
///
/// # Example
///
/// ```
/// use curve_numerics::QuadratureOrder;
///
/// assert_eq!(QuadratureOrder::clamped(1).get(), 2);
/// assert_eq!(QuadratureOrder::clamped(5).get(), 5);
/// assert_eq!(QuadratureOrder::clamped(12), QuadratureOrder::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "usize", into = "usize"))]
pub struct QuadratureOrder(usize);

impl QuadratureOrder {
    /// Two-point rule.
    pub const MIN: Self = Self(MIN_ORDER);

    /// Eight-point rule.
    pub const MAX: Self = Self(MAX_ORDER);

    /// Order `n`, clamped to the supported range.
    #[inline]
    pub const fn clamped(n: usize) -> Self {
        if n < MIN_ORDER {
            Self::MIN
        } else if n > MAX_ORDER {
            Self::MAX
        } else {
            Self(n)
        }
    }

    /// Number of nodes.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Node positions on `[-1, 1]` for this order.
    #[inline]
    pub fn abscissas(self) -> &'static [f64] {
        &ABSCISSAS[segment(self.0)]
    }

    /// Node weights for this order, parallel to [`abscissas`](Self::abscissas).
    #[inline]
    pub fn weights(self) -> &'static [f64] {
        &WEIGHTS[segment(self.0)]
    }

    /// `(abscissa, weight)` pairs in table order.
    pub fn nodes(self) -> impl Iterator<Item = (f64, f64)> {
        self.abscissas()
            .iter()
            .copied()
            .zip(self.weights().iter().copied())
    }
}

impl Default for QuadratureOrder {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<usize> for QuadratureOrder {
    fn from(n: usize) -> Self {
        Self::clamped(n)
    }
}

impl From<QuadratureOrder> for usize {
    fn from(order: QuadratureOrder) -> Self {
        order.0
    }
}

impl std::fmt::Display for QuadratureOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-point Gauss-Legendre", self.0)
    }
}
