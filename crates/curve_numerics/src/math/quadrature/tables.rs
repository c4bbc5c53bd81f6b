//! Gauss-Legendre coefficient tables for orders 2 through 8.
//!
//! All orders share two flattened arrays. Order `n` occupies the `n` entries
//! starting at [`segment_offset`]`(n)`; within a segment the nodes are stored
//! as symmetric `-x, +x` pairs from the outside in, with the centre node last
//! for odd orders. `ABSCISSAS[i]` and `WEIGHTS[i]` always describe the same node.

use std::ops::Range;

/// Lowest supported quadrature order.
pub const MIN_ORDER: usize = 2;

/// Highest supported quadrature order.
pub const MAX_ORDER: usize = 8;

/// Total number of nodes across all supported orders (2 + 3 + ... + 8).
pub const TABLE_LEN: usize = 35;

/// Node positions on the canonical interval `[-1, 1]`.
#[rustfmt::skip]
pub static ABSCISSAS: [f64; TABLE_LEN] = [
    // n = 2
    -0.5773502691896257, 0.5773502691896257,
    // n = 3
    -0.7745966692414834, 0.7745966692414834, 0.0,
    // n = 4
    -0.8611363115940526, 0.8611363115940526, -0.3399810435848563, 0.3399810435848563,
    // n = 5
    -0.9061798459386640, 0.9061798459386640, -0.5384693101056831, 0.5384693101056831,
    0.0,
    // n = 6
    -0.9324695142031521, 0.9324695142031521, -0.6612093864662645, 0.6612093864662645,
    -0.2386191860831969, 0.2386191860831969,
    // n = 7
    -0.9491079123427585, 0.9491079123427585, -0.7415311855993945, 0.7415311855993945,
    -0.4058451513773972, 0.4058451513773972, 0.0,
    // n = 8
    -0.9602898564975363, 0.9602898564975363, -0.7966664774136267, 0.7966664774136267,
    -0.5255324099163290, 0.5255324099163290, -0.1834346424956498, 0.1834346424956498,
];

/// Node weights, parallel to [`ABSCISSAS`].
#[rustfmt::skip]
pub static WEIGHTS: [f64; TABLE_LEN] = [
    // n = 2
    1.0, 1.0,
    // n = 3
    0.5555555555555556, 0.5555555555555556, 0.8888888888888888,
    // n = 4
    0.3478548451374538, 0.3478548451374538, 0.6521451548625461, 0.6521451548625461,
    // n = 5
    0.2369268850561891, 0.2369268850561891, 0.4786286704993665, 0.4786286704993665,
    0.5688888888888889,
    // n = 6
    0.1713244923791704, 0.1713244923791704, 0.3607615730481386, 0.3607615730481386,
    0.4679139345726910, 0.4679139345726910,
    // n = 7
    0.1294849661688697, 0.1294849661688697, 0.2797053914892766, 0.2797053914892766,
    0.3818300505051189, 0.3818300505051189, 0.4179591836734694,
    // n = 8
    0.1012285362903763, 0.1012285362903763, 0.2223810344533745, 0.2223810344533745,
    0.3137066458778873, 0.3137066458778873, 0.3626837833783620, 0.3626837833783620,
];

/// Starting index of order `n`'s segment in the flattened tables.
///
/// `offset(2) = 0`, and `offset(n) = n(n - 1)/2 - 1` for `n > 2`.
/// `n` must already lie in `MIN_ORDER..=MAX_ORDER`.
#[inline]
pub const fn segment_offset(n: usize) -> usize {
    if n == MIN_ORDER {
        0
    } else {
        n * (n - 1) / 2 - 1
    }
}

/// Index range of order `n`'s segment.
#[inline]
pub(crate) const fn segment(n: usize) -> Range<usize> {
    let start = segment_offset(n);
    start..start + n
}
