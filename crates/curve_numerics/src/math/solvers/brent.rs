//! Brent's method root-finding solver.

use super::{RootReport, SolverConfig, Termination};
use crate::math::from_f64;
use crate::types::SolverError;
use num_traits::Float;
use tracing::{debug, trace, warn};

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Superlinear for smooth
/// functions with a valid bracket, and never slower than bisection by more
/// than a bounded factor.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// Each iteration keeps three abscissas: `b` (best estimate), `a` (previous
/// `b`) and `c` (contrapoint, with `f(c)` of opposite sign to `f(b)`). It then
/// tries, in order:
/// - **Inverse quadratic interpolation** through `a`, `b`, `c`
/// - **Secant step** through `a` and `b` when only two points are distinct
/// - **Bisection** of `[b, c]` when the interpolated step is rejected
///
/// # Example
///
/// ```
/// use curve_numerics::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::new(1e-10, 100));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0);
/// assert!(f(root).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// `f(a)` and `f(b)` should have opposite signs. This is not checked:
    /// without a sign change the search still terminates and returns its best
    /// estimate. Evaluates `f` at most `max_iterations + 2` times.
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> T
    where
        F: FnMut(T) -> T,
    {
        find_root(f, a, b, self.config.max_iterations, self.config.tolerance)
    }

    /// Run the search and report how it ended.
    ///
    /// `report.root` is bit-identical to what [`find_root`](Self::find_root)
    /// returns for the same inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_numerics::{BrentSolver, SolverConfig, Termination};
    ///
    /// // Zero tolerance cannot be met within three steps
    /// let solver = BrentSolver::new(SolverConfig { tolerance: 0.0, max_iterations: 3 });
    /// let report = solver.solve(|x: f64| x.cos() - x, 0.0, 1.0);
    ///
    /// assert_eq!(report.termination, Termination::IterationLimit);
    /// assert_eq!(report.evaluations, 5);
    /// ```
    pub fn solve<F>(&self, mut f: F, a: T, b: T) -> RootReport<T>
    where
        F: FnMut(T) -> T,
    {
        let fa = f(a);
        let fb = f(b);
        let (report, half_width) = brent(
            &mut f,
            a,
            b,
            fa,
            fb,
            self.config.max_iterations,
            self.config.tolerance,
        );

        let root = to_f64(report.root);
        match report.termination {
            Termination::IterationLimit => debug!(
                root,
                iterations = report.iterations,
                half_width = to_f64(half_width),
                "root search exhausted its iteration budget"
            ),
            termination => trace!(
                root,
                iterations = report.iterations,
                ?termination,
                "root search finished"
            ),
        }

        report
    }

    /// Find a root, reporting invalid brackets and non-convergence as errors.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - The search converged (or hit an exact zero)
    /// * `Err(SolverError::NonFiniteValue)` - `f(a)` or `f(b)` is NaN or infinite
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` are nonzero with the same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Budget exhausted; carries the best estimate
    ///
    /// # Example
    ///
    /// ```
    /// use curve_numerics::{BrentSolver, SolverError};
    ///
    /// let solver: BrentSolver<f64> = BrentSolver::with_defaults();
    ///
    /// let err = solver.find_root_checked(|x: f64| x * x + 1.0, -1.0, 1.0).unwrap_err();
    /// assert!(matches!(err, SolverError::NoBracket { .. }));
    /// ```
    pub fn find_root_checked<F>(&self, mut f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: FnMut(T) -> T,
    {
        let fa = f(a);
        let fb = f(b);

        if !fa.is_finite() {
            return Err(SolverError::NonFiniteValue { x: to_f64(a) });
        }
        if !fb.is_finite() {
            return Err(SolverError::NonFiniteValue { x: to_f64(b) });
        }
        if same_sign(fa, fb) {
            warn!(a = to_f64(a), b = to_f64(b), "root search bracket has no sign change");
            return Err(SolverError::NoBracket {
                a: to_f64(a),
                b: to_f64(b),
            });
        }

        let (report, _) = brent(
            &mut f,
            a,
            b,
            fa,
            fb,
            self.config.max_iterations,
            self.config.tolerance,
        );

        if report.converged() {
            Ok(report.root)
        } else {
            Err(SolverError::MaxIterationsExceeded {
                iterations: report.iterations,
                best: to_f64(report.root),
            })
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// Find a root of `f` in the bracket `[a, b]` with Brent's method.
///
/// The search stops when the bracket half-width falls to
/// `2·EPS·|b| + tolerance/2` (`EPS` being the smallest positive subnormal),
/// when `f(b)` is exactly zero, or after `max_iterations` iterations. In every
/// case the current best estimate is returned; this function never fails.
///
/// The bracket is not validated. `f` is evaluated at most
/// `max_iterations + 2` times.
///
/// # Example
///
/// ```
/// use curve_numerics::find_root;
///
/// let root = find_root(|x: f64| x - 0.5, 0.0, 1.0, 100, 1e-6);
/// assert!((root - 0.5).abs() <= 1e-6);
/// ```
pub fn find_root<T, F>(mut f: F, a: T, b: T, max_iterations: usize, tolerance: T) -> T
where
    T: Float,
    F: FnMut(T) -> T,
{
    let fa = f(a);
    let fb = f(b);
    brent(&mut f, a, b, fa, fb, max_iterations, tolerance).0.root
}

/// Core iteration, starting from already evaluated endpoints.
///
/// Returns the report together with the half-width of the final bracket.
fn brent<T, F>(
    f: &mut F,
    a: T,
    b: T,
    fa: T,
    fb: T,
    max_iterations: usize,
    tolerance: T,
) -> (RootReport<T>, T)
where
    T: Float,
    F: FnMut(T) -> T,
{
    let half = from_f64::<T>(0.5);
    let two = from_f64::<T>(2.0);
    // 2^-1074 for f64: the smallest positive subnormal
    let tiny = T::min_positive_value() * T::epsilon();
    let threshold = |b: T| two * tiny * b.abs() + half * tolerance;

    let mut state = BrentState::new(a, b, fa, fb);

    for iteration in 0..max_iterations {
        state.maintain_bracket();
        state.promote_best();

        let tol1 = threshold(state.b);
        let xm = half * (state.c - state.b);

        if state.fb == T::zero() {
            return (state.finish(iteration, Termination::ExactRoot), xm.abs());
        }
        if xm.abs() <= tol1 {
            return (state.finish(iteration, Termination::Converged), xm.abs());
        }

        state.select_step(tol1, xm);
        state.advance(f, tol1, xm);
    }

    // The last step may already have landed on the root; classify it
    // without moving `b` or evaluating `f` again.
    let xm = half * (state.contrapoint() - state.b);
    let termination = if state.fb == T::zero() {
        Termination::ExactRoot
    } else if xm.abs() <= threshold(state.b) {
        Termination::Converged
    } else {
        Termination::IterationLimit
    };

    (state.finish(max_iterations, termination), xm.abs())
}

/// Working set of one Brent search.
///
/// `b` is the best estimate, `a` the previous `b`, `c` the contrapoint.
/// `d` is the latest step and `e` the one before it.
struct BrentState<T> {
    a: T,
    b: T,
    c: T,
    fa: T,
    fb: T,
    fc: T,
    d: T,
    e: T,
}

impl<T: Float> BrentState<T> {
    fn new(a: T, b: T, fa: T, fb: T) -> Self {
        Self {
            a,
            b,
            c: b,
            fa,
            fb,
            fc: fb,
            d: T::zero(),
            e: T::zero(),
        }
    }

    /// Drop a contrapoint that no longer brackets the root with `b`.
    fn maintain_bracket(&mut self) {
        if same_sign(self.fb, self.fc) {
            self.c = self.a;
            self.fc = self.fa;
            self.d = self.b - self.a;
            self.e = self.d;
        }
    }

    /// The point bracketing the root with `b`, as the next pass would see it.
    fn contrapoint(&self) -> T {
        if same_sign(self.fb, self.fc) {
            self.a
        } else {
            self.c
        }
    }

    /// Keep the smaller residual in `b`.
    fn promote_best(&mut self) {
        if self.fc.abs() < self.fb.abs() {
            self.a = self.b;
            self.b = self.c;
            self.c = self.a;
            self.fa = self.fb;
            self.fb = self.fc;
            self.fc = self.fa;
        }
    }

    /// Choose the next step `d`, interpolating when it is safe to.
    fn select_step(&mut self, tol1: T, xm: T) {
        if self.e.abs() >= tol1 && self.fa.abs() > self.fb.abs() {
            let one = T::one();
            let two = from_f64::<T>(2.0);
            let three = from_f64::<T>(3.0);

            let s = self.fb / self.fa;
            let (p, q) = if self.a == self.c {
                // secant
                (two * xm * s, one - s)
            } else {
                // inverse quadratic interpolation
                let q = self.fa / self.fc;
                let r = self.fb / self.fc;
                (
                    s * (two * xm * q * (q - r) - (self.b - self.a) * (r - one)),
                    (q - one) * (r - one) * (s - one),
                )
            };

            let q = if p > T::zero() { -q } else { q };
            let p = p.abs();

            let min1 = three * xm * q - (tol1 * q).abs();
            let min2 = (self.e * q).abs();
            let bound = if min1 < min2 { min1 } else { min2 };

            if two * p < bound {
                self.e = self.d;
                self.d = p / q;
                return;
            }
        }

        self.d = xm;
        self.e = self.d;
    }

    /// Move `b` by `d`, or by at least `tol1` towards `c`.
    fn advance<F>(&mut self, f: &mut F, tol1: T, xm: T)
    where
        F: FnMut(T) -> T,
    {
        self.a = self.b;
        self.fa = self.fb;

        self.b = if self.d.abs() > tol1 {
            self.b + self.d
        } else if xm >= T::zero() {
            self.b + tol1.abs()
        } else {
            self.b - tol1.abs()
        };
        self.fb = f(self.b);
    }

    fn finish(&self, iterations: usize, termination: Termination) -> RootReport<T> {
        RootReport {
            root: self.b,
            iterations,
            evaluations: iterations + 2,
            termination,
        }
    }
}

/// Both strictly positive or both strictly negative.
#[inline]
fn same_sign<T: Float>(x: T, y: T) -> bool {
    let zero = T::zero();
    (x > zero && y > zero) || (x < zero && y < zero)
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
