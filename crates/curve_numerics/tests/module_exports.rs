//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable both through
//! their module paths and through the crate-root re-exports.

/// Quadrature items via absolute module path.
#[test]
fn test_quadrature_module_exports() {
    use curve_numerics::math::quadrature::tables::{
        segment_offset, ABSCISSAS, MAX_ORDER, MIN_ORDER, TABLE_LEN, WEIGHTS,
    };
    use curve_numerics::math::quadrature::{integrate, GaussLegendre, QuadratureOrder};

    assert_eq!(ABSCISSAS.len(), TABLE_LEN);
    assert_eq!(WEIGHTS.len(), TABLE_LEN);
    assert_eq!(segment_offset(MAX_ORDER) + MAX_ORDER, TABLE_LEN);
    assert_eq!(QuadratureOrder::MIN.get(), MIN_ORDER);

    let _ = integrate(|x: f64| x, 0.0, 1.0, 4);
    let _ = GaussLegendre::new(4).integrate(|x: f64| x, 0.0, 1.0);
}

/// Solver items via absolute module path.
#[test]
fn test_solvers_module_exports() {
    use curve_numerics::math::solvers::{
        find_root, BrentSolver, RootReport, SolverConfig, Termination,
    };

    let config: SolverConfig<f64> = SolverConfig::default();
    let solver = BrentSolver::new(config);
    let report: RootReport<f64> = solver.solve(|x: f64| x - 0.25, 0.0, 1.0);
    assert_ne!(report.termination, Termination::IterationLimit);

    let _ = find_root(|x: f64| x - 0.25, 0.0, 1.0, 10, 1e-6);
}

/// Error types via absolute module path.
#[test]
fn test_types_module_exports() {
    use curve_numerics::types::error::SolverError;
    use curve_numerics::types::SolverError as Reexported;

    let err: Reexported = SolverError::NoBracket { a: 0.0, b: 1.0 };
    let _: &dyn std::error::Error = &err;
}

/// Crate-root re-exports.
#[test]
fn test_root_reexports() {
    use curve_numerics::{
        find_root, integrate, BrentSolver, GaussLegendre, QuadratureOrder, RootReport,
        SolverConfig, SolverError, Termination, DEFAULT_TOLERANCE,
    };

    assert_eq!(DEFAULT_TOLERANCE, 1e-5);

    let area = integrate(|x: f64| x * x, 0.0, 1.0, 2);
    assert!((area - 1.0 / 3.0).abs() < 1e-14);

    let root = find_root(|x: f64| x - 0.5, 0.0, 1.0, 100, 1e-6);
    assert!((root - 0.5).abs() <= 1e-6);

    let _ = GaussLegendre::with_order(QuadratureOrder::clamped(3));
    let solver: BrentSolver<f64> = BrentSolver::new(SolverConfig::default());
    let report: RootReport<f64> = solver.solve(|x: f64| x - 0.5, 0.0, 1.0);
    assert_eq!(report.termination, Termination::ExactRoot);

    let checked: Result<f64, SolverError> = solver.find_root_checked(|x: f64| x - 0.5, 0.0, 1.0);
    assert_eq!(checked, Ok(0.5));
}
