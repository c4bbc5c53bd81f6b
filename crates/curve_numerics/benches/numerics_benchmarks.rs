//! Criterion benchmarks for curve_numerics.
//!
//! Measures Gauss-Legendre integration across orders and Brent root finding
//! on smooth and step-like functions, including the nested case of solving
//! for a parameter at a given arc length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_numerics::{find_root, integrate, BrentSolver, SolverConfig};

/// Speed of the cubic with x-controls 0, 1, 2, 3 and y-controls 0, 2, 2, 0.
fn arch_speed(t: f64) -> f64 {
    let dy = 6.0 * (1.0 - 2.0 * t);
    3.0_f64.hypot(dy)
}

/// Benchmark integration for every supported order.
fn bench_integrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    for n in 2..=8_usize {
        group.bench_with_input(BenchmarkId::new("arch_speed", n), &n, |b, &n| {
            b.iter(|| integrate(arch_speed, black_box(0.0), black_box(1.0), n));
        });
    }

    group.finish();
}

/// Benchmark root finding at several tolerances.
fn bench_find_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_root");

    for tolerance in [1e-5, 1e-9, 1e-13] {
        group.bench_with_input(
            BenchmarkId::new("cos_minus_x", tolerance),
            &tolerance,
            |b, &tolerance| {
                b.iter(|| {
                    find_root(
                        |x: f64| x.cos() - x,
                        black_box(0.0),
                        black_box(1.0),
                        100,
                        tolerance,
                    )
                });
            },
        );
    }

    // Step function forces bisection on every iteration
    group.bench_function("step_bisection", |b| {
        let f = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
        b.iter(|| find_root(f, black_box(0.0), black_box(1.0), 100, 1e-9));
    });

    group.finish();
}

/// Benchmark the diagnostic path against the silent one.
fn bench_solver_report(c: &mut Criterion) {
    let solver = BrentSolver::new(SolverConfig::new(1e-9, 100));

    c.bench_function("solve_with_report", |b| {
        b.iter(|| {
            solver.solve(
                |x: f64| x * x * x - 2.0 * x - 5.0,
                black_box(2.0),
                black_box(3.0),
            )
        });
    });
}

/// Benchmark parameter-at-length: a root search over an integral.
fn bench_parameter_at_length(c: &mut Criterion) {
    let total = integrate(arch_speed, 0.0, 1.0, 8);

    c.bench_function("parameter_at_length", |b| {
        b.iter(|| {
            let target = black_box(0.37 * total);
            find_root(
                |t: f64| integrate(arch_speed, 0.0, t, 8) - target,
                0.0,
                1.0,
                32,
                1e-9,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_integrate,
    bench_find_root,
    bench_solver_report,
    bench_parameter_at_length
);
criterion_main!(benches);
