//! Tests for least-squares regression.
//!
//! These tests verify the regression core used by the LSRL adornment:
//! - Closed-form slope and intercept, free and through the origin
//! - Vertical-line and too-few-points result states
//! - Least-squares optimality against a brute-force grid search
//! - Determinism and the checked slice fitter
//!
//! ## Test Organization
//!
//! 1. **Free Line** - Unlocked regression
//! 2. **Locked Intercept** - Regression through the origin
//! 3. **Degenerate Inputs** - Vertical lines and tiny point sets
//! 4. **Optimality** - Brute-force comparison on random sets
//! 5. **Checked Fitter** - Slice validation and display

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use plotfit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn points_from(pairs: &[(f64, f64)]) -> Vec<Point<'static, f64>> {
    pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn ssr(points: &[Point<'_, f64>], slope: f64, intercept: f64) -> f64 {
    points
        .iter()
        .map(|p| {
            let r = p.y - (slope * p.x + intercept);
            r * r
        })
        .sum()
}

fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point<'static, f64>> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(-10.0..10.0);
            let y = 0.7 * x - 3.0 + rng.random_range(-2.0..2.0);
            Point::new(x, y)
        })
        .collect()
}

// ============================================================================
// Free Line
// ============================================================================

#[test]
fn test_perfect_line() {
    let points = points_from(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0), (4.0, 9.0)]);
    let fit = compute_regression(&points, false);

    assert!(!fit.is_vertical);
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.sum_squares_residuals, 0.0, epsilon = 1e-12);
}

#[test]
fn test_noisy_line_matches_textbook_formulas() {
    let points = points_from(&[(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8)]);
    let fit = compute_regression(&points, false);

    // slope = (4·59.7 − 10·20) / (4·30 − 100)
    assert_relative_eq!(fit.slope, 1.94, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 0.15, epsilon = 1e-12);
    assert_relative_eq!(
        fit.sum_squares_residuals,
        ssr(&points, fit.slope, fit.intercept),
        epsilon = 1e-12
    );
}

#[test]
fn test_r_squared_is_squared_correlation() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = random_points(&mut rng, 25);
    let fit = compute_regression(&points, false);

    let n = points.len() as f64;
    let mx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let my = points.iter().map(|p| p.y).sum::<f64>() / n;
    let sxy: f64 = points.iter().map(|p| (p.x - mx) * (p.y - my)).sum();
    let sxx: f64 = points.iter().map(|p| (p.x - mx).powi(2)).sum();
    let syy: f64 = points.iter().map(|p| (p.y - my).powi(2)).sum();
    let r = sxy / (sxx * syy).sqrt();

    assert_relative_eq!(fit.r_squared, r * r, epsilon = 1e-10);
}

#[test]
fn test_horizontal_line_has_undefined_r_squared() {
    let points = points_from(&[(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)]);
    let fit = compute_regression(&points, false);

    assert!(!fit.is_vertical);
    assert_eq!(fit.slope, 0.0);
    assert_eq!(fit.intercept, 4.0);
    assert_eq!(fit.sum_squares_residuals, 0.0);
    assert!(fit.r_squared.is_nan());
    assert!(!fit.has_measures());
}

#[test]
fn test_f32_points() {
    let points = [
        Point::new(0.0_f32, 1.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 3.0),
    ];
    let fit = compute_regression(&points, false);
    assert_relative_eq!(fit.slope, 1.0_f32, epsilon = 1e-6);
    assert_relative_eq!(fit.intercept, 1.0_f32, epsilon = 1e-6);
}

// ============================================================================
// Locked Intercept
// ============================================================================

#[test]
fn test_locked_intercept_slope() {
    let points = points_from(&[(1.0, 2.0), (2.0, 3.0), (3.0, 7.0)]);
    let fit = compute_regression(&points, true);

    // Σxy / Σx² = 29 / 14
    assert_relative_eq!(fit.slope, 29.0 / 14.0, epsilon = 1e-12);
    assert!(!fit.is_vertical);
}

#[test]
fn test_locked_intercept_is_exactly_zero() {
    let mut rng = StdRng::seed_from_u64(11);
    let sets = [
        random_points(&mut rng, 10),
        points_from(&[(1.0, 100.0), (2.0, 100.0)]),
        points_from(&[(5.0, 1.0), (5.0, 9.0)]),
        points_from(&[(0.0, 1.0), (0.0, 2.0)]),
        points_from(&[(3.0, 6.0)]),
        Vec::new(),
    ];
    for points in &sets {
        let fit = compute_regression(points, true);
        assert_eq!(fit.intercept.to_bits(), 0.0_f64.to_bits());
    }
}

#[test]
fn test_locked_single_point() {
    let fit = compute_regression(&points_from(&[(2.0, 4.0)]), true);
    assert_eq!(fit.slope, 2.0);
    assert!(fit.r_squared.is_nan());
    assert!(fit.sum_squares_residuals.is_nan());
}

#[test]
fn test_locked_all_zero_x_is_vertical() {
    let fit = compute_regression(&points_from(&[(0.0, 1.0), (0.0, 2.0)]), true);
    assert!(fit.is_vertical);
    assert_eq!(fit.intercept, 0.0);
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_identical_x_is_vertical() {
    let fit = compute_regression(&points_from(&[(5.0, 1.0), (5.0, 9.0)]), false);

    assert!(fit.is_vertical);
    assert!(!fit.slope.is_finite());
    assert!(fit.r_squared.is_nan());
    assert!(fit.sum_squares_residuals.is_nan());
}

#[test]
fn test_identical_fractional_x_is_vertical() {
    // nΣx² − (Σx)² does not round to exactly zero for these values
    let fit = compute_regression(&points_from(&[(0.1, 1.0), (0.1, 2.0), (0.1, 7.0)]), false);
    assert!(fit.is_vertical);
}

#[test]
fn test_fewer_than_two_points() {
    let single = compute_regression(&points_from(&[(3.0, 4.0)]), false);
    assert!(single.r_squared.is_nan());
    assert!(single.sum_squares_residuals.is_nan());
    assert!(single.is_vertical);

    let empty = compute_regression::<f64>(&[], false);
    assert!(empty.is_vertical);
    assert!(empty.slope.is_nan());
    assert!(empty.r_squared.is_nan());
}

#[test]
fn test_vertical_iff_slope_non_finite() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 0..6 {
        let points = random_points(&mut rng, n);
        for locked in [false, true] {
            let fit = compute_regression(&points, locked);
            assert_eq!(fit.is_vertical, !fit.slope.is_finite());
        }
    }
}

#[test]
fn test_legend_labels_do_not_affect_fit() {
    let labelled = [
        Point::with_legend(1.0, 2.0, "a"),
        Point::with_legend(2.0, 4.5, "b"),
        Point::new(3.0, 5.5),
    ];
    let plain = points_from(&[(1.0, 2.0), (2.0, 4.5), (3.0, 5.5)]);
    assert_eq!(
        compute_regression(&labelled, false),
        compute_regression(&plain, false)
    );
}

// ============================================================================
// Optimality and Determinism
// ============================================================================

#[test]
fn test_free_line_minimizes_squared_residuals() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let points = random_points(&mut rng, 8);
        let fit = compute_regression(&points, false);
        let best = ssr(&points, fit.slope, fit.intercept);
        assert_relative_eq!(best, fit.sum_squares_residuals, epsilon = 1e-9);

        for i in -40..=40 {
            for j in -40..=40 {
                let slope = fit.slope + i as f64 * 0.05;
                let intercept = fit.intercept + j as f64 * 0.05;
                assert!(ssr(&points, slope, intercept) >= best - 1e-9);
            }
        }
    }
}

#[test]
fn test_locked_line_minimizes_squared_residuals() {
    let mut rng = StdRng::seed_from_u64(43);
    let points = random_points(&mut rng, 12);
    let fit = compute_regression(&points, true);
    let best = ssr(&points, fit.slope, 0.0);

    for i in -400..=400 {
        let slope = fit.slope + i as f64 * 0.005;
        assert!(ssr(&points, slope, 0.0) >= best - 1e-9);
    }
}

#[test]
fn test_recompute_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let points = random_points(&mut rng, 30);
    for locked in [false, true] {
        let a = compute_regression(&points, locked);
        let b = compute_regression(&points, locked);
        assert_eq!(a.slope.to_bits(), b.slope.to_bits());
        assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
        assert_eq!(a.r_squared.to_bits(), b.r_squared.to_bits());
        assert_eq!(
            a.sum_squares_residuals.to_bits(),
            b.sum_squares_residuals.to_bits()
        );
        assert!(a.same_values(&b));
    }
}

#[test]
fn test_same_values_treats_nan_as_equal() {
    let vertical = compute_regression(&points_from(&[(5.0, 1.0), (5.0, 9.0)]), false);
    assert_ne!(vertical, vertical);
    assert!(vertical.same_values(&vertical));
}

// ============================================================================
// Checked Fitter
// ============================================================================

#[test]
fn test_checked_fit_and_display() {
    let model = Regression::new().build().unwrap();
    assert!(!model.is_intercept_locked());

    let fit = model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert_eq!(
        format!("{}", fit),
        "Least-Squares Line:\n  Slope:        2.000000\n  Intercept:    0.000000\n  R^2:          1.000000\n  SSR:          0.000000"
    );
}

#[test]
fn test_checked_fit_display_vertical() {
    let model = Regression::new().build().unwrap();
    let fit = model.fit(&[5.0, 5.0], &[1.0, 9.0]).unwrap();
    let text = format!("{}", fit);
    assert!(text.contains("Slope:        vertical"));
    assert!(text.contains("Intercept:    none"));
}

#[test]
fn test_checked_fit_locked() {
    let model = Regression::new().lock_intercept(true).build().unwrap();
    let fit = model.fit(&[1.0, 2.0, 3.0], &[2.0, 3.0, 7.0]).unwrap();
    assert_eq!(fit.intercept, 0.0);
    assert_relative_eq!(fit.slope, 29.0 / 14.0, epsilon = 1e-12);
}

#[test]
fn test_checked_fit_rejects_mismatched_lengths() {
    let model = Regression::new().build().unwrap();
    let err = model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, PlotError::MismatchedInputs { x_len: 3, y_len: 2 });
}

#[test]
fn test_checked_fit_rejects_non_finite() {
    let model = Regression::new().build().unwrap();
    let err = model.fit(&[1.0, 2.0], &[1.0, f64::NAN]).unwrap_err();
    assert_eq!(format!("{}", err), "Invalid numeric value: y[1]=NaN");

    let err = model.fit(&[f64::INFINITY, 2.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(format!("{}", err), "Invalid numeric value: x[0]=inf");
}

#[test]
fn test_checked_fit_accepts_empty_input() {
    let model = Regression::new().build().unwrap();
    let fit = model.fit::<f64>(&[], &[]).unwrap();
    assert!(fit.is_vertical);
    assert!(!fit.has_measures());
}

#[test]
fn test_builder_duplicate_parameter() {
    let err = Regression::new()
        .lock_intercept(true)
        .lock_intercept(false)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PlotError::DuplicateParameter {
            parameter: "lock_intercept"
        }
    );
}
