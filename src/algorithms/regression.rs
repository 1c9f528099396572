//! Least-squares linear regression.
//!
//! ## Purpose
//!
//! This module fits the best straight line through a point set and reports
//! its fit quality. It is the computation behind a least-squares regression
//! line adornment and is rerun from scratch whenever the displayed points,
//! the selection, the legend category, or the intercept lock change.
//!
//! ## Design notes
//!
//! * **Pure**: No hidden state; the same input always yields bit-identical output.
//! * **Closed form**: Uses the normal-equation formulas over running sums.
//! * **No failure path**: Degenerate inputs produce NaN-bearing results, not errors.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Free line**: Minimizes `Σ (y_i − (slope·x_i + intercept))²`.
//! * **Intercept lock**: Forces the line through the origin.
//! * **Vertical line**: When every x is identical the slope is undefined and
//!   the result is flagged `is_vertical`.
//!
//! ## Invariants
//!
//! * `is_vertical` is true iff `slope` is non-finite.
//! * With the intercept locked, `intercept` is exactly zero.
//! * With fewer than 2 points, `r_squared` and `sum_squares_residuals` are NaN.
//!
//! ## Non-goals
//!
//! * This module does not filter points by category or selection (handled by engine).
//! * This module does not decide whether a new result should be displayed.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::evaluation::diagnostics::LineDiagnostics;
use crate::math::moments::Moments;
use crate::primitives::points::Point;

// ============================================================================
// Regression Result
// ============================================================================

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegressionResult<T> {
    /// Slope of the line; NaN when the line is vertical.
    pub slope: T,

    /// Value of the line at `x = 0`; NaN for a vertical free line, exactly
    /// zero whenever the intercept is locked.
    pub intercept: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Residual sum of squares.
    pub sum_squares_residuals: T,

    /// Whether the slope is non-finite.
    pub is_vertical: bool,
}

impl<T: Float> RegressionResult<T> {
    /// Whether two results carry the same values, treating NaN as equal to NaN.
    ///
    /// Callers use this to skip downstream updates when a recompute produced
    /// nothing new.
    pub fn same_values(&self, other: &Self) -> bool {
        same_float(self.slope, other.slope)
            && same_float(self.intercept, other.intercept)
            && same_float(self.r_squared, other.r_squared)
            && same_float(self.sum_squares_residuals, other.sum_squares_residuals)
            && self.is_vertical == other.is_vertical
    }

    /// Whether the fit quality numbers can be shown.
    #[inline]
    pub fn has_measures(&self) -> bool {
        self.r_squared.is_finite() && self.sum_squares_residuals.is_finite()
    }
}

/// Float equality where NaN equals NaN.
#[inline]
pub fn same_float<T: Float>(a: T, b: T) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl<T: Float + Display> Display for RegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Least-Squares Line:")?;
        if self.is_vertical {
            writeln!(f, "  Slope:        vertical")?;
            writeln!(f, "  Intercept:    none")?;
        } else {
            writeln!(f, "  Slope:        {:.6}", self.slope)?;
            writeln!(f, "  Intercept:    {:.6}", self.intercept)?;
        }
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        write!(f, "  SSR:          {:.6}", self.sum_squares_residuals)
    }
}

// ============================================================================
// Regression
// ============================================================================

/// Fit a least-squares line through `points`.
///
/// Category and selection filtering must already have been applied; every
/// point in the slice takes part in the fit.
///
/// # Formula
///
/// ```text
/// lock_intercept = false:
///   slope     = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)
///   intercept = (Σy − slope·Σx) / n
///
/// lock_intercept = true:
///   slope     = Σxy / Σx²
///   intercept = 0
/// ```
pub fn compute_regression<T: Float>(
    points: &[Point<'_, T>],
    lock_intercept: bool,
) -> RegressionResult<T> {
    regress_pairs(points.iter().map(|p| (p.x, p.y)), lock_intercept)
}

/// Fit a least-squares line through `(x, y)` pairs.
///
/// The iterator is walked twice: once for the running sums and once for the
/// residuals.
pub fn regress_pairs<T, I>(pairs: I, lock_intercept: bool) -> RegressionResult<T>
where
    T: Float,
    I: IntoIterator<Item = (T, T)>,
    I::IntoIter: Clone,
{
    let pairs = pairs.into_iter();
    let moments: Moments<T> = pairs.clone().collect();

    let (slope, intercept) = if lock_intercept {
        moments.fit_through_origin()
    } else {
        moments.fit_line()
    };

    let is_vertical = !slope.is_finite();
    let diagnostics = if is_vertical {
        LineDiagnostics::undefined()
    } else {
        LineDiagnostics::compute(pairs, slope, intercept, moments.mean_y())
    };

    RegressionResult {
        slope,
        intercept,
        r_squared: diagnostics.r_squared,
        sum_squares_residuals: diagnostics.sum_squares_residuals,
        is_vertical,
    }
}
