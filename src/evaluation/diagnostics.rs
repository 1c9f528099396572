//! Fit quality for a straight line.
//!
//! ## Purpose
//!
//! This module computes the residual sum of squares and the coefficient of
//! determination for a line `ŷ = slope·x + intercept` over a point set.
//!
//! ## Design notes
//!
//! * **Residual-based**: Both metrics come from residuals `y_i − ŷ_i`.
//! * **Two pass**: The mean of y is known up front (from the running sums),
//!   so one more pass over the points is enough.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **SSR**: `Σ (y_i − ŷ_i)²`.
//! * **SST**: `Σ (y_i − ȳ)²`.
//! * **R^2**: `1 − SSR / SST`.
//!
//! ## Invariants
//!
//! * With fewer than 2 points both metrics are NaN.
//! * A NaN slope or intercept propagates NaN into both metrics.
//! * When every y is equal (`SST = 0`), R^2 is NaN: there is no variance to explain.
//!
//! ## Non-goals
//!
//! * This module does not fit the line.
//! * This module does not compute standard errors or intervals.

// External dependencies
use num_traits::Float;

// ============================================================================
// Line Diagnostics
// ============================================================================

/// Goodness-of-fit metrics for a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDiagnostics<T> {
    /// Residual sum of squares.
    pub sum_squares_residuals: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> LineDiagnostics<T> {
    /// Both metrics undefined.
    pub fn undefined() -> Self {
        Self {
            sum_squares_residuals: T::nan(),
            r_squared: T::nan(),
        }
    }

    /// Compute SSR and R^2 for `slope·x + intercept` over `points`.
    ///
    /// `mean_y` is the mean of the y-values in `points`.
    pub fn compute<I>(points: I, slope: T, intercept: T, mean_y: T) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut n = 0usize;
        let mut ssr = T::zero();
        let mut sst = T::zero();
        for (x, y) in points {
            let residual = y - (slope * x + intercept);
            let deviation = y - mean_y;
            ssr = ssr + residual * residual;
            sst = sst + deviation * deviation;
            n += 1;
        }

        if n < 2 {
            return Self::undefined();
        }

        let r_squared = if sst == T::zero() {
            T::nan()
        } else {
            T::one() - ssr / sst
        };

        Self {
            sum_squares_residuals: ssr,
            r_squared,
        }
    }
}
