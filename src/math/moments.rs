//! Running sums for least-squares line fitting.
//!
//! ## Purpose
//!
//! This module accumulates the sums the closed-form least-squares formulas
//! need (`n`, `Σx`, `Σy`, `Σx²`, `Σxy`) in a single pass, and turns them into
//! a slope and intercept.
//!
//! ## Design notes
//!
//! * **Single pass**: Points are pushed one at a time; nothing is stored.
//! * **Exact degeneracy**: The x-range is tracked so that a set of identical
//!   x-values yields a denominator of exactly zero, regardless of rounding in
//!   `nΣx² − (Σx)²`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Free line**: `slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)`,
//!   `intercept = (Σy − slope·Σx) / n`.
//! * **Line through the origin**: `slope = Σxy / Σx²`, `intercept = 0`.
//!
//! ## Invariants
//!
//! * A zero denominator yields a NaN slope and a NaN intercept.
//! * A locked intercept is always exactly zero.

// External dependencies
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Running sums over a set of `(x, y)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Number of pairs pushed.
    pub n: usize,
    /// Σx
    pub sum_x: T,
    /// Σy
    pub sum_y: T,
    /// Σx²
    pub sum_xx: T,
    /// Σxy
    pub sum_xy: T,
    x_min: T,
    x_max: T,
}

impl<T: Float> Default for Moments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Moments<T> {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            n: 0,
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xx: T::zero(),
            sum_xy: T::zero(),
            x_min: T::infinity(),
            x_max: T::neg_infinity(),
        }
    }

    /// Accumulate one pair.
    #[inline]
    pub fn push(&mut self, x: T, y: T) {
        self.n += 1;
        self.sum_x = self.sum_x + x;
        self.sum_y = self.sum_y + y;
        self.sum_xx = self.sum_xx + x * x;
        self.sum_xy = self.sum_xy + x * y;
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
    }

    /// Whether every pushed x-value is the same (true for an empty set).
    #[inline]
    pub fn x_is_constant(&self) -> bool {
        self.n == 0 || self.x_min == self.x_max
    }

    /// Fit `y = slope·x + intercept`.
    ///
    /// Returns `(slope, intercept)`; both are NaN when the slope denominator
    /// is zero.
    pub fn fit_line(&self) -> (T, T) {
        let n = T::from(self.n).unwrap_or_else(T::nan);
        let denom = if self.x_is_constant() {
            T::zero()
        } else {
            n * self.sum_xx - self.sum_x * self.sum_x
        };
        if denom == T::zero() {
            return (T::nan(), T::nan());
        }

        let slope = (n * self.sum_xy - self.sum_x * self.sum_y) / denom;
        let intercept = (self.sum_y - slope * self.sum_x) / n;
        (slope, intercept)
    }

    /// Fit `y = slope·x` (intercept locked at the origin).
    ///
    /// Returns `(slope, 0)`; the slope is NaN when `Σx² = 0`.
    pub fn fit_through_origin(&self) -> (T, T) {
        if self.sum_xx == T::zero() {
            return (T::nan(), T::zero());
        }
        (self.sum_xy / self.sum_xx, T::zero())
    }

    /// Mean of the pushed y-values (NaN when empty).
    #[inline]
    pub fn mean_y(&self) -> T {
        if self.n == 0 {
            return T::nan();
        }
        self.sum_y / T::from(self.n).unwrap_or_else(T::nan)
    }
}

impl<T: Float> FromIterator<(T, T)> for Moments<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut moments = Self::new();
        for (x, y) in iter {
            moments.push(x, y);
        }
        moments
    }
}
