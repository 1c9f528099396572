//! Least-squares regression line (LSRL) model.
//!
//! ## Purpose
//!
//! This module provides the model behind a least-squares regression line
//! adornment. It knows which attributes are plotted, which legend category
//! (if any) the line belongs to, whether the intercept is locked, and whether
//! measures are restricted to the selected cases. On request it refits the
//! line and folds the new values into its [`LineModel`].
//!
//! ## Design notes
//!
//! * **Composition**: A plain [`LineModel`] value is populated from the output
//!   of [`compute_regression`]; there is no line-model hierarchy.
//! * **Explicit triggers**: Property observers are replaced by
//!   [`LsrlModel::handle`], which marks the model as needing computation when a
//!   relevant [`ChangeEvent`] arrives.
//! * **Change suppression**: Fields are only written when their value changed
//!   (NaN counts as equal to NaN), and a NaN-to-NaN transition of the slope or
//!   the intercept skips the update entirely.
//! * **No reentrancy**: Recomputing takes `&mut self` and invokes no callbacks,
//!   so a recompute cannot be started from inside another.
//!
//! ## Key concepts
//!
//! * **Category line**: With a category index set, only points whose legend
//!   label resolves to that index (and unlabelled points) are fitted.
//! * **Measures for selection**: When enabled, only selected cases are fitted.
//!
//! ## Invariants
//!
//! * The first computed result is always applied.
//! * After an applied update, `x_intercept` is `None`.
//! * `is_vertical` mirrors the non-finiteness of the applied slope.
//!
//! ## Non-goals
//!
//! * This module does not draw the line or format its equation.

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::adapters::events::ChangeEvent;
use crate::algorithms::regression::{compute_regression, same_float, RegressionResult};
use crate::engine::cases::{
    collect_points, filter_by_category, CaseRecord, CategoryResolver, CoordinateAttributes,
};
use crate::engine::validator::Validator;
use crate::primitives::errors::PlotError;
use crate::primitives::points::AttributeId;

// ============================================================================
// Line Model
// ============================================================================

/// The displayed state of a straight-line adornment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineModel<T> {
    /// Slope of the line.
    pub slope: T,

    /// Value of the line at `x = 0`.
    pub intercept: T,

    /// Whether the line is vertical.
    pub is_vertical: bool,

    /// Where a vertical line crosses the x-axis, when known.
    pub x_intercept: Option<T>,

    /// Coefficient of determination of the fit.
    pub r_squared: T,

    /// Residual sum of squares of the fit.
    pub sum_squares_residuals: T,
}

impl<T: Float> LineModel<T> {
    /// Line values taken directly from a regression result.
    pub fn from_result(result: &RegressionResult<T>) -> Self {
        Self {
            slope: result.slope,
            intercept: result.intercept,
            is_vertical: !result.slope.is_finite(),
            x_intercept: None,
            r_squared: result.r_squared,
            sum_squares_residuals: result.sum_squares_residuals,
        }
    }

    /// Height of the line at `x`, or `None` for a vertical line.
    pub fn value_at(&self, x: T) -> Option<T> {
        (!self.is_vertical).then(|| self.slope * x + self.intercept)
    }
}

/// What a recompute did to the line model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeOutcome {
    /// No relevant change had been signalled.
    NotNeeded,

    /// The new fit matched the displayed line exactly.
    Unchanged,

    /// The new slope or intercept was undefined, as was the displayed one.
    Suppressed,

    /// At least one field of the line model was rewritten.
    Updated,
}

/// Write `value` into `slot` if it differs; NaN is equal to NaN.
#[inline]
fn set_if_changed<T: Float>(slot: &mut T, value: T) -> bool {
    if same_float(*slot, value) {
        return false;
    }
    *slot = value;
    true
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for an [`LsrlModel`].
#[derive(Debug, Clone, Default)]
pub struct LsrlBuilder {
    /// Horizontal axis attribute (required).
    pub x_attribute: Option<AttributeId>,

    /// Vertical axis attribute (required).
    pub y_attribute: Option<AttributeId>,

    /// Legend attribute supplying category labels.
    pub legend_attribute: Option<AttributeId>,

    /// Force the line through the origin (default: false).
    pub lock_intercept: Option<bool>,

    /// Legend category this line is fitted to.
    pub category_index: Option<usize>,

    /// Fit only the selected cases (default: false).
    pub measures_for_selection: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl LsrlBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal axis attribute.
    pub fn x_attribute(mut self, attribute: AttributeId) -> Self {
        if self.x_attribute.is_some() {
            self.duplicate_param = Some("x_attribute");
        }
        self.x_attribute = Some(attribute);
        self
    }

    /// Set the vertical axis attribute.
    pub fn y_attribute(mut self, attribute: AttributeId) -> Self {
        if self.y_attribute.is_some() {
            self.duplicate_param = Some("y_attribute");
        }
        self.y_attribute = Some(attribute);
        self
    }

    /// Set the legend attribute.
    pub fn legend_attribute(mut self, attribute: AttributeId) -> Self {
        if self.legend_attribute.is_some() {
            self.duplicate_param = Some("legend_attribute");
        }
        self.legend_attribute = Some(attribute);
        self
    }

    /// Force (or stop forcing) the line through the origin.
    pub fn lock_intercept(mut self, locked: bool) -> Self {
        if self.lock_intercept.is_some() {
            self.duplicate_param = Some("lock_intercept");
        }
        self.lock_intercept = Some(locked);
        self
    }

    /// Fit the line to one legend category.
    pub fn category_index(mut self, index: usize) -> Self {
        if self.category_index.is_some() {
            self.duplicate_param = Some("category_index");
        }
        self.category_index = Some(index);
        self
    }

    /// Restrict the fit to selected cases.
    pub fn measures_for_selection(mut self, enabled: bool) -> Self {
        if self.measures_for_selection.is_some() {
            self.duplicate_param = Some("measures_for_selection");
        }
        self.measures_for_selection = Some(enabled);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build<T: Float>(self) -> Result<LsrlModel<T>, PlotError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let x = Validator::validate_required(self.x_attribute, "x_attribute")?;
        let y = Validator::validate_required(self.y_attribute, "y_attribute")?;

        Ok(LsrlModel {
            attributes: CoordinateAttributes {
                x,
                y,
                legend: self.legend_attribute,
            },
            lock_intercept: self.lock_intercept.unwrap_or(false),
            category_index: self.category_index,
            measures_for_selection: self.measures_for_selection.unwrap_or(false),
            line: None,
            computing_needed: true,
        })
    }
}

// ============================================================================
// LSRL Model
// ============================================================================

/// Model of one least-squares regression line adornment.
#[derive(Debug, Clone)]
pub struct LsrlModel<T> {
    attributes: CoordinateAttributes,
    lock_intercept: bool,
    category_index: Option<usize>,
    measures_for_selection: bool,
    line: Option<LineModel<T>>,
    computing_needed: bool,
}

impl<T: Float> LsrlModel<T> {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// The displayed line, once at least one fit has been applied.
    pub fn line(&self) -> Option<&LineModel<T>> {
        self.line.as_ref()
    }

    /// Whether the line is forced through the origin.
    pub fn is_intercept_locked(&self) -> bool {
        self.lock_intercept
    }

    /// Legend category this line is fitted to.
    pub fn category_index(&self) -> Option<usize> {
        self.category_index
    }

    /// Whether only selected cases are fitted.
    pub fn measures_for_selection(&self) -> bool {
        self.measures_for_selection
    }

    /// Whether a relevant change is waiting to be recomputed.
    pub fn is_computing_needed(&self) -> bool {
        self.computing_needed
    }

    // ========================================================================
    // Configuration Changes
    // ========================================================================

    /// Lock or unlock the intercept.
    pub fn set_lock_intercept(&mut self, locked: bool) {
        if self.lock_intercept != locked {
            self.lock_intercept = locked;
            self.computing_needed = true;
        }
    }

    /// Change the legend category this line is fitted to.
    pub fn set_category_index(&mut self, index: Option<usize>) {
        if self.category_index != index {
            self.category_index = index;
            self.computing_needed = true;
        }
    }

    /// Restrict (or stop restricting) the fit to selected cases.
    pub fn set_measures_for_selection(&mut self, enabled: bool) {
        if self.measures_for_selection != enabled {
            self.measures_for_selection = enabled;
            self.computing_needed = true;
        }
    }

    /// Record where the host placed a vertical line on the x-axis.
    ///
    /// Ignored unless the displayed line is vertical. The next applied fit
    /// clears it.
    pub fn set_x_intercept(&mut self, x: T) {
        if let Some(line) = self.line.as_mut().filter(|line| line.is_vertical) {
            line.x_intercept = Some(x);
        }
    }

    /// React to an upstream change.
    pub fn handle(&mut self, event: &ChangeEvent) {
        let relevant = match event {
            ChangeEvent::DataChanged(_)
            | ChangeEvent::CasesReset
            | ChangeEvent::CaseOrderChanged
            | ChangeEvent::LegendChanged => true,
            ChangeEvent::SelectionChanged => self.measures_for_selection,
            ChangeEvent::ViewportChanged | ChangeEvent::VisibilityChanged(_) => false,
        };
        if relevant {
            trace!(?event, "regression line marked for recompute");
            self.computing_needed = true;
        }
    }

    // ========================================================================
    // Recompute
    // ========================================================================

    /// Fit the line to `cases` as currently filtered, without touching the model.
    pub fn fit<C, R>(&self, cases: &[C], resolver: &R) -> RegressionResult<T>
    where
        C: CaseRecord<T>,
        R: CategoryResolver + ?Sized,
    {
        let points = collect_points(cases, &self.attributes, self.measures_for_selection);
        let points = filter_by_category(points, self.category_index, resolver);
        compute_regression(&points, self.lock_intercept)
    }

    /// Refit the line and apply the result.
    pub fn recompute<C, R>(&mut self, cases: &[C], resolver: &R) -> RecomputeOutcome
    where
        C: CaseRecord<T>,
        R: CategoryResolver + ?Sized,
    {
        let result = self.fit(cases, resolver);
        self.computing_needed = false;
        let outcome = self.apply(&result);
        debug!(
            ?outcome,
            is_vertical = result.is_vertical,
            category = ?self.category_index,
            "recomputed regression line"
        );
        outcome
    }

    /// Refit only if a relevant change has been signalled since the last fit.
    pub fn recompute_if_needed<C, R>(&mut self, cases: &[C], resolver: &R) -> RecomputeOutcome
    where
        C: CaseRecord<T>,
        R: CategoryResolver + ?Sized,
    {
        if !self.computing_needed {
            return RecomputeOutcome::NotNeeded;
        }
        self.recompute(cases, resolver)
    }

    /// Fold a regression result into the line model.
    pub fn apply(&mut self, result: &RegressionResult<T>) -> RecomputeOutcome {
        let Some(line) = self.line.as_mut() else {
            self.line = Some(LineModel::from_result(result));
            return RecomputeOutcome::Updated;
        };

        if (result.slope.is_nan() && line.slope.is_nan())
            || (result.intercept.is_nan() && line.intercept.is_nan())
        {
            return RecomputeOutcome::Suppressed;
        }

        let mut changed = false;
        changed |= set_if_changed(&mut line.slope, result.slope);
        changed |= set_if_changed(&mut line.intercept, result.intercept);
        changed |= set_if_changed(&mut line.r_squared, result.r_squared);
        changed |= set_if_changed(&mut line.sum_squares_residuals, result.sum_squares_residuals);

        let is_vertical = !result.slope.is_finite();
        if line.is_vertical != is_vertical {
            line.is_vertical = is_vertical;
            changed = true;
        }
        if line.x_intercept.take().is_some() {
            changed = true;
        }

        if changed {
            RecomputeOutcome::Updated
        } else {
            RecomputeOutcome::Unchanged
        }
    }
}
