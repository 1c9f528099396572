//! High-level API.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the pure functions of
//! the two cores, the [`Lsrl`](LsrlBuilder) and [`MapLayer`](MapLayerBuilder)
//! builders for the stateful adornment models, and a checked
//! [`Regression`] fitter for plain slices.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Builder parameters are validated when `.build()` is called;
//!   a parameter set twice is reported then rather than silently overwritten.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Lsrl::new()`, `MapLayer::new()`, or `Regression::new()`.
//! 2. Chain configuration methods.
//! 3. Call `.build()` to get the model.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::regression::regress_pairs;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::events::ChangeEvent;
pub use crate::adapters::lsrl::{LineModel, LsrlBuilder, LsrlModel, RecomputeOutcome};
pub use crate::adapters::map_layer::{
    MapLayerBuilder, MapPointLayer, PointPlacement, RenderContext,
};
pub use crate::algorithms::projection::{project, project_within, MapViewport};
pub use crate::algorithms::regression::{compute_regression, RegressionResult};
pub use crate::engine::cases::{CaseRecord, CategoryResolver, CoordinateAttributes};
pub use crate::math::longitude::normalize_longitude;
pub use crate::primitives::errors::PlotError;
pub use crate::primitives::points::{AttributeId, GeoPoint, Point, ProjectedPoint, ScreenPoint};

// ============================================================================
// Checked Regression
// ============================================================================

/// Fluent builder for a checked slice [`Regression`].
#[derive(Debug, Clone, Default)]
pub struct RegressionBuilder {
    /// Force the line through the origin (default: false).
    pub lock_intercept: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RegressionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force (or stop forcing) the line through the origin.
    pub fn lock_intercept(mut self, locked: bool) -> Self {
        if self.lock_intercept.is_some() {
            self.duplicate_param = Some("lock_intercept");
        }
        self.lock_intercept = Some(locked);
        self
    }

    /// Validate the configuration and build the fitter.
    pub fn build(self) -> Result<Regression, PlotError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(Regression {
            lock_intercept: self.lock_intercept.unwrap_or(false),
        })
    }
}

/// Least-squares fitter over paired slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regression {
    lock_intercept: bool,
}

impl Regression {
    /// Start configuring a fitter.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> RegressionBuilder {
        RegressionBuilder::new()
    }

    /// Whether the line is forced through the origin.
    pub fn is_intercept_locked(&self) -> bool {
        self.lock_intercept
    }

    /// Fit a line to `x` and `y`.
    ///
    /// Fails when the slices differ in length or hold a non-finite value.
    /// Too few points is not an error: the result carries NaN measures.
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<RegressionResult<T>, PlotError> {
        Validator::validate_inputs(x, y)?;
        let result = regress_pairs(x.iter().copied().zip(y.iter().copied()), self.lock_intercept);
        debug!(
            points = x.len(),
            is_vertical = result.is_vertical,
            "fitted least-squares line"
        );
        Ok(result)
    }
}
