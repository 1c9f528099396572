//! # plotfit: Regression Lines and Map Point Projection
//!
//! The numeric core behind two plot adornments:
//!
//! - a **least-squares regression line** (LSRL) fitted to the points currently
//!   displayed in a scatter plot, optionally restricted to one legend category
//!   or to the selected cases, optionally forced through the origin;
//! - a **map point layer** that turns case latitudes and longitudes into
//!   container pixel coordinates, wrapping longitudes across the antimeridian
//!   and hiding points that cannot be placed.
//!
//! Both are pure, synchronous computations. The surrounding view code owns
//! rendering and calls in here whenever data, selection, or the viewport
//! changes.
//!
//! ## Quick Start
//!
//! ### Regression
//!
//! ```rust
//! use plotfit::prelude::*;
//!
//! let points = [
//!     Point::new(1.0_f64, 2.1),
//!     Point::new(2.0, 3.9),
//!     Point::new(3.0, 6.2),
//!     Point::new(4.0, 7.8),
//! ];
//!
//! let fit = compute_regression(&points, false);
//! assert!(!fit.is_vertical);
//! assert!((fit.slope - 1.94).abs() < 1e-9);
//!
//! // Forced through the origin
//! let locked = compute_regression(&points, true);
//! assert_eq!(locked.intercept, 0.0);
//! ```
//!
//! Slices can be fitted through the checked builder, which validates lengths
//! and finiteness first:
//!
//! ```rust
//! use plotfit::prelude::*;
//!
//! let model = Regression::new().lock_intercept(false).build()?;
//! let fit = model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])?;
//! println!("{}", fit);
//! # Result::<(), PlotError>::Ok(())
//! ```
//!
//! ```text
//! Least-Squares Line:
//!   Slope:        2.000000
//!   Intercept:    0.000000
//!   R^2:          1.000000
//!   SSR:          0.000000
//! ```
//!
//! ### Projection
//!
//! ```rust
//! use plotfit::prelude::*;
//!
//! struct Flat;
//!
//! impl MapViewport<f64> for Flat {
//!     fn west_bound(&self) -> f64 { -180.0 }
//!     fn east_bound(&self) -> f64 { 180.0 }
//!     fn lat_lng_to_container_point(&self, lat: f64, lon: f64) -> Option<ScreenPoint<f64>> {
//!         Some(ScreenPoint::new(lon + 180.0, 90.0 - lat))
//!     }
//! }
//!
//! // 200°E is shown as -160° on a [-180, 180] viewport.
//! assert_eq!(normalize_longitude(200.0, -180.0, 180.0), -160.0);
//!
//! let p = project(40.7, -74.0, &Flat);
//! assert!(p.is_valid);
//!
//! let missing = project(f64::NAN, 10.0, &Flat);
//! assert!(!missing.is_valid);
//! ```
//!
//! ## Edge-Case Policy
//!
//! Nothing in the numeric core fails on degenerate data. Instead:
//!
//! | Situation                          | Result                                          |
//! |------------------------------------|-------------------------------------------------|
//! | All x identical                    | non-finite slope, `is_vertical = true`          |
//! | Fewer than 2 points                | `r_squared` and `sum_squares_residuals` are NaN |
//! | NaN latitude or longitude          | `is_valid = false`, viewport never consulted    |
//! | Projection off representable space | `is_valid = false`                              |
//!
//! [`PlotError`](prelude::PlotError) is reserved for malformed input handed to
//! the checked APIs (mismatched slices, bad builder configuration).
//!
//! ## Adornment Models
//!
//! [`Lsrl`](prelude::Lsrl) builds an [`LsrlModel`](prelude::LsrlModel) that
//! extracts coordinates from case records, applies the category and selection
//! filters, and folds each new fit into a [`LineModel`](prelude::LineModel)
//! only when something changed. [`MapLayer`](prelude::MapLayer) builds a
//! [`MapPointLayer`](prelude::MapPointLayer) that tracks one placement per case
//! and revalidates all of them whenever the viewport moves.
//!
//! Both react to [`ChangeEvent`](prelude::ChangeEvent)s dispatched by the host.
//!
//! ## Features
//!
//! - `std` (default): use the standard library. Without it the crate is
//!   `no_std` + `alloc`.
//! - `serde`: `Serialize`/`Deserialize` on the public value types.
//! - `dev`: exposes [`internals`] for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - value types and errors.
//
// Contains the point types shared by both cores and the crate error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the running sums behind least squares and longitude wrapping.
mod math;

// Layer 3: Algorithms - the two numeric cores.
//
// Contains least-squares regression and viewport projection.
mod algorithms;

// Layer 4: Evaluation - fit quality.
//
// Contains residual sum of squares and R^2.
mod evaluation;

// Layer 5: Engine - validation and input preparation.
//
// Contains input validation, case extraction, and category filtering.
mod engine;

// Layer 6: Adapters - stateful adornment models.
//
// Contains the regression line model and the map point layer.
mod adapters;

// High-level fluent API.
//
// Provides the `Lsrl`, `MapLayer`, and `Regression` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use plotfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        compute_regression, normalize_longitude, project, project_within, AttributeId,
        CaseRecord, CategoryResolver, ChangeEvent, GeoPoint, LineModel, LsrlBuilder as Lsrl,
        LsrlModel, MapLayerBuilder as MapLayer, MapPointLayer, MapViewport, PlotError, Point,
        PointPlacement, ProjectedPoint, RecomputeOutcome, Regression, RegressionBuilder,
        RegressionResult, RenderContext, ScreenPoint,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal fit diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal validation and filtering.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
