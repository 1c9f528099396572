//! Point and coordinate value types.
//!
//! ## Purpose
//!
//! This module defines the small value types passed into and out of the
//! regression and projection cores.
//!
//! ## Design notes
//!
//! * **Plain data**: Every type is `Copy` (or borrows its label) and is
//!   rebuilt on each computation; nothing is cached between calls.
//! * **Generics**: Numeric fields are generic over `Float` types.
//! * **Invalid is explicit**: A `ProjectedPoint` that cannot be placed carries
//!   `is_valid = false` and NaN coordinates, never a fallback position.

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Attribute Identifier
// ============================================================================

/// Opaque identifier of a case attribute (a column of the data set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeId(pub u64);

// ============================================================================
// Regression Input
// ============================================================================

/// A single regression input point with an optional legend category label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<'a, T> {
    /// Horizontal data value.
    pub x: T,

    /// Vertical data value.
    pub y: T,

    /// Legend category label, `None` when the point is uncategorized.
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub legend: Option<&'a str>,
}

impl<T: Float> Point<'static, T> {
    /// Create an uncategorized point.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y, legend: None }
    }
}

impl<'a, T: Float> Point<'a, T> {
    /// Create a point belonging to a legend category.
    pub fn with_legend(x: T, y: T, legend: &'a str) -> Self {
        Self {
            x,
            y,
            legend: Some(legend),
        }
    }
}

// ============================================================================
// Projection Input / Output
// ============================================================================

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint<T> {
    /// Latitude in degrees.
    pub lat: T,

    /// Longitude in degrees.
    pub lon: T,
}

impl<T: Float> GeoPoint<T> {
    /// Create a geographic coordinate.
    pub fn new(lat: T, lon: T) -> Self {
        Self { lat, lon }
    }
}

/// A position in container pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenPoint<T> {
    /// Horizontal pixel coordinate.
    pub x: T,

    /// Vertical pixel coordinate.
    pub y: T,
}

impl<T: Float> ScreenPoint<T> {
    /// Create a screen position.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Result of projecting one geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectedPoint<T> {
    /// Horizontal pixel coordinate (NaN when invalid).
    pub x: T,

    /// Vertical pixel coordinate (NaN when invalid).
    pub y: T,

    /// Whether the point can be drawn.
    pub is_valid: bool,
}

impl<T: Float> ProjectedPoint<T> {
    /// A drawable projected point.
    pub fn valid(x: T, y: T) -> Self {
        Self {
            x,
            y,
            is_valid: true,
        }
    }

    /// A point that must be hidden.
    pub fn invalid() -> Self {
        Self {
            x: T::nan(),
            y: T::nan(),
            is_valid: false,
        }
    }

    /// The screen position, if the point is drawable.
    pub fn screen(&self) -> Option<ScreenPoint<T>> {
        self.is_valid.then(|| ScreenPoint::new(self.x, self.y))
    }
}
