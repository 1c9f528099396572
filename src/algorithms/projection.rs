//! Projection of geographic coordinates into a map viewport.
//!
//! ## Purpose
//!
//! This module turns a case's latitude and longitude into the container
//! pixel position of its map point, or reports that the point cannot be
//! placed and must be hidden.
//!
//! ## Design notes
//!
//! * **Opaque projector**: The map library's projection is consumed through
//!   the [`MapViewport`] trait and called at most once per point; its output
//!   is never cached.
//! * **Wrap first**: Longitudes are normalized into the viewport's bounds
//!   before projecting so points near the date line land on the visible copy
//!   of the world.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * A NaN latitude or longitude never reaches the projector.
//! * A projected point is valid iff both screen coordinates are finite.
//! * Invalid points carry NaN coordinates; nothing is clamped or defaulted.
//!
//! ## Non-goals
//!
//! * This module does not implement any map projection itself.
//! * This module does not show, hide, or animate elements.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::longitude::normalize_longitude;
use crate::primitives::points::{GeoPoint, ProjectedPoint, ScreenPoint};

// ============================================================================
// Viewport Contract
// ============================================================================

/// The map viewport a point layer draws into.
pub trait MapViewport<T> {
    /// Western longitude bound of the visible area, in degrees.
    fn west_bound(&self) -> T;

    /// Eastern longitude bound of the visible area, in degrees.
    fn east_bound(&self) -> T;

    /// Project a coordinate into container pixels.
    ///
    /// `None` means the map could not produce a position.
    fn lat_lng_to_container_point(&self, lat: T, lon: T) -> Option<ScreenPoint<T>>;
}

impl<T, V: MapViewport<T> + ?Sized> MapViewport<T> for &V {
    fn west_bound(&self) -> T {
        (**self).west_bound()
    }

    fn east_bound(&self) -> T {
        (**self).east_bound()
    }

    fn lat_lng_to_container_point(&self, lat: T, lon: T) -> Option<ScreenPoint<T>> {
        (**self).lat_lng_to_container_point(lat, lon)
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Project `(lat, lon)` using the viewport's current bounds.
pub fn project<T, V>(lat: T, lon: T, viewport: &V) -> ProjectedPoint<T>
where
    T: Float,
    V: MapViewport<T> + ?Sized,
{
    project_within(
        lat,
        lon,
        viewport.west_bound(),
        viewport.east_bound(),
        viewport,
    )
}

/// Project `(lat, lon)` against bounds captured earlier in the draw pass.
///
/// # Steps
///
/// 1. Normalize the longitude into `[west_bound, east_bound]`.
/// 2. Reject NaN inputs without consulting the viewport.
/// 3. Project.
/// 4. Reject non-finite or missing screen coordinates.
pub fn project_within<T, V>(
    lat: T,
    lon: T,
    west_bound: T,
    east_bound: T,
    viewport: &V,
) -> ProjectedPoint<T>
where
    T: Float,
    V: MapViewport<T> + ?Sized,
{
    let lon = normalize_longitude(lon, west_bound, east_bound);
    if lat.is_nan() || lon.is_nan() {
        return ProjectedPoint::invalid();
    }

    match viewport.lat_lng_to_container_point(lat, lon) {
        Some(p) if p.is_finite() => ProjectedPoint::valid(p.x, p.y),
        _ => ProjectedPoint::invalid(),
    }
}

impl<T: Float> GeoPoint<T> {
    /// Project this coordinate using the viewport's current bounds.
    pub fn project<V>(&self, viewport: &V) -> ProjectedPoint<T>
    where
        V: MapViewport<T> + ?Sized,
    {
        project(self.lat, self.lon, viewport)
    }
}
