//! Longitude normalization for viewports that straddle the antimeridian.
//!
//! ## Purpose
//!
//! A map viewport that has been panned across ±180° reports bounds such as
//! `[170, 190]` or `[-200, -160]`. Case longitudes are always stored in the
//! conventional range, so before projecting they are shifted by whole turns
//! until they land inside the viewport's bounds.
//!
//! ## Key concepts
//!
//! * West of the viewport: add `ceil((west − lon) / 360) · 360`.
//! * East of the viewport: subtract `ceil((lon − east) / 360) · 360`.
//!
//! ## Invariants
//!
//! * Only whole multiples of 360° are ever added or subtracted.
//! * A longitude already inside `[west, east]` is returned unchanged.
//! * NaN passes through unchanged; infinities become NaN.

// External dependencies
use num_traits::Float;

/// Degrees in one full turn.
#[inline]
pub fn full_turn<T: Float>() -> T {
    T::from(360.0).unwrap_or_else(T::nan)
}

/// Shift `lon` by whole turns so it falls within `[west_bound, east_bound]`.
pub fn normalize_longitude<T: Float>(lon: T, west_bound: T, east_bound: T) -> T {
    let turn = full_turn::<T>();
    if lon < west_bound {
        lon + ((west_bound - lon) / turn).ceil() * turn
    } else if lon > east_bound {
        lon - ((lon - east_bound) / turn).ceil() * turn
    } else {
        lon
    }
}
