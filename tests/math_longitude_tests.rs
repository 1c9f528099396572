//! Tests for longitude normalization.
//!
//! These tests verify how case longitudes are wrapped into a viewport's
//! bounds before projection:
//! - Points east or west of the viewport are shifted by whole turns
//! - Points already inside are untouched
//! - Viewports panned across the antimeridian
//! - Non-finite input

use plotfit::prelude::*;

#[test]
fn test_wraps_east_of_world_view() {
    assert_eq!(normalize_longitude(200.0, -180.0, 180.0), -160.0);
    assert_eq!(normalize_longitude(725.0, -180.0, 180.0), 5.0);
}

#[test]
fn test_wraps_west_of_world_view() {
    assert_eq!(normalize_longitude(-190.0, -180.0, 180.0), 170.0);
    assert_eq!(normalize_longitude(-725.0, -180.0, 180.0), -5.0);
}

#[test]
fn test_western_hemisphere_viewport() {
    // 185°E is 175°W
    assert_eq!(normalize_longitude(185.0, -170.0, -10.0), -175.0);
}

#[test]
fn test_viewport_across_antimeridian() {
    // Map panned so that the date line sits in the middle
    assert_eq!(normalize_longitude(-175.0, 170.0, 190.0), 185.0);
    assert_eq!(normalize_longitude(-170.0, 170.0, 190.0), 190.0);
    assert_eq!(normalize_longitude(175.0, 170.0, 190.0), 175.0);

    assert_eq!(normalize_longitude(175.0, -190.0, -170.0), -185.0);
}

#[test]
fn test_single_adjustment_per_call() {
    // One correction toward the west bound, even if it overshoots east
    assert_eq!(normalize_longitude(-5.0, 10.0, 170.0), 355.0);
}

#[test]
fn test_bounds_are_inclusive() {
    assert_eq!(normalize_longitude(-180.0, -180.0, 180.0), -180.0);
    assert_eq!(normalize_longitude(180.0, -180.0, 180.0), 180.0);
    assert_eq!(normalize_longitude(0.0, -180.0, 180.0), 0.0);
}

#[test]
fn test_non_finite_longitudes() {
    assert!(normalize_longitude(f64::NAN, -180.0, 180.0).is_nan());
    assert!(normalize_longitude(f64::INFINITY, -180.0, 180.0).is_nan());
    assert!(normalize_longitude(f64::NEG_INFINITY, -180.0, 180.0).is_nan());
}

#[test]
fn test_f32_longitudes() {
    assert_eq!(normalize_longitude(200.0_f32, -180.0, 180.0), -160.0);
}
