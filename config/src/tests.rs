//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_tolerances_are_ordered() {
    assert!(EPSILON < CENTERING_TOLERANCE);
    assert!(CENTERING_TOLERANCE < ROUNDTRIP_TOLERANCE);
}

#[test]
fn test_decimal_places_fit_roundtrip_tolerance() {
    // Half a unit in the last printed place must stay inside the tolerance
    let worst_rounding = 0.5 * 10f64.powi(-(STL_DECIMAL_PLACES as i32));
    assert!(worst_rounding < ROUNDTRIP_TOLERANCE);
}

// =============================================================================
// DEFAULT VALUE TESTS
// =============================================================================

#[test]
fn test_shape_defaults() {
    assert_eq!(DEFAULT_SHAPE_DIMENSION, 10.0);
    assert_eq!(DEFAULT_COORDINATE, 0.0);
}

#[test]
fn test_export_defaults() {
    assert_eq!(DEFAULT_EXTRUSION_DEPTH, 5.0);
    assert_eq!(DEFAULT_SCALE, 1.0);
    assert_eq!(DEFAULT_ROTATION_Y, 0.0);
}

#[test]
fn test_default_scale_within_step_bounds() {
    assert!(MIN_SCALE < DEFAULT_SCALE && DEFAULT_SCALE < MAX_SCALE);
}

#[test]
fn test_output_names() {
    assert_eq!(STL_SOLID_NAME, "MODEL");
    assert!(DOWNLOAD_FILE_NAME.ends_with(".stl"));
    assert!(GENERATED_FILE_NAME.ends_with(".stl"));
}

// =============================================================================
// FACET COUNT TESTS
// =============================================================================

#[test]
fn test_cylinder_facet_count_default_segments() {
    assert_eq!(cylinder_facet_count(DEFAULT_SEGMENTS), 124);
}

#[test]
fn test_cylinder_facet_count_triangle_prism() {
    // 3 segments: 6 side + 1 + 1 cap triangles
    assert_eq!(cylinder_facet_count(3), 8);
}

#[test]
fn test_cylinder_facet_count_degenerate() {
    assert_eq!(cylinder_facet_count(2), 0);
}

// =============================================================================
// SCALE STEP TESTS
// =============================================================================

#[test]
fn test_step_scale_up_and_down() {
    assert!(approx_equal(step_scale(1.0, SCALE_STEP), 1.1));
    assert!(approx_equal(step_scale(1.0, -SCALE_STEP), 0.9));
}

#[test]
fn test_step_scale_clamps_to_max() {
    assert_eq!(step_scale(2.95, SCALE_STEP), MAX_SCALE);
}

#[test]
fn test_step_scale_clamps_to_min() {
    assert_eq!(step_scale(0.25, -SCALE_STEP), MIN_SCALE);
}

#[test]
fn test_step_scale_non_finite_restarts_from_default() {
    assert!(approx_equal(step_scale(f64::NAN, SCALE_STEP), 1.1));
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}
