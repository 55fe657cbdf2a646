//! # Configuration Constants
//!
//! Centralized constants for the blueprint export pipeline. Shape defaults,
//! export parameters, tessellation and output formatting are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Shape Defaults**: Values substituted for missing descriptor fields
//! - **Export Parameters**: Scale, rotation and extrusion depth defaults
//! - **Tessellation**: Cylinder segment count
//! - **Output**: STL naming and number formatting

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for degenerate-geometry checks (zero-length normals, zero-area
/// triangles) inside the mesh crate.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance within which an assembled scene counts as centred on the origin.
pub const CENTERING_TOLERANCE: f64 = 1e-6;

/// Tolerance for coordinates recovered by re-parsing emitted STL text.
///
/// Fixed-point output with [`STL_DECIMAL_PLACES`] digits stays well inside
/// this bound.
pub const ROUNDTRIP_TOLERANCE: f64 = 1e-4;

// =============================================================================
// SHAPE DEFAULT CONSTANTS
// =============================================================================

/// Fallback width, height and radius for descriptors that omit them.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SHAPE_DIMENSION;
///
/// let width: Option<f64> = None;
/// let r: Option<f64> = None;
/// assert_eq!(width.or(r).unwrap_or(DEFAULT_SHAPE_DIMENSION), 10.0);
/// ```
pub const DEFAULT_SHAPE_DIMENSION: f64 = 10.0;

/// Fallback x/y coordinate for descriptors that carry neither `x`/`y` nor
/// `cx`/`cy`.
pub const DEFAULT_COORDINATE: f64 = 0.0;

// =============================================================================
// EXPORT PARAMETER CONSTANTS
// =============================================================================

/// Default extrusion thickness in world units.
pub const DEFAULT_EXTRUSION_DEPTH: f64 = 5.0;

/// Default uniform scale factor.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default rotation about the vertical axis, in radians.
pub const DEFAULT_ROTATION_Y: f64 = 0.0;

/// Increment applied by one press of the viewer's scale buttons.
///
/// # Example
///
/// ```rust
/// use config::constants::{step_scale, DEFAULT_SCALE, SCALE_STEP};
///
/// let bigger = step_scale(DEFAULT_SCALE, SCALE_STEP);
/// assert!((bigger - 1.1).abs() < 1e-12);
/// ```
pub const SCALE_STEP: f64 = 0.1;

/// Smallest scale reachable by stepping down.
pub const MIN_SCALE: f64 = 0.2;

/// Largest scale reachable by stepping up.
pub const MAX_SCALE: f64 = 3.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of radial segments used for every cylinder.
///
/// Fixed so that the facet count of an export is predictable:
/// `2 * N` side triangles plus `N - 2` triangles per cap.
///
/// # Example
///
/// ```rust
/// use config::constants::{cylinder_facet_count, DEFAULT_SEGMENTS};
///
/// assert_eq!(cylinder_facet_count(DEFAULT_SEGMENTS), 124);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Number of triangles in a triangulated box (6 faces x 2).
pub const BOX_FACET_COUNT: usize = 12;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Name written after `solid` / `endsolid` in ASCII STL output.
pub const STL_SOLID_NAME: &str = "MODEL";

/// Digits after the decimal point for every number in ASCII STL output.
pub const STL_DECIMAL_PLACES: usize = 6;

/// File name used when the caller offers the export as a direct download.
pub const DOWNLOAD_FILE_NAME: &str = "model.stl";

/// File name used for the server-generated equivalent of an export.
pub const GENERATED_FILE_NAME: &str = "generated_model.stl";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of facets produced for a cylinder with `segments` radial segments.
///
/// Segment counts below 3 cannot form a cap and yield 0.
#[inline]
pub fn cylinder_facet_count(segments: u32) -> usize {
    if segments < 3 {
        return 0;
    }
    let n = segments as usize;
    2 * n + 2 * (n - 2)
}

/// Applies one scale step and clamps the result to `[MIN_SCALE, MAX_SCALE]`.
///
/// Non-finite input falls back to [`DEFAULT_SCALE`] before stepping.
///
/// # Example
///
/// ```rust
/// use config::constants::{step_scale, MAX_SCALE, MIN_SCALE, SCALE_STEP};
///
/// assert_eq!(step_scale(MAX_SCALE, SCALE_STEP), MAX_SCALE);
/// assert_eq!(step_scale(MIN_SCALE, -SCALE_STEP), MIN_SCALE);
/// ```
pub fn step_scale(current: f64, delta: f64) -> f64 {
    let base = if current.is_finite() {
        current
    } else {
        DEFAULT_SCALE
    };
    (base + delta).clamp(MIN_SCALE, MAX_SCALE)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
