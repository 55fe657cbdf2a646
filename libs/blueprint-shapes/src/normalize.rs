//! # Shape Normalization
//!
//! Resolves every optional descriptor field into a concrete value.
//!
//! Field priority:
//!
//! | Field | Sources, in order |
//! |---|---|
//! | `width` | `width`, `r`, [`DEFAULT_SHAPE_DIMENSION`] |
//! | `height` | `height`, `r`, [`DEFAULT_SHAPE_DIMENSION`] |
//! | `radius` | `r`, [`DEFAULT_SHAPE_DIMENSION`] |
//! | `x` | `x`, `cx`, [`DEFAULT_COORDINATE`] |
//! | `y` | `y`, `cy`, [`DEFAULT_COORDINATE`] |
//!
//! Dimensions must be finite and positive to be used; coordinates must be
//! finite. Anything else is skipped in favour of the next source.

use crate::descriptor::ShapeDescriptor;
use crate::kind::ShapeKind;
use config::constants::{DEFAULT_COORDINATE, DEFAULT_SHAPE_DIMENSION};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A shape with every field resolved.
///
/// `width`, `height` and `radius` are always finite and positive; `x` and
/// `y` are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedShape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

/// Normalizes a raw descriptor.
///
/// # Example
///
/// ```rust
/// use blueprint_shapes::{normalize, ShapeDescriptor, ShapeKind};
///
/// let shape = normalize(&ShapeDescriptor::new("Wall").with_position(1.0, 2.0));
/// assert_eq!(shape.kind, ShapeKind::Wall);
/// assert_eq!((shape.x, shape.y), (1.0, 2.0));
/// assert_eq!((shape.width, shape.height), (10.0, 10.0));
/// ```
pub fn normalize(raw: &ShapeDescriptor) -> NormalizedShape {
    let kind = ShapeKind::from_type_name(raw.shape_type.as_deref());
    let radius = dimension(raw.r);

    let shape = NormalizedShape {
        kind,
        x: coordinate(raw.x).or(coordinate(raw.cx)).unwrap_or(DEFAULT_COORDINATE),
        y: coordinate(raw.y).or(coordinate(raw.cy)).unwrap_or(DEFAULT_COORDINATE),
        width: dimension(raw.width).or(radius).unwrap_or(DEFAULT_SHAPE_DIMENSION),
        height: dimension(raw.height).or(radius).unwrap_or(DEFAULT_SHAPE_DIMENSION),
        radius: radius.unwrap_or(DEFAULT_SHAPE_DIMENSION),
    };

    trace!(?raw, ?shape, "normalized shape");
    shape
}

/// Normalizes a list of descriptors, preserving order.
pub fn normalize_all(raw: &[ShapeDescriptor]) -> Vec<NormalizedShape> {
    raw.iter().map(normalize).collect()
}

fn coordinate(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn dimension(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
