//! # Geometry Builder
//!
//! Maps normalized shapes to extruded solids.
//!
//! Footprints lie in the X-Y plane and extrude along +Z from `0` to `depth`.
//! Scale multiplies every footprint position and dimension; the extrusion
//! depth is left as given.

use crate::solid::Solid;
use blueprint_shapes::{NormalizedShape, ShapeKind};
use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;
use tracing::debug;

/// Builds the solid for one shape, or `None` for shapes without geometry.
///
/// # Example
///
/// ```rust
/// use blueprint_mesh::{build_solid, Primitive};
/// use blueprint_shapes::{normalize, ShapeDescriptor};
///
/// let wall = normalize(&ShapeDescriptor::new("wall").with_size(100.0, 20.0));
/// let solid = build_solid(&wall, 5.0, 2.0).unwrap();
/// assert_eq!(solid.primitive, Primitive::Box);
/// assert_eq!(solid.dimensions.x, 200.0);
///
/// let blob = normalize(&ShapeDescriptor::new("blob"));
/// assert!(build_solid(&blob, 5.0, 1.0).is_none());
/// ```
pub fn build_solid(shape: &NormalizedShape, depth: f64, scale: f64) -> Option<Solid> {
    let center = DVec3::new(shape.x * scale, shape.y * scale, depth / 2.0);

    let solid = match shape.kind {
        ShapeKind::Wall | ShapeKind::Door | ShapeKind::Window | ShapeKind::Rectangle => {
            Solid::new_box(
                shape.kind,
                center,
                DVec3::new(shape.width * scale, shape.height * scale, depth),
            )
        }
        ShapeKind::Circle => Solid::new_cylinder(
            shape.kind,
            center,
            shape.radius * scale,
            depth,
            DEFAULT_SEGMENTS,
        ),
        ShapeKind::Unknown => return None,
    };

    Some(solid)
}

/// Builds solids for every shape in order, skipping unknown kinds.
pub fn build_solids(shapes: &[NormalizedShape], depth: f64, scale: f64) -> Vec<Solid> {
    shapes
        .iter()
        .enumerate()
        .filter_map(|(index, shape)| {
            let solid = build_solid(shape, depth, scale)?;
            debug!(
                index,
                kind = %solid.kind,
                origin = ?solid.origin,
                dimensions = ?solid.dimensions,
                "built solid"
            );
            Some(solid)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::Primitive;
    use approx::assert_relative_eq;

    fn shape(kind: ShapeKind) -> NormalizedShape {
        NormalizedShape {
            kind,
            x: 3.0,
            y: -4.0,
            width: 10.0,
            height: 2.0,
            radius: 6.0,
        }
    }

    #[test]
    fn test_box_kinds() {
        for kind in [
            ShapeKind::Wall,
            ShapeKind::Door,
            ShapeKind::Window,
            ShapeKind::Rectangle,
        ] {
            let solid = build_solid(&shape(kind), 5.0, 1.0).unwrap();
            assert_eq!(solid.primitive, Primitive::Box);
            assert_eq!(solid.kind, kind);
            assert_eq!(solid.origin, DVec3::new(3.0, -4.0, 2.5));
            assert_eq!(solid.dimensions, DVec3::new(10.0, 2.0, 5.0));
        }
    }

    #[test]
    fn test_circle_is_cylinder() {
        let solid = build_solid(&shape(ShapeKind::Circle), 5.0, 1.0).unwrap();
        assert_eq!(solid.primitive, Primitive::Cylinder { segments: 32 });
        assert_eq!(solid.dimensions, DVec3::new(6.0, 6.0, 5.0));
        let bounds = solid.bounds();
        assert_relative_eq!(bounds.min.z, 0.0);
        assert_relative_eq!(bounds.max.z, 5.0);
    }

    #[test]
    fn test_scale_is_uniform_except_depth() {
        let solid = build_solid(&shape(ShapeKind::Rectangle), 5.0, 2.5).unwrap();
        assert_eq!(solid.origin, DVec3::new(7.5, -10.0, 2.5));
        assert_eq!(solid.dimensions, DVec3::new(25.0, 5.0, 5.0));
    }

    #[test]
    fn test_unknown_is_skipped() {
        assert!(build_solid(&shape(ShapeKind::Unknown), 5.0, 1.0).is_none());
    }

    #[test]
    fn test_build_solids_preserves_order() {
        let shapes = [
            shape(ShapeKind::Circle),
            shape(ShapeKind::Unknown),
            shape(ShapeKind::Door),
        ];
        let solids = build_solids(&shapes, 5.0, 1.0);
        let kinds: Vec<_> = solids.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Circle, ShapeKind::Door]);
    }
}
