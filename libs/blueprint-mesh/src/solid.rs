//! # Solids
//!
//! One extruded primitive per shape descriptor, positioned in world space.

use crate::bounds::Aabb;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_box, create_cylinder};
use blueprint_shapes::ShapeKind;
use config::constants::{cylinder_facet_count, BOX_FACET_COUNT};
use glam::{DMat3, DMat4, DVec3};

/// Primitive a solid is tessellated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Rectangular prism
    Box,
    /// Right circular cylinder with the given radial segment count
    Cylinder { segments: u32 },
}

/// An extruded box or cylinder.
///
/// `origin` is the centre of the solid's volume. `dimensions` holds
/// `(width, height, depth)` for boxes and `(radius, radius, height)` for
/// cylinders, both in world units with scale already applied.
/// `rotation_y` is the solid's orientation about the vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub kind: ShapeKind,
    pub primitive: Primitive,
    pub origin: DVec3,
    pub dimensions: DVec3,
    pub rotation_y: f64,
}

impl Solid {
    /// Creates an unrotated box.
    pub fn new_box(kind: ShapeKind, origin: DVec3, size: DVec3) -> Self {
        Self {
            kind,
            primitive: Primitive::Box,
            origin,
            dimensions: size,
            rotation_y: 0.0,
        }
    }

    /// Creates an unrotated cylinder with its axis along Z.
    pub fn new_cylinder(
        kind: ShapeKind,
        origin: DVec3,
        radius: f64,
        height: f64,
        segments: u32,
    ) -> Self {
        Self {
            kind,
            primitive: Primitive::Cylinder { segments },
            origin,
            dimensions: DVec3::new(radius, radius, height),
            rotation_y: 0.0,
        }
    }

    /// Half extents of the unrotated solid along each axis.
    pub fn half_extents(&self) -> DVec3 {
        match self.primitive {
            Primitive::Box => self.dimensions / 2.0,
            Primitive::Cylinder { .. } => DVec3::new(
                self.dimensions.x,
                self.dimensions.y,
                self.dimensions.z / 2.0,
            ),
        }
    }

    /// World-space axis-aligned bounds, accounting for `rotation_y`.
    pub fn bounds(&self) -> Aabb {
        let h = self.half_extents();
        let (sin, cos) = self.rotation_y.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let rotated = DVec3::new(cos * h.x + sin * h.z, h.y, sin * h.x + cos * h.z);
        Aabb::from_center_half_extents(self.origin, rotated)
    }

    /// Number of facets this solid triangulates into.
    pub fn facet_count(&self) -> usize {
        match self.primitive {
            Primitive::Box => BOX_FACET_COUNT,
            Primitive::Cylinder { segments } => cylinder_facet_count(segments),
        }
    }

    /// Local-to-world transform: rotate about Y, then move to `origin`.
    pub fn transform(&self) -> DMat4 {
        DMat4::from_translation(self.origin) * DMat4::from_rotation_y(self.rotation_y)
    }

    /// Moves the solid by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        self.origin += offset;
    }

    /// Rotates the solid about the world Y axis through the origin.
    ///
    /// Both the position and the orientation turn by `angle` radians.
    pub fn rotate_about_y(&mut self, angle: f64) {
        self.origin = DMat3::from_rotation_y(angle) * self.origin;
        self.rotation_y += angle;
    }

    /// Triangulates the solid in world space.
    pub fn to_mesh(&self) -> Result<Mesh, MeshError> {
        let mut mesh = match self.primitive {
            Primitive::Box => create_box(self.dimensions)?,
            Primitive::Cylinder { segments } => {
                create_cylinder(self.dimensions.x, self.dimensions.z, segments)?
            }
        };
        mesh.transform(&self.transform());
        Ok(mesh)
    }
}
