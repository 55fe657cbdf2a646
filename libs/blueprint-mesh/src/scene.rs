//! # Scene Assembly
//!
//! Centres a list of solids on the origin and applies the export rotation.

use crate::bounds::Aabb;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::solid::Solid;
use config::constants::approx_zero;
use glam::DVec3;
use tracing::{debug, warn};

/// Solids of one export, centred and rotated.
///
/// Solids keep the order of the shape list they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    solids: Vec<Solid>,
    center_offset: DVec3,
    scale: f64,
    rotation_y: f64,
}

impl Scene {
    /// Solids in input order.
    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    /// Translation applied to every solid to centre the group.
    pub fn center_offset(&self) -> DVec3 {
        self.center_offset
    }

    /// Scale the solids were built with.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation about Y applied after centring, in radians.
    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Bounds of all solids in their final placement, or `None` when empty.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::enclosing(self.solids.iter().map(Solid::bounds))
    }

    /// Total number of facets the scene triangulates into.
    pub fn facet_count(&self) -> usize {
        self.solids.iter().map(Solid::facet_count).sum()
    }

    /// Triangulates every solid into one mesh, solid by solid.
    pub fn triangulate(&self) -> Result<Mesh, MeshError> {
        let mut mesh = Mesh::with_capacity(0, self.facet_count());
        for solid in &self.solids {
            mesh.merge(&solid.to_mesh()?);
        }
        Ok(mesh)
    }
}

/// Assembles solids into a scene.
///
/// The bounding box over all solids is computed from scratch, every solid is
/// translated so its centre lands on the origin, and then each solid is
/// rotated about the Y axis by `rotation_y`. `scale` is recorded only; the
/// solids already carry it.
///
/// An empty list yields an empty scene with a zero offset.
///
/// # Example
///
/// ```rust
/// use blueprint_mesh::{assemble, Solid};
/// use blueprint_shapes::ShapeKind;
/// use glam::DVec3;
///
/// let solid = Solid::new_box(ShapeKind::Wall, DVec3::new(10.0, 0.0, 2.5), DVec3::ONE);
/// let scene = assemble(vec![solid], 1.0, 0.0);
/// assert_eq!(scene.center_offset(), DVec3::new(-10.0, 0.0, -2.5));
///
/// assert!(assemble(Vec::new(), 1.0, 0.0).is_empty());
/// ```
pub fn assemble(mut solids: Vec<Solid>, scale: f64, rotation_y: f64) -> Scene {
    let center_offset = match Aabb::enclosing(solids.iter().map(Solid::bounds)) {
        Some(bounds) => -bounds.center(),
        None => {
            warn!("assembled scene has no solids");
            DVec3::ZERO
        }
    };

    for solid in &mut solids {
        solid.translate(center_offset);
        if !approx_zero(rotation_y) {
            solid.rotate_about_y(rotation_y);
        }
    }

    debug!(
        solids = solids.len(),
        offset = ?center_offset,
        rotation_y,
        "assembled scene"
    );

    Scene {
        solids,
        center_offset,
        scale,
        rotation_y,
    }
}
