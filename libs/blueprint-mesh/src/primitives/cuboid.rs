//! # Box Primitive
//!
//! Generates the mesh for an extruded rectangle.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::BOX_FACET_COUNT;
use glam::DVec3;

/// Creates a rectangular prism centred on the origin.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles. Each face is split along one
/// diagonal into two triangles that share the face's outward axis normal.
///
/// # Example
///
/// ```rust
/// use blueprint_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(100.0, 20.0, 5.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Box size must be positive: {:?}",
            size
        )));
    }

    let mut mesh = Mesh::with_capacity(8, BOX_FACET_COUNT);
    let max = size / 2.0;
    let min = -max;

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Counter-clockwise seen from outside

    // Bottom
    mesh.add_triangle(v0, v2, v1, DVec3::NEG_Z);
    mesh.add_triangle(v0, v3, v2, DVec3::NEG_Z);

    // Top
    mesh.add_triangle(v4, v5, v6, DVec3::Z);
    mesh.add_triangle(v4, v6, v7, DVec3::Z);

    // Front (y = min.y)
    mesh.add_triangle(v0, v1, v5, DVec3::NEG_Y);
    mesh.add_triangle(v0, v5, v4, DVec3::NEG_Y);

    // Back (y = max.y)
    mesh.add_triangle(v2, v3, v7, DVec3::Y);
    mesh.add_triangle(v2, v7, v6, DVec3::Y);

    // Left (x = min.x)
    mesh.add_triangle(v3, v0, v4, DVec3::NEG_X);
    mesh.add_triangle(v3, v4, v7, DVec3::NEG_X);

    // Right (x = max.x)
    mesh.add_triangle(v1, v2, v6, DVec3::X);
    mesh.add_triangle(v1, v6, v5, DVec3::X);

    Ok(mesh)
}
