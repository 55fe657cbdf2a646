//! # Cylinder Primitive
//!
//! Generates the mesh for an extruded circle.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::cylinder_facet_count;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a right circular cylinder centred on the origin, axis along Z.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Length along Z (from `-height/2` to `height/2`)
/// * `segments` - Number of segments around circumference
///
/// # Returns
///
/// A mesh with `2 * segments` side triangles followed by `segments - 2`
/// bottom cap and `segments - 2` top cap triangles. Side triangles carry
/// the outward radial direction at the middle of their segment; caps are
/// fanned from ring vertex 0 and carry `-Z` / `+Z`.
///
/// # Example
///
/// ```rust
/// use blueprint_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(10.0, 5.0, 32).unwrap();
/// assert_eq!(mesh.triangle_count(), 124);
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let mut mesh = Mesh::with_capacity(2 * segments as usize, cylinder_facet_count(segments));
    let z_bottom = -height / 2.0;
    let z_top = height / 2.0;
    let angle = |j: f64| 2.0 * PI * j / segments as f64;

    let bottom: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = angle(j as f64);
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z_bottom))
        })
        .collect();

    let top: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = angle(j as f64);
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z_top))
        })
        .collect();

    // Side quads, one per segment
    for j in 0..segments as usize {
        let j_next = (j + 1) % segments as usize;
        let mid = angle(j as f64 + 0.5);
        let normal = DVec3::new(mid.cos(), mid.sin(), 0.0);

        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next], normal);
        mesh.add_triangle(bottom[j], top[j_next], top[j], normal);
    }

    // Bottom cap, fanned from vertex 0
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j], DVec3::NEG_Z);
    }

    // Top cap, fanned from vertex 0
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(top[0], top[j], top[j + 1], DVec3::Z);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::DEFAULT_SEGMENTS;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(10.0, 5.0, DEFAULT_SEGMENTS).unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.triangle_count(), 124);
    }

    #[test]
    fn test_cylinder_validates() {
        let mesh = create_cylinder(10.0, 5.0, DEFAULT_SEGMENTS).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_cylinder_centered() {
        let mesh = create_cylinder(4.0, 6.0, DEFAULT_SEGMENTS).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, -3.0);
        assert_relative_eq!(max.z, 3.0);
        assert_relative_eq!(max.x, 4.0);
        assert_relative_eq!(min.x, -4.0);
    }

    #[test]
    fn test_cylinder_side_normals_are_radial() {
        let mesh = create_cylinder(2.0, 1.0, 8).unwrap();
        for facet in mesh.facets().take(16) {
            assert_relative_eq!(facet.normal.z, 0.0);
            assert_relative_eq!(facet.normal.length(), 1.0, epsilon = 1e-12);
            let centroid = (facet.vertices[0] + facet.vertices[1] + facet.vertices[2]) / 3.0;
            assert!(centroid.truncate().dot(facet.normal.truncate()) > 0.0);
        }
    }

    #[test]
    fn test_cylinder_cap_normals() {
        let segments = 8;
        let mesh = create_cylinder(2.0, 1.0, segments).unwrap();
        let caps: Vec<_> = mesh.normals()[2 * segments as usize..].to_vec();
        let (bottom, top) = caps.split_at(segments as usize - 2);
        assert!(bottom.iter().all(|n| *n == DVec3::NEG_Z));
        assert!(top.iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(create_cylinder(5.0, 0.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_invalid_radius() {
        assert!(create_cylinder(0.0, 5.0, 32).is_err());
        assert!(create_cylinder(f64::INFINITY, 5.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        assert!(create_cylinder(5.0, 10.0, 2).is_err());
    }
}
