//! # Mesh Data Structure
//!
//! Indexed triangle mesh with one flat normal per triangle.

use config::constants::{approx_equal, EPSILON};
use glam::{DMat4, DVec3};

/// One output facet: a unit normal and three vertices in counter-clockwise
/// order when viewed from the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: DVec3,
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Normal implied by the winding (right-hand rule), or zero when degenerate.
    pub fn winding_normal(&self) -> DVec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Returns true if every component of the normal and vertices is finite.
    pub fn is_finite(&self) -> bool {
        self.normal.is_finite() && self.vertices.iter().all(|v| v.is_finite())
    }
}

/// A triangle mesh with vertices, indices and per-triangle normals.
///
/// Flat shading: each triangle stores its own outward unit normal, so the
/// two triangles of a box face share one normal without sharing state.
///
/// # Example
///
/// ```rust
/// use blueprint_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c, DVec3::Z);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// One unit normal per triangle
    normals: Vec<DVec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices with its flat normal.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32, normal: DVec3) {
        self.triangles.push([v0, v1, v2]);
        self.normals.push(normal);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the per-triangle normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the facet at the given triangle index.
    pub fn facet(&self, index: usize) -> Triangle {
        let [a, b, c] = self.triangles[index];
        Triangle {
            normal: self.normals[index],
            vertices: [
                self.vertices[a as usize],
                self.vertices[b as usize],
                self.vertices[c as usize],
            ],
        }
    }

    /// Iterates facets in emission order.
    pub fn facets(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangles.len()).map(move |i| self.facet(i))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices and normals by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose
        let normal_matrix = matrix.inverse().transpose();
        for n in &mut self.normals {
            *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, keeping its triangles after this mesh's.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
        self.normals.extend_from_slice(&other.normals);
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (zero area)
    /// - Every normal is unit length and agrees with the triangle winding
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        if self.normals.len() != self.triangles.len() {
            return false;
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&idx| idx >= vertex_count) {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let facet = self.facet(i);
            let [v0, v1, v2] = facet.vertices;
            if (v1 - v0).cross(v2 - v0).length() < EPSILON {
                return false;
            }

            if !approx_equal(facet.normal.length(), 1.0) {
                return false;
            }
            if facet.winding_normal().dot(facet.normal) < 0.999 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2, DVec3::Z);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_facet() {
        let mesh = unit_triangle();
        let facet = mesh.facet(0);
        assert_eq!(facet.normal, DVec3::Z);
        assert_eq!(facet.vertices, [DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(facet.winding_normal(), DVec3::Z);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2, DVec3::Z);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_rejects_inward_normal() {
        let mut mesh = unit_triangle();
        mesh.normals[0] = DVec3::NEG_Z;
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_transform_rotates_normals() {
        let mut mesh = unit_triangle();
        let matrix = DMat4::from_translation(DVec3::new(0.0, 0.0, 5.0))
            * DMat4::from_rotation_y(std::f64::consts::FRAC_PI_2);
        mesh.transform(&matrix);

        // +Z turned a quarter about Y points along +X
        let normal = mesh.normals()[0];
        assert_relative_eq!(normal.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(normal.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.vertices()[0].z, 5.0, epsilon = 1e-12);
        assert!(mesh.validate());
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = unit_triangle();
        let mut mesh2 = unit_triangle();
        mesh2.translate(DVec3::Z);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangles()[1], [3, 4, 5]); // Offset by 3
        assert_eq!(mesh1.normals().len(), 2);
        assert_eq!(mesh1.facet(1).vertices[0], DVec3::Z);
    }
}
