//! # Blueprint Mesh
//!
//! Turns normalized blueprint shapes into extruded solids and writes them
//! as ASCII STL.
//!
//! ## Architecture
//!
//! ```text
//! NormalizedShape → build_solid → Solid → assemble → Scene → serialize → STL text
//! ```
//!
//! - **Builder**: boxes for walls, doors, windows and rectangles; 32-segment
//!   cylinders for circles; unknown shapes are skipped
//! - **Scene**: centres the group's bounding box on the origin, then rotates
//!   about Y
//! - **STL**: flat-shaded facets, fixed-point numbers
//!
//! Every run is a pure function of its inputs, so independent shape lists
//! can be exported in parallel with [`export_batch`].
//!
//! ## Example
//!
//! ```rust
//! use blueprint_mesh::{export_stl_json, ExportParams};
//!
//! let json = r#"[
//!     {"type": "wall", "x": 0, "y": 0, "width": 100, "height": 20},
//!     {"type": "circle", "cx": 50, "cy": 50, "r": 10}
//! ]"#;
//! let stl = export_stl_json(json, &ExportParams::default()).unwrap();
//! assert_eq!(stl.matches("endfacet").count(), 136);
//! ```

pub mod bounds;
pub mod builder;
pub mod error;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod scene;
pub mod solid;
pub mod stl;

pub use bounds::Aabb;
pub use builder::{build_solid, build_solids};
pub use error::MeshError;
pub use mesh::{Mesh, Triangle};
pub use params::ExportParams;
pub use scene::{assemble, Scene};
pub use solid::{Primitive, Solid};
pub use stl::{read_ascii_stl, serialize, write_ascii_stl, ExportTarget};

use blueprint_shapes::{normalize_all, parse_shape_list, ShapeDescriptor};
use rayon::prelude::*;
use tracing::{debug, info};

/// Normalizes, builds and assembles a shape list.
///
/// Never fails for empty or all-unknown input; the result is then an empty
/// scene.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] if `params` does not validate, and
/// [`MeshError::NonFinite`] if positions or sizes are so large that the
/// scaled, centred scene no longer fits in `f64`.
pub fn build_scene(
    descriptors: &[ShapeDescriptor],
    params: &ExportParams,
) -> Result<Scene, MeshError> {
    params.validate()?;

    let shapes = normalize_all(descriptors);
    for (index, (raw, shape)) in descriptors.iter().zip(&shapes).enumerate() {
        if !shape.kind.produces_geometry() {
            debug!(index, raw_type = ?raw.shape_type, "skipped shape without geometry");
        }
    }

    let solids = build_solids(&shapes, params.depth, params.scale);
    let scene = assemble(solids, params.scale, params.rotation_y);

    if let Some(index) = scene.solids().iter().position(|s| !s.bounds().is_finite()) {
        return Err(MeshError::non_finite(format!("solid {}", index)));
    }
    Ok(scene)
}

/// Runs the whole pipeline and returns ASCII STL text.
///
/// # Errors
///
/// [`MeshError::EmptyInput`] if no shape produced geometry, plus any error
/// of [`build_scene`].
pub fn export_stl(
    descriptors: &[ShapeDescriptor],
    params: &ExportParams,
) -> Result<String, MeshError> {
    let scene = build_scene(descriptors, params)?;
    let text = serialize(&scene)?;

    info!(
        solids = scene.len(),
        facets = scene.facet_count(),
        bytes = text.len(),
        "exported STL"
    );
    Ok(text)
}

/// Parses a shape list (bare array or `parse_result` response) and exports it.
pub fn export_stl_json(json: &str, params: &ExportParams) -> Result<String, MeshError> {
    let descriptors = parse_shape_list(json)?;
    export_stl(&descriptors, params)
}

/// Exports several independent shape lists in parallel.
///
/// Results are returned in input order; one list failing does not affect
/// the others.
pub fn export_batch(
    lists: &[Vec<ShapeDescriptor>],
    params: &ExportParams,
) -> Vec<Result<String, MeshError>> {
    lists
        .par_iter()
        .map(|descriptors| export_stl(descriptors, params))
        .collect()
}
