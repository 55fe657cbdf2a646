//! WASM-facing entry points for the blueprint STL pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call `export_stl_internal`, which returns
//! Rust errors instead of `JsValue`s.
//!
//! ```
//! let json = r#"[{"type": "door", "width": 30, "height": 10}]"#;
//! let stl = blueprint_wasm::export_stl_internal(json, 1.0, 0.0, 5.0).unwrap();
//! assert_eq!(stl.facet_count(), 12);
//! ```

use blueprint_mesh::{build_scene, serialize, ExportParams, MeshError};
use blueprint_shapes::parse_shape_list;
use config::constants::{step_scale, SCALE_STEP};
use wasm_bindgen::prelude::*;

mod stl_handle;

pub use stl_handle::StlHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "blueprint-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default export parameters as JSON
/// (`{"scale":1.0,"rotationY":0.0,"depth":5.0}`).
///
/// # Errors
/// Returns a JavaScript error if serialization fails.
#[wasm_bindgen]
pub fn default_params() -> Result<String, JsValue> {
    serde_json::to_string(&ExportParams::default())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Returns the scale one step larger than `current`, clamped.
///
/// # Examples
/// ```
/// assert_eq!(blueprint_wasm::next_scale_up(3.0), 3.0);
/// ```
#[wasm_bindgen]
pub fn next_scale_up(current: f64) -> f64 {
    step_scale(current, SCALE_STEP)
}

/// Returns the scale one step smaller than `current`, clamped.
///
/// # Examples
/// ```
/// assert_eq!(blueprint_wasm::next_scale_down(0.2), 0.2);
/// ```
#[wasm_bindgen]
pub fn next_scale_down(current: f64) -> f64 {
    step_scale(current, -SCALE_STEP)
}

/// Exports a shape list as ASCII STL.
///
/// `shapes_json` is either a bare descriptor array or the upload response
/// object carrying `parse_result`.
///
/// # Errors
/// Returns a JavaScript error with a human-readable message when the JSON
/// is invalid, a parameter is out of range, or no shape produced geometry.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const stl = export_stl(JSON.stringify(response), 1.0, 0.0, 5.0);
/// //   console.log(stl.file_name, stl.facet_count);
/// // } catch (error) {
/// //   alert(error);
/// // }
/// ```
#[wasm_bindgen]
pub fn export_stl(
    shapes_json: &str,
    scale: f64,
    rotation_y: f64,
    depth: f64,
) -> Result<StlHandle, JsValue> {
    export_stl_internal(shapes_json, scale, rotation_y, depth)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Internal implementation of `export_stl`.
pub fn export_stl_internal(
    shapes_json: &str,
    scale: f64,
    rotation_y: f64,
    depth: f64,
) -> Result<StlHandle, MeshError> {
    let descriptors = parse_shape_list(shapes_json)?;
    let params = ExportParams::new(scale, rotation_y, depth);
    let scene = build_scene(&descriptors, &params)?;
    let text = serialize(&scene)?;

    Ok(StlHandle::new(text, scene.facet_count(), scene.len()))
}

#[cfg(test)]
mod tests;
