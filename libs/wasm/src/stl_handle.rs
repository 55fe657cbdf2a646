//! # STL Handle
//!
//! WASM-friendly wrapper for exported STL text.

use blueprint_mesh::ExportTarget;
use wasm_bindgen::prelude::*;

/// Exported STL text plus summary counts, accessible from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const stl = export_stl(JSON.stringify(parseResult), scale, rotationY, 5.0);
///
/// const blob = new Blob([stl.text()], { type: "model/stl" });
/// const link = document.createElement("a");
/// link.href = URL.createObjectURL(blob);
/// link.download = stl.file_name;
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct StlHandle {
    text: String,
    facet_count: u32,
    solid_count: u32,
    target: ExportTarget,
}

impl StlHandle {
    pub(crate) fn new(text: String, facet_count: usize, solid_count: usize) -> Self {
        Self {
            text,
            facet_count: u32::try_from(facet_count).unwrap_or(u32::MAX),
            solid_count: u32::try_from(solid_count).unwrap_or(u32::MAX),
            target: ExportTarget::Download,
        }
    }
}

#[wasm_bindgen]
impl StlHandle {
    /// Returns the ASCII STL text.
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Returns the number of facets written.
    #[wasm_bindgen(getter)]
    pub fn facet_count(&self) -> u32 {
        self.facet_count
    }

    /// Returns the number of solids in the scene.
    #[wasm_bindgen(getter)]
    pub fn solid_count(&self) -> u32 {
        self.solid_count
    }

    /// Returns the file name the host should store the text under.
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.target.file_name().to_string()
    }

    /// Marks the handle for upload to the generate endpoint.
    pub fn mark_generated(&mut self) {
        self.target = ExportTarget::Generated;
    }
}
