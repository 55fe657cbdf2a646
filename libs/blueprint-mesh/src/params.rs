//! # Export Parameters
//!
//! Scalar inputs of one export: scale, rotation and extrusion depth.

use crate::error::MeshError;
use config::constants::{
    step_scale, DEFAULT_EXTRUSION_DEPTH, DEFAULT_ROTATION_Y, DEFAULT_SCALE, SCALE_STEP,
};
use serde::{Deserialize, Serialize};

/// Global parameters of one export.
///
/// Missing fields deserialize to their defaults:
///
/// ```rust
/// use blueprint_mesh::ExportParams;
///
/// let params: ExportParams = serde_json::from_str(r#"{"scale": 2.0}"#).unwrap();
/// assert_eq!(params, ExportParams::default().with_scale(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportParams {
    /// Uniform footprint scale
    pub scale: f64,
    /// Rotation about the vertical axis, in radians
    pub rotation_y: f64,
    /// Extrusion thickness in world units
    pub depth: f64,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            rotation_y: DEFAULT_ROTATION_Y,
            depth: DEFAULT_EXTRUSION_DEPTH,
        }
    }
}

impl ExportParams {
    pub fn new(scale: f64, rotation_y: f64, depth: f64) -> Self {
        Self {
            scale,
            rotation_y,
            depth,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation_y(mut self, rotation_y: f64) -> Self {
        self.rotation_y = rotation_y;
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Checks that every value is finite and `scale`/`depth` are positive.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MeshError::InvalidParameter {
                name: "scale",
                value: self.scale,
            });
        }
        if !self.rotation_y.is_finite() {
            return Err(MeshError::InvalidParameter {
                name: "rotation_y",
                value: self.rotation_y,
            });
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(MeshError::InvalidParameter {
                name: "depth",
                value: self.depth,
            });
        }
        Ok(())
    }

    /// Parameters with the scale one step larger, clamped.
    pub fn scale_up(self) -> Self {
        self.with_scale(step_scale(self.scale, SCALE_STEP))
    }

    /// Parameters with the scale one step smaller, clamped.
    pub fn scale_down(self) -> Self {
        self.with_scale(step_scale(self.scale, -SCALE_STEP))
    }
}
