//! # Shape Descriptors
//!
//! Raw shape records as produced by the blueprint parser. Every field is
//! optional and numeric fields are read leniently: anything that is not a
//! JSON number counts as absent.

use crate::error::ShapeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A raw 2D shape record.
///
/// Rectangles carry `x`/`y`/`width`/`height`; circles carry `cx`/`cy`/`r`.
/// Unrelated fields (for example `filename` on uploaded STL entries) are
/// ignored.
///
/// # Example
///
/// ```rust
/// use blueprint_shapes::ShapeDescriptor;
///
/// let wall: ShapeDescriptor =
///     serde_json::from_str(r#"{"type": "wall", "x": 10, "y": 20, "width": 100, "height": 10}"#)
///         .unwrap();
/// assert_eq!(wall.shape_type.as_deref(), Some("wall"));
/// assert_eq!(wall.width, Some(100.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Shape type name as emitted upstream (any casing)
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub shape_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cx: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

impl ShapeDescriptor {
    /// Creates a descriptor with only a type name set.
    pub fn new(shape_type: impl Into<String>) -> Self {
        Self {
            shape_type: Some(shape_type.into()),
            ..Self::default()
        }
    }

    /// Sets the `x`/`y` corner position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Sets the `cx`/`cy` centre position.
    pub fn with_center(mut self, cx: f64, cy: f64) -> Self {
        self.cx = Some(cx);
        self.cy = Some(cy);
        self
    }

    /// Sets `width` and `height`.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the radius `r`.
    pub fn with_radius(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    /// Returns true if the descriptor has a type name and a usable extent
    /// along both footprint axes.
    ///
    /// Each axis is covered by its own field (`width`, `height`) or by the
    /// radius `r`. A value is usable when it is finite and non-zero.
    /// Upstream callers drop descriptors failing this check before export;
    /// see [`retain_with_extent`].
    pub fn has_extent(&self) -> bool {
        let usable = |v: Option<f64>| v.is_some_and(|v| v.is_finite() && v != 0.0);
        let typed = self.shape_type.as_deref().is_some_and(|t| !t.is_empty());

        typed
            && (usable(self.width) || usable(self.r))
            && (usable(self.height) || usable(self.r))
    }
}

/// Removes descriptors without a type or without an extent on both axes.
///
/// # Example
///
/// ```rust
/// use blueprint_shapes::{retain_with_extent, ShapeDescriptor};
///
/// let mut shapes = vec![
///     ShapeDescriptor::new("wall").with_size(10.0, 2.0),
///     ShapeDescriptor::new("door"),
/// ];
/// retain_with_extent(&mut shapes);
/// assert_eq!(shapes.len(), 1);
/// ```
pub fn retain_with_extent(shapes: &mut Vec<ShapeDescriptor>) {
    shapes.retain(ShapeDescriptor::has_extent);
}

/// Parses a shape list from JSON text.
///
/// Accepts either a bare array of descriptors or an upload response object
/// whose `parse_result` field holds the array.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidJson`] for malformed JSON and
/// [`ShapeError::NotAShapeList`] when no array can be found.
///
/// # Example
///
/// ```rust
/// use blueprint_shapes::parse_shape_list;
///
/// let json = r#"{"status": "success", "parse_result": [{"type": "circle", "cx": 5, "cy": 5, "r": 2}]}"#;
/// let shapes = parse_shape_list(json).unwrap();
/// assert_eq!(shapes.len(), 1);
/// assert_eq!(shapes[0].r, Some(2.0));
/// ```
pub fn parse_shape_list(json: &str) -> Result<Vec<ShapeDescriptor>, ShapeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ShapeError::InvalidJson(e.to_string()))?;
    shape_list_from_value(value)
}

/// Extracts a shape list from an already-decoded JSON value.
///
/// Entries that are not JSON objects become descriptors without a type, so
/// they normalize to `Unknown` and produce no geometry.
pub fn shape_list_from_value(value: Value) -> Result<Vec<ShapeDescriptor>, ShapeError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("parse_result") {
            Some(Value::Array(items)) => items,
            _ => return Err(ShapeError::NotAShapeList),
        },
        _ => return Err(ShapeError::NotAShapeList),
    };

    // Every field is lenient, so any object decodes
    Ok(items
        .into_iter()
        .map(|item| {
            if item.is_object() {
                serde_json::from_value(item).unwrap_or_default()
            } else {
                ShapeDescriptor::default()
            }
        })
        .collect())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_str()
        .map(str::to_owned))
}
