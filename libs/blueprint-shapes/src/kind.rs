//! # Shape Kinds
//!
//! Classification of descriptor type names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometric category of a normalized shape.
///
/// Walls, doors, windows and rectangles all become extruded boxes; circles
/// become cylinders; anything else produces no geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Wall,
    Door,
    Window,
    Rectangle,
    Circle,
    Unknown,
}

impl ShapeKind {
    /// Classifies a type name case-insensitively. A missing name is `Unknown`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blueprint_shapes::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_type_name(Some("WALL")), ShapeKind::Wall);
    /// assert_eq!(ShapeKind::from_type_name(Some("blob")), ShapeKind::Unknown);
    /// assert_eq!(ShapeKind::from_type_name(None), ShapeKind::Unknown);
    /// ```
    pub fn from_type_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Unknown;
        };
        match name.to_ascii_lowercase().as_str() {
            "wall" => Self::Wall,
            "door" => Self::Door,
            "window" => Self::Window,
            "rectangle" => Self::Rectangle,
            "circle" => Self::Circle,
            _ => Self::Unknown,
        }
    }

    /// Returns true for kinds extruded as rectangular prisms.
    #[inline]
    pub fn is_box(self) -> bool {
        matches!(self, Self::Wall | Self::Door | Self::Window | Self::Rectangle)
    }

    /// Returns true for kinds extruded as cylinders.
    #[inline]
    pub fn is_cylinder(self) -> bool {
        self == Self::Circle
    }

    /// Returns true if this kind yields a solid.
    #[inline]
    pub fn produces_geometry(self) -> bool {
        self != Self::Unknown
    }

    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
