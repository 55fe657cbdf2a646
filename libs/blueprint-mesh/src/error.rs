//! # Mesh Errors
//!
//! Error types for solid generation and STL export.

use blueprint_shapes::ShapeError;
use thiserror::Error;

/// Errors that can occur while exporting a blueprint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The scene has no solids, so there is nothing to export.
    ///
    /// Raised at the serializer boundary, never by assembly.
    #[error("Nothing to export: no shape produced geometry")]
    EmptyInput,

    /// An export parameter is non-finite or out of range
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A non-finite number reached the serializer
    #[error("Non-finite value in {context}")]
    NonFinite { context: String },

    /// Degenerate primitive dimensions
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// STL text could not be read back
    #[error("Malformed STL at line {line}: {message}")]
    MalformedStl { line: usize, message: String },

    /// Shape list ingestion failed
    #[error("Shape input error: {0}")]
    Shape(#[from] ShapeError),

    /// Formatter failure while writing STL text
    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a malformed STL error for a 1-based line number.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedStl {
            line,
            message: message.into(),
        }
    }

    /// Creates a non-finite value error.
    pub fn non_finite(context: impl Into<String>) -> Self {
        Self::NonFinite {
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(MeshError::EmptyInput.to_string().contains("Nothing to export"));
        let err = MeshError::InvalidParameter {
            name: "scale",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid parameter `scale`: -1");
        assert!(MeshError::malformed(7, "bad vertex").to_string().contains("line 7"));
    }

    #[test]
    fn test_shape_error_converts() {
        let err: MeshError = ShapeError::NotAShapeList.into();
        assert!(matches!(err, MeshError::Shape(ShapeError::NotAShapeList)));
    }
}
