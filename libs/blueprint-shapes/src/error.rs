//! # Shape Errors
//!
//! Error types for shape list ingestion. Normalization itself has no
//! failure mode; only decoding the upstream JSON can fail.

use thiserror::Error;

/// Errors that can occur while reading a shape list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// The input is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The JSON is neither an array nor an object with a `parse_result` array.
    #[error("Expected a shape array or an object with a `parse_result` array")]
    NotAShapeList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::InvalidJson("EOF while parsing".to_string());
        assert_eq!(err.to_string(), "Invalid JSON: EOF while parsing");
        assert!(ShapeError::NotAShapeList.to_string().contains("parse_result"));
    }
}
