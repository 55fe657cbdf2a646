//! # Blueprint Shapes
//!
//! Ingestion and normalization of the 2D shape descriptors emitted by the
//! blueprint parsing service.
//!
//! ## Architecture
//!
//! ```text
//! parse_result JSON → ShapeDescriptor → normalize → NormalizedShape → blueprint-mesh
//! ```
//!
//! Normalization never fails: every missing or unusable field resolves to a
//! concrete default, and unrecognized types classify as [`ShapeKind::Unknown`].
//!
//! ## Example
//!
//! ```rust
//! use blueprint_shapes::{normalize, ShapeDescriptor, ShapeKind};
//!
//! let shape = normalize(&ShapeDescriptor::new("circle").with_radius(5.0));
//! assert_eq!(shape.kind, ShapeKind::Circle);
//! assert_eq!((shape.width, shape.height, shape.radius), (5.0, 5.0, 5.0));
//! ```

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod normalize;

pub use descriptor::{parse_shape_list, retain_with_extent, shape_list_from_value, ShapeDescriptor};
pub use error::ShapeError;
pub use kind::ShapeKind;
pub use normalize::{normalize, normalize_all, NormalizedShape};
