//! # Primitives
//!
//! Mesh generation for the two solid primitives a blueprint produces.
//! Both are centred on the origin; callers place them with a transform.

pub mod cuboid;
pub mod cylinder;

pub use cuboid::create_box;
pub use cylinder::create_cylinder;
