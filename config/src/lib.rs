//! # Config Crate
//!
//! Centralized configuration constants for the blueprint-to-STL pipeline.
//! Every default the normalizer, geometry builder and serializer fall back
//! to is defined here so the crates agree on one value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_EXTRUSION_DEPTH, DEFAULT_SCALE, DEFAULT_SEGMENTS};
//!
//! let depth: Option<f64> = None;
//! assert_eq!(depth.unwrap_or(DEFAULT_EXTRUSION_DEPTH), 5.0);
//! assert_eq!(DEFAULT_SCALE, 1.0);
//! assert_eq!(DEFAULT_SEGMENTS, 32);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Interoperable**: Output names and precision match what STL viewers expect

pub mod constants;

#[cfg(test)]
mod tests;
