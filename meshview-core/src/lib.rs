//! Core data structures for meshview
//!
//! This crate provides the point, vector and matrix types consumed by the
//! viewer's geometry routines, the mesh buffer container, and the shared
//! error type.

pub mod point;
pub mod mesh;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
