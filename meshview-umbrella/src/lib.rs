//! # meshview
//!
//! Geometry core for a 3D mesh and point cloud viewer.
//!
//! This is the umbrella crate that provides convenient access to all meshview
//! functionality. You can use this crate to get everything in one place, or
//! use individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Point, vector and matrix types, the mesh container and errors
//! - **Util**: Perspective and view matrices, vertex normal estimation, camera
//!
//! ## Quick Start
//!
//! ```rust
//! use meshview::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let verts = vec![
//!     Point3f::new(0.0, 0.0, 0.0),
//!     Point3f::new(1.0, 0.0, 0.0),
//!     Point3f::new(0.0, 1.0, 0.0),
//! ];
//! let mut normals = vec![Vector3f::zeros(); verts.len()];
//! estimate_normals(&verts, None, &mut normals)?;
//! assert_eq!(normals[0], Vector3f::new(0.0, 0.0, 1.0));
//!
//! // `fw` is a direction, not a point to look at
//! let view = look_at(&Point3f::new(0.0, 0.0, 5.0), &-Vector3f::z(), &Vector3f::y())?;
//! let proj = persp_fov(std::f32::consts::FRAC_PI_4, 4.0 / 3.0, 0.1, 100.0)?;
//! let _mvp = proj * view;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables util
//! - `util`: Projection, view and normal routines
//! - `all`: Enables all features

// Re-export core functionality
pub use meshview_core::*;

// Re-export sub-crates
#[cfg(feature = "util")]
pub use meshview_util as util;

/// Convenient imports for common use cases
pub mod prelude {
    pub use meshview_core::*;

    #[cfg(feature = "util")]
    pub use meshview_util::*;
}
