//! # meshview util
//!
//! Geometry routines a mesh and point cloud viewer feeds its renderer with:
//! perspective projection and view matrices, and area-weighted per-vertex
//! normals for indexed or implicit triangle lists.
//!
//! All functions are stateless and borrow their buffers from the caller.

pub mod projection;
pub mod view;
pub mod normals;
pub mod camera;

// Re-export commonly used items
pub use projection::*;
pub use view::*;
pub use normals::*;
pub use camera::*;
