//! CPU-side mesh geometry.
//!
//! Conventions:
//! - right-handed, +Y up
//! - counter-clockwise front faces
//! - `u32` indices, triangle lists only

mod mesh_data;
mod primitives;
mod vertex;

pub use mesh_data::{Aabb, MeshData};
pub use primitives::MAX_SPHERE_SEGMENTS;
pub use vertex::Vertex;
