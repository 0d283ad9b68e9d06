//! Scene graph types.
//!
//! Responsibilities:
//! - own the camera, light and mesh registries of a scene
//! - hand out process-unique entity ids in insertion order
//! - keep entity-specific math isolated per entity file

mod camera;
mod entity;
mod graph;
mod light;
mod mesh;
mod transform;

pub use camera::Camera;
pub use entity::{Entity, EntityId};
pub use graph::Scene;
pub use light::{Light, LightKind};
pub use mesh::Mesh;
pub use transform::Transform;
