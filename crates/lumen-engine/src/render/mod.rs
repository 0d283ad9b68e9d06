//! GPU rendering subsystem.
//!
//! Renderers consume a [`Scene`](crate::scene::Scene) and issue GPU commands via
//! wgpu. Each renderer owns its GPU resources (pipelines, uniform buffers,
//! depth targets); mesh geometry buffers belong to the meshes themselves.
//!
//! Convention:
//! - world space is right-handed, +Y up
//! - shaders output linear colour; sRGB targets apply the transfer curve

mod ctx;
mod mesh;
mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use uniforms::MAX_LIGHTS;
