//! Engine handles.
//!
//! An [`Engine`] is the graphics context scene construction talks to. It owns
//! the policy for turning CPU geometry into drawable resources:
//! - [`NullEngine`]: headless no-op, for tests and tooling
//! - [`GpuEngine`]: wgpu-backed, borrows a device from the `device` module

mod gpu;
mod handle;
mod null;

use anyhow::Result;

use crate::geometry::MeshData;

pub use gpu::GpuEngine;
pub use handle::{GpuMeshBuffers, MeshBuffers, MeshHandle};
pub use null::NullEngine;

/// Backend family of an engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Backend {
    Null,
    Gpu,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Backend::Null => "null",
            Backend::Gpu => "gpu",
        })
    }
}

/// Graphics context used to create scene resources.
///
/// Uploads are asynchronous so backends may suspend on device work; callers
/// drive them with any executor (`pollster::block_on` in this workspace).
#[allow(async_fn_in_trait)]
pub trait Engine {
    fn backend(&self) -> Backend;

    /// Validates `data` and makes it drawable. Errors are returned unchanged to the caller.
    async fn upload_mesh(&mut self, name: &str, data: &MeshData) -> Result<MeshBuffers>;

    /// Number of successful uploads performed by this engine.
    fn uploaded_meshes(&self) -> usize;
}
