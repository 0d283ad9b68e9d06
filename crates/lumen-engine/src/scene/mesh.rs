use glam::Vec3;

use crate::engine::{GpuMeshBuffers, MeshBuffers, MeshHandle};
use crate::geometry::MeshData;

use super::Transform;

/// Renderable mesh: CPU geometry plus whatever the engine uploaded for it.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub transform: Transform,
    /// Linear RGB albedo.
    pub color: Vec3,
    data: MeshData,
    buffers: MeshBuffers,
}

impl Mesh {
    /// Wraps uploaded geometry. `buffers` must come from an engine upload of `data`.
    pub fn new(name: impl Into<String>, data: MeshData, buffers: MeshBuffers) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            color: Vec3::splat(0.8),
            data,
            buffers,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn data(&self) -> &MeshData {
        &self.data
    }

    #[inline]
    pub fn handle(&self) -> MeshHandle {
        self.buffers.handle
    }

    /// GPU buffers, if the owning engine keeps geometry on a device.
    #[inline]
    pub fn gpu(&self) -> Option<&GpuMeshBuffers> {
        self.buffers.gpu.as_ref()
    }

    #[inline]
    pub fn is_gpu_resident(&self) -> bool {
        self.buffers.gpu.is_some()
    }
}
