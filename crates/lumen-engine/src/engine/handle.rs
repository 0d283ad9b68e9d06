use std::fmt;

/// Engine-issued identifier for uploaded geometry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MeshHandle(u64);

impl MeshHandle {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh:{}", self.0)
    }
}

/// Device buffers for one mesh.
#[derive(Debug)]
pub struct GpuMeshBuffers {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
    pub index_count: u32,
}

/// Result of an engine upload.
#[derive(Debug)]
pub struct MeshBuffers {
    pub handle: MeshHandle,
    /// `None` for engines that keep no device resources.
    pub gpu: Option<GpuMeshBuffers>,
}

impl MeshBuffers {
    /// Upload result with no device resources.
    #[inline]
    pub fn cpu(handle: MeshHandle) -> Self {
        Self { handle, gpu: None }
    }
}
