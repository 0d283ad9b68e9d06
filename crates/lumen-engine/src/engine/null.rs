use anyhow::{anyhow, Result};

use crate::geometry::MeshData;

use super::{Backend, Engine, MeshBuffers, MeshHandle};

/// Headless engine that validates geometry and hands out handles.
///
/// Holds no device resources. [`NullEngine::failing`] builds an instance whose
/// uploads always fail, for exercising error paths.
#[derive(Debug, Default)]
pub struct NullEngine {
    next_handle: u64,
    uploaded: usize,
    failure: Option<String>,
}

impl NullEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose every upload fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }
}

impl Engine for NullEngine {
    fn backend(&self) -> Backend {
        Backend::Null
    }

    async fn upload_mesh(&mut self, name: &str, data: &MeshData) -> Result<MeshBuffers> {
        if let Some(msg) = &self.failure {
            return Err(anyhow!("{msg}"));
        }
        data.validate()?;

        self.next_handle += 1;
        self.uploaded += 1;
        let handle = MeshHandle::new(self.next_handle);

        log::trace!(
            "null engine: '{name}' -> {handle} ({} vertices, {} indices)",
            data.vertex_count(),
            data.index_count()
        );

        Ok(MeshBuffers::cpu(handle))
    }

    fn uploaded_meshes(&self) -> usize {
        self.uploaded
    }
}
