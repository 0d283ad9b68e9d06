use anyhow::{ensure, Result};
use wgpu::util::DeviceExt;

use crate::geometry::MeshData;

use super::{Backend, Engine, GpuMeshBuffers, MeshBuffers, MeshHandle};

/// wgpu-backed engine.
///
/// Borrows the device of a [`Gpu`](crate::device::Gpu) or
/// [`HeadlessGpu`](crate::device::HeadlessGpu); buffers it creates belong to
/// that device and must only be drawn with it.
pub struct GpuEngine<'d> {
    device: &'d wgpu::Device,
    next_handle: u64,
    uploaded: usize,
}

impl<'d> GpuEngine<'d> {
    pub fn new(device: &'d wgpu::Device) -> Self {
        Self {
            device,
            next_handle: 0,
            uploaded: 0,
        }
    }
}

impl Engine for GpuEngine<'_> {
    fn backend(&self) -> Backend {
        Backend::Gpu
    }

    async fn upload_mesh(&mut self, name: &str, data: &MeshData) -> Result<MeshBuffers> {
        data.validate()?;

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&data.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(&data.indices);

        let max = self.device.limits().max_buffer_size;
        ensure!(
            vertex_bytes.len() as u64 <= max && index_bytes.len() as u64 <= max,
            "mesh '{name}' exceeds the device buffer size limit ({max} bytes)"
        );
        let index_count = u32::try_from(data.index_count())
            .map_err(|_| anyhow::anyhow!("mesh '{name}' has too many indices"))?;

        let vertex = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("lumen mesh vbo '{name}'")),
            contents: vertex_bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("lumen mesh ibo '{name}'")),
            contents: index_bytes,
            usage: wgpu::BufferUsages::INDEX,
        });

        self.next_handle += 1;
        self.uploaded += 1;
        let handle = MeshHandle::new(self.next_handle);

        log::debug!(
            "uploaded '{name}' as {handle}: {} B vertices, {} B indices",
            vertex_bytes.len(),
            index_bytes.len()
        );

        Ok(MeshBuffers {
            handle,
            gpu: Some(GpuMeshBuffers { vertex, index, index_count }),
        })
    }

    fn uploaded_meshes(&self) -> usize {
        self.uploaded
    }
}
