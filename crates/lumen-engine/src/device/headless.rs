use anyhow::{Context, Result};

use crate::engine::GpuEngine;

use super::GpuInit;

/// Device context without a surface.
///
/// Used for tooling and CI runs that create GPU resources without a window.
pub struct HeadlessGpu {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    /// Held for the lifetime of the device; uploads go through `create_buffer_init`.
    _queue: wgpu::Queue,
}

impl HeadlessGpu {
    pub async fn new(init: GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&init.device_descriptor())
            .await
            .context("failed to create wgpu device/queue")?;

        let info = adapter.get_info();
        log::info!("headless gpu: {} ({:?})", info.name, info.backend);

        Ok(Self { adapter, device, _queue: queue })
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Engine handle creating resources on this device.
    pub fn engine(&self) -> GpuEngine<'_> {
        GpuEngine::new(&self.device)
    }
}
