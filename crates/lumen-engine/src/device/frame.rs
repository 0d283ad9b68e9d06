/// Swapchain texture acquired for one redraw, with its view and encoder.
///
/// Handed back to [`Gpu::submit`](super::Gpu::submit), which presents it. The
/// next texture cannot be acquired while this one is alive.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
