use crate::geometry::Vertex;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::Scene;

use super::uniforms::{FrameUniform, ModelUniform};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Lit, depth-tested mesh renderer.
///
/// Draws every mesh in the scene that carries GPU buffers, using the scene's
/// active camera and lights. Pipelines are rebuilt when the target format
/// changes; the depth buffer follows the target size.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    frame_bgl: Option<wgpu::BindGroupLayout>,
    model_bgl: Option<wgpu::BindGroupLayout>,

    frame_ubo: Option<wgpu::Buffer>,
    frame_bind_group: Option<wgpu::BindGroup>,

    /// One slot per mesh, `model_stride` bytes apart, bound with a dynamic offset.
    model_ubo: Option<wgpu::Buffer>,
    model_bind_group: Option<wgpu::BindGroup>,
    model_capacity: usize,
    model_stride: u64,

    depth: Option<(wgpu::TextureView, u32, u32)>,

    warned_cpu_only: bool,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `scene` into `target`, loading the existing colour contents.
    ///
    /// Skips the frame when the scene has no camera.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, scene: &Scene) {
        let Some(frame_uniform) = FrameUniform::from_scene(scene, ctx.aspect()) else {
            return;
        };

        let models: Vec<ModelUniform> = scene
            .meshes()
            .iter()
            .filter(|m| m.is_gpu_resident())
            .map(|m| ModelUniform::from(&**m))
            .collect();

        if models.len() < scene.meshes().len() && !self.warned_cpu_only {
            log::debug!("MeshRenderer: meshes without GPU buffers are skipped");
            self.warned_cpu_only = true;
        }

        self.ensure_pipeline(ctx);
        self.ensure_frame_bindings(ctx);
        self.ensure_model_capacity(ctx, models.len().max(1));
        self.ensure_depth(ctx);

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        let Some(frame_ubo) = self.frame_ubo.as_ref() else { return };
        ctx.queue.write_buffer(frame_ubo, 0, bytemuck::bytes_of(&frame_uniform));

        let Some(model_ubo) = self.model_ubo.as_ref() else { return };
        for (i, m) in models.iter().enumerate() {
            ctx.queue.write_buffer(model_ubo, i as u64 * self.model_stride, bytemuck::bytes_of(m));
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(frame_bg) = self.frame_bind_group.as_ref() else { return };
        let Some(model_bg) = self.model_bind_group.as_ref() else { return };
        let Some((depth_view, _, _)) = self.depth.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumen mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, frame_bg, &[]);

        let resident = scene.meshes().iter().filter_map(|m| m.gpu());
        for (i, gpu) in resident.enumerate() {
            let offset = (i as u64 * self.model_stride) as u32;
            rpass.set_bind_group(1, model_bg, &[offset]);
            rpass.set_vertex_buffer(0, gpu.vertex.slice(..));
            rpass.set_index_buffer(gpu.index.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.target_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let frame_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lumen mesh frame bgl"),
            entries: &[uniform_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                false,
                std::mem::size_of::<FrameUniform>(),
            )],
        });

        let model_bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lumen mesh model bgl"),
            entries: &[uniform_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                true,
                std::mem::size_of::<ModelUniform>(),
            )],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lumen mesh pipeline layout"),
            bind_group_layouts: &[&frame_bgl, &model_bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lumen mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.target_format);
        self.pipeline = Some(pipeline);
        self.frame_bgl = Some(frame_bgl);
        self.model_bgl = Some(model_bgl);

        // Bind groups reference the old layouts.
        self.frame_ubo = None;
        self.frame_bind_group = None;
        self.model_ubo = None;
        self.model_bind_group = None;
        self.model_capacity = 0;
    }

    fn ensure_frame_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.frame_bind_group.is_some() && self.frame_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.frame_bgl.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen mesh frame ubo"),
            size: std::mem::size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen mesh frame bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.frame_ubo = Some(ubo);
        self.frame_bind_group = Some(bind_group);
    }

    fn ensure_model_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.model_capacity && self.model_bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.model_bgl.as_ref() else { return };

        let align = u64::from(ctx.device.limits().min_uniform_buffer_offset_alignment);
        let stride = align_up(std::mem::size_of::<ModelUniform>() as u64, align);
        let capacity = required.next_power_of_two().max(16);

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen mesh model ubo"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen mesh model bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ModelUniform>() as u64),
                }),
            }],
        });

        self.model_ubo = Some(ubo);
        self.model_bind_group = Some(bind_group);
        self.model_capacity = capacity;
        self.model_stride = stride;
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        let (w, h) = (ctx.width.max(1), ctx.height.max(1));
        if matches!(self.depth, Some((_, dw, dh)) if dw == w && dh == h) {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("lumen depth"),
            size: wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.depth = Some((view, w, h));
    }
}

fn uniform_entry(
    visibility: wgpu::ShaderStages,
    dynamic: bool,
    size: usize,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: dynamic,
            min_binding_size: wgpu::BufferSize::new(size as u64),
        },
        count: None,
    }
}

fn align_up(value: u64, align: u64) -> u64 {
    if align <= 1 {
        return value;
    }
    value.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_up_rounds_to_multiple() {
        assert_eq!(align_up(144, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(144, 0), 144);
    }
}
