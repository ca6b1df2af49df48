use glam::*;

use crate::{BufferWrapper, MaskTexture, MaskVertexBuffer, Polygon, Texture, projector, shader};

/// A renderer filling a lasso polygon into a [`MaskTexture`].
///
/// The polygon is unrolled into a triangle fan around its first vertex. Each triangle inverts
/// the pixels it covers, so pixels covered an odd number of times end up set. This fills
/// concave and self-intersecting polygons by the even-odd rule, the same rule as
/// [`Polygon::contains`].
#[derive(Debug)]
pub struct MaskRasterizer {
    /// The vertex buffer.
    vertex_buffer: MaskVertexBuffer,
    /// The render pipeline.
    pipeline: wgpu::RenderPipeline,
}

impl MaskRasterizer {
    /// The blend state inverting the destination.
    pub const INVERT_BLEND: wgpu::BlendState = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::OneMinusDst,
            dst_factor: wgpu::BlendFactor::Zero,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::OneMinusDstAlpha,
            dst_factor: wgpu::BlendFactor::Zero,
            operation: wgpu::BlendOperation::Add,
        },
    };

    /// Create a new mask rasterizer.
    pub fn new(device: &wgpu::Device) -> Self {
        log::debug!("Creating mask rasterizer pipeline layout");
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mask Rasterizer Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        log::debug!("Creating mask rasterizer shader");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mask Rasterizer Shader"),
            source: wgpu::ShaderSource::Wgsl(shader::MASK.into()),
        });

        log::debug!("Creating mask rasterizer pipeline");
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mask Rasterizer Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vert_main"),
                buffers: &[MaskVertexBuffer::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("frag_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: MaskTexture::FORMAT,
                    blend: Some(Self::INVERT_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::debug!("Creating mask vertex buffer");
        let vertex_buffer = MaskVertexBuffer::new(device);

        log::info!("Mask rasterizer created");

        Self {
            vertex_buffer,
            pipeline,
        }
    }

    /// Get the vertex buffer.
    pub fn vertex_buffer(&self) -> &MaskVertexBuffer {
        &self.vertex_buffer
    }

    /// Rasterize a screen space polygon into the mask.
    ///
    /// The mask is cleared first. It should already match `viewport` in size.
    pub fn rasterize(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        polygon: &Polygon,
        viewport: UVec2,
        mask: &MaskTexture,
    ) {
        let ndc = polygon
            .vertices()
            .iter()
            .map(|v| projector::screen_to_ndc(*v, viewport))
            .collect::<Vec<_>>();
        self.vertex_buffer
            .update(device, queue, &Self::fan_triangles(&ndc));

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Mask Rasterizer Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: mask.view(),
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if self.vertex_buffer.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.buffer().slice(..));
        render_pass.draw(0..self.vertex_buffer.len(), 0..1);
    }

    /// Unroll a polygon into the triangle list of a fan around its first vertex.
    pub fn fan_triangles(vertices: &[Vec2]) -> Vec<Vec2> {
        let Some((first, rest)) = vertices.split_first() else {
            return Vec::new();
        };

        rest.windows(2)
            .flat_map(|edge| [*first, edge[0], edge[1]])
            .collect()
    }
}
