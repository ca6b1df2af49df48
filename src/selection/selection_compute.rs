use crate::{
    BufferWrapper, CameraTransformBuffer, MaskTexture, PointPositionsBuffer, ResultTexture,
    TexelCoordsBuffer, Texture, shader,
};

/// A renderer testing every point against a [`MaskTexture`] into a [`ResultTexture`].
///
/// Each point is drawn as one pixel at its assigned texel, white if the mask covers the point's
/// projected screen position and black otherwise.
#[derive(Debug)]
pub struct SelectionComputeRenderer {
    /// The bind group layout.
    bind_group_layout: wgpu::BindGroupLayout,
    /// The bind group.
    bind_group: wgpu::BindGroup,
    /// The render pipeline.
    pipeline: wgpu::RenderPipeline,
}

impl SelectionComputeRenderer {
    /// The bind group layout descriptor.
    pub const BIND_GROUP_LAYOUT_DESCRIPTOR: wgpu::BindGroupLayoutDescriptor<'static> =
        wgpu::BindGroupLayoutDescriptor {
            label: Some("Selection Compute Renderer Bind Group Layout"),
            entries: &[
                // Camera transform uniform buffer
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Mask texture
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
            ],
        };

    /// Create a new selection compute renderer.
    pub fn new(device: &wgpu::Device, camera: &CameraTransformBuffer, mask: &MaskTexture) -> Self {
        log::debug!("Creating selection compute renderer bind group layout");
        let bind_group_layout =
            device.create_bind_group_layout(&Self::BIND_GROUP_LAYOUT_DESCRIPTOR);

        log::debug!("Creating selection compute renderer bind group");
        let bind_group = Self::create_bind_group_static(device, &bind_group_layout, camera, mask);

        log::debug!("Creating selection compute renderer pipeline layout");
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Selection Compute Renderer Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        log::debug!("Creating selection compute renderer shader");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Selection Compute Renderer Shader"),
            source: wgpu::ShaderSource::Wgsl(shader::SELECTION.into()),
        });

        log::debug!("Creating selection compute renderer pipeline");
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Selection Compute Renderer Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vert_main"),
                buffers: &[PointPositionsBuffer::LAYOUT, TexelCoordsBuffer::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("frag_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ResultTexture::FORMAT,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::info!("Selection compute renderer created");

        Self {
            bind_group_layout,
            bind_group,
            pipeline,
        }
    }

    /// Recreate the bind group, e.g. after the mask texture was resized.
    pub fn update_bind_group(
        &mut self,
        device: &wgpu::Device,
        camera: &CameraTransformBuffer,
        mask: &MaskTexture,
    ) {
        self.bind_group =
            Self::create_bind_group_static(device, &self.bind_group_layout, camera, mask);
    }

    /// Render the selection of `point_count` points into the result texture.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        result: &ResultTexture,
        positions: &PointPositionsBuffer,
        texel_coords: &TexelCoordsBuffer,
        point_count: u32,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Selection Compute Renderer Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: result.view(),
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

        if point_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, positions.buffer().slice(..));
        render_pass.set_vertex_buffer(1, texel_coords.buffer().slice(..));
        render_pass.draw(0..point_count, 0..1);
    }

    /// Create the bind group statically.
    fn create_bind_group_static(
        device: &wgpu::Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        camera: &CameraTransformBuffer,
        mask: &MaskTexture,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Selection Compute Renderer Bind Group"),
            layout: bind_group_layout,
            entries: &[
                // Camera transform uniform buffer
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera.buffer().as_entire_binding(),
                },
                // Mask texture
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(mask.view()),
                },
            ],
        })
    }
}
