use glam::*;

use wgpu::util::DeviceExt;

use crate::{BufferWrapper, PointSet};

/// The point positions vertex buffer.
#[derive(Debug, Clone)]
pub struct PointPositionsBuffer(wgpu::Buffer);

impl PointPositionsBuffer {
    /// The default usages.
    pub const DEFAULT_USAGES: wgpu::BufferUsages =
        wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST);

    /// The vertex buffer layout, position at shader location 0.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec3>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
    };

    /// Create a new point positions buffer.
    pub fn new(device: &wgpu::Device, positions: &[Vec3]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Positions Buffer"),
            contents: bytemuck::cast_slice(positions),
            usage: Self::DEFAULT_USAGES,
        });

        Self(buffer)
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.0.size() as usize / std::mem::size_of::<Vec3>()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BufferWrapper for PointPositionsBuffer {
    fn buffer(&self) -> &wgpu::Buffer {
        &self.0
    }
}

/// The per-point result texel coordinates vertex buffer.
///
/// Each entry is the UV of the center of the texel assigned to the point, see
/// [`TexelLayout`](crate::selection::TexelLayout).
#[derive(Debug, Clone)]
pub struct TexelCoordsBuffer(wgpu::Buffer);

impl TexelCoordsBuffer {
    /// The default usages.
    pub const DEFAULT_USAGES: wgpu::BufferUsages =
        wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST);

    /// The vertex buffer layout, texel UV at shader location 1.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec2>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![1 => Float32x2],
    };

    /// Create a new texel coordinates buffer.
    pub fn new(device: &wgpu::Device, texel_uvs: &[Vec2]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Texel Coords Buffer"),
            contents: bytemuck::cast_slice(texel_uvs),
            usage: Self::DEFAULT_USAGES,
        });

        Self(buffer)
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.0.size() as usize / std::mem::size_of::<Vec2>()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BufferWrapper for TexelCoordsBuffer {
    fn buffer(&self) -> &wgpu::Buffer {
        &self.0
    }
}

/// The point colors vertex buffer for the display pipeline.
#[derive(Debug, Clone)]
pub struct PointColorsBuffer(wgpu::Buffer);

impl PointColorsBuffer {
    /// The default usages.
    pub const DEFAULT_USAGES: wgpu::BufferUsages =
        wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST);

    /// Create a new point colors buffer.
    pub fn new(device: &wgpu::Device, colors: &[Vec3]) -> Self {
        Self::new_with_usages(device, colors, Self::DEFAULT_USAGES)
    }

    /// Create a new point colors buffer with custom usages.
    pub fn new_with_usages(
        device: &wgpu::Device,
        colors: &[Vec3],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Colors Buffer"),
            contents: bytemuck::cast_slice(colors),
            usage,
        });

        Self(buffer)
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.0.size() as usize / std::mem::size_of::<Vec3>()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Update the buffer.
    pub fn update(&self, queue: &wgpu::Queue, colors: &[Vec3]) {
        if colors.len() != self.len() {
            log::error!(
                "Point count mismatch, buffer has {}, but {} were provided",
                self.len(),
                colors.len()
            );
            return;
        }

        queue.write_buffer(&self.0, 0, bytemuck::cast_slice(colors));
    }

    /// Upload the colors of `points` if they changed, clearing its dirty flag.
    ///
    /// Returns whether an upload happened.
    pub fn update_if_dirty(&self, queue: &wgpu::Queue, points: &mut PointSet) -> bool {
        if !points.take_colors_dirty() {
            return false;
        }

        self.update(queue, points.colors());
        true
    }
}

impl BufferWrapper for PointColorsBuffer {
    fn buffer(&self) -> &wgpu::Buffer {
        &self.0
    }
}
