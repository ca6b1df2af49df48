use glam::*;

use crate::BufferWrapper;

/// The lasso mask triangle vertices buffer, in NDC.
///
/// The buffer only grows; [`MaskVertexBuffer::update`] reallocates when the vertices no longer
/// fit.
#[derive(Debug, Clone)]
pub struct MaskVertexBuffer {
    buffer: wgpu::Buffer,
    len: u32,
}

impl MaskVertexBuffer {
    /// The default usages.
    pub const DEFAULT_USAGES: wgpu::BufferUsages =
        wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST);

    /// The vertex buffer layout, NDC position at shader location 0.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec2>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    };

    /// The initial capacity in vertices.
    pub const INITIAL_CAPACITY: u32 = 3 * 256;

    /// Create a new mask vertex buffer.
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            buffer: Self::create_buffer(device, Self::INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// Get the number of vertices written by the last update.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Check if the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the capacity in vertices.
    pub fn capacity(&self) -> u32 {
        (self.buffer.size() / std::mem::size_of::<Vec2>() as wgpu::BufferAddress) as u32
    }

    /// Write the vertices, growing the buffer if needed.
    pub fn update(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, vertices: &[Vec2]) {
        let len = vertices.len() as u32;
        if len > self.capacity() {
            let capacity = len.next_power_of_two();
            log::debug!("Growing mask vertex buffer to {capacity} vertices");
            self.buffer = Self::create_buffer(device, capacity);
        }

        if len > 0 {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.len = len;
    }

    fn create_buffer(device: &wgpu::Device, capacity: u32) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Mask Vertex Buffer"),
            size: capacity as wgpu::BufferAddress * std::mem::size_of::<Vec2>() as wgpu::BufferAddress,
            usage: Self::DEFAULT_USAGES,
            mapped_at_creation: false,
        })
    }
}

impl BufferWrapper for MaskVertexBuffer {
    fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}
