use glam::*;

use crate::{BufferWrapper, CameraTransform};

/// The camera transform uniform buffer.
#[derive(Debug, Clone)]
pub struct CameraTransformBuffer(wgpu::Buffer);

impl CameraTransformBuffer {
    /// The default usages.
    pub const DEFAULT_USAGES: wgpu::BufferUsages =
        wgpu::BufferUsages::UNIFORM.union(wgpu::BufferUsages::COPY_DST);

    /// Create a new camera transform buffer.
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Transform Buffer"),
            size: std::mem::size_of::<CameraTransformPod>() as wgpu::BufferAddress,
            usage: Self::DEFAULT_USAGES,
            mapped_at_creation: false,
        });

        Self(buffer)
    }

    /// Update the camera transform buffer.
    pub fn update(&self, queue: &wgpu::Queue, camera: &CameraTransform, viewport: UVec2) {
        self.update_with_pod(queue, &CameraTransformPod::new(camera, viewport));
    }

    /// Update the camera transform buffer with [`CameraTransformPod`].
    pub fn update_with_pod(&self, queue: &wgpu::Queue, pod: &CameraTransformPod) {
        queue.write_buffer(&self.0, 0, bytemuck::bytes_of(pod));
    }
}

impl BufferWrapper for CameraTransformBuffer {
    fn buffer(&self) -> &wgpu::Buffer {
        &self.0
    }
}

impl From<CameraTransformBuffer> for wgpu::Buffer {
    fn from(wrapper: CameraTransformBuffer) -> Self {
        wrapper.0
    }
}

/// The POD representation of [`CameraTransform`] with the viewport size.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraTransformPod {
    pub view_proj: Mat4,
    pub viewport_size: Vec2,
    pub _padding: [u32; 2],
}

impl CameraTransformPod {
    /// Create a new camera transform POD.
    pub fn new(camera: &CameraTransform, viewport: UVec2) -> Self {
        Self {
            view_proj: camera.view_proj,
            viewport_size: viewport.as_vec2(),
            _padding: [0; 2],
        }
    }
}
