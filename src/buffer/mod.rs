mod camera;
mod mask;
mod point;
mod readback;
mod texture;

pub use camera::*;
pub use mask::*;
pub use point::*;
pub use readback::*;
pub use texture::*;

/// A wrapper around a [`wgpu::Buffer`].
pub trait BufferWrapper {
    /// Get the buffer.
    fn buffer(&self) -> &wgpu::Buffer;
}
