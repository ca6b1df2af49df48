use crate::{Error, ResultTexture, Texture};

/// The host-mappable buffer the [`ResultTexture`] is copied into.
///
/// Only the first `rows` rows of the texture are copied. Each row is padded to
/// [`wgpu::COPY_BYTES_PER_ROW_ALIGNMENT`].
#[derive(Debug, Clone)]
pub struct ResultReadbackBuffer {
    buffer: wgpu::Buffer,
    bytes_per_row: u32,
    rows: u32,
}

impl ResultReadbackBuffer {
    /// Create a new readback buffer for `rows` rows of a texture with the given side.
    pub fn new(device: &wgpu::Device, side: u32, rows: u32) -> Self {
        let bytes_per_row = Self::padded_bytes_per_row(side);
        let rows = rows.max(1);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Result Readback Buffer"),
            size: bytes_per_row as wgpu::BufferAddress * rows as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            bytes_per_row,
            rows,
        }
    }

    /// Get the row size in bytes for a texture with the given side, including padding.
    pub fn padded_bytes_per_row(side: u32) -> u32 {
        (side * ResultTexture::TEXEL_SIZE).next_multiple_of(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
    }

    /// Get the row size in bytes, including padding.
    pub fn bytes_per_row(&self) -> u32 {
        self.bytes_per_row
    }

    /// Get the number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Get the buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Download the result texture.
    pub async fn download(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture: &ResultTexture,
    ) -> Result<Vec<u8>, Error> {
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Result Readback Encoder"),
        });
        self.prepare_download(&mut encoder, texture);
        queue.submit(Some(encoder.finish()));

        self.map_download(device).await
    }

    /// Prepare for downloading the result texture.
    pub fn prepare_download(&self, encoder: &mut wgpu::CommandEncoder, texture: &ResultTexture) {
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: texture.texture(),
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &self.buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(self.bytes_per_row),
                    rows_per_image: Some(self.rows),
                },
            },
            wgpu::Extent3d {
                width: texture.side(),
                height: self.rows.min(texture.side()),
                depth_or_array_layers: 1,
            },
        );
    }

    /// Map the buffer to read the result texels.
    ///
    /// This blocks until the device has finished all submitted work.
    pub async fn map_download(&self, device: &wgpu::Device) -> Result<Vec<u8>, Error> {
        let (tx, rx) = oneshot::channel();
        let buffer_slice = self.buffer.slice(..);
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            if let Err(e) = tx.send(result) {
                log::error!("Error occurred while sending result readback: {e:?}");
            }
        });
        device.poll(wgpu::PollType::Wait)?;
        rx.await??;

        let bytes = buffer_slice.get_mapped_range().to_vec();
        self.buffer.unmap();

        Ok(bytes)
    }
}
