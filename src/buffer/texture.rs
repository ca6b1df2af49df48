use glam::*;

/// A texture, including its view.
pub trait Texture {
    /// The texture.
    fn texture(&self) -> &wgpu::Texture;

    /// The view of the texture.
    fn view(&self) -> &wgpu::TextureView;

    /// The size of the texture.
    fn size(&self) -> UVec2 {
        uvec2(self.texture().width(), self.texture().height())
    }
}

/// The lasso mask texture, sized to the viewport.
///
/// Covered pixels are non-zero, uncovered pixels are cleared to transparent black.
#[derive(Debug, Clone)]
pub struct MaskTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl MaskTexture {
    /// The texture format.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// The texture usages.
    pub const USAGES: wgpu::TextureUsages = wgpu::TextureUsages::RENDER_ATTACHMENT
        .union(wgpu::TextureUsages::TEXTURE_BINDING)
        .union(wgpu::TextureUsages::COPY_SRC);

    /// Create a new mask texture.
    pub fn new(device: &wgpu::Device, size: UVec2) -> Self {
        let texture = Self::create_texture(device, size);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }

    /// Update the size of the mask texture.
    ///
    /// Returns whether the texture was recreated, in which case bind groups using it have to be
    /// recreated too.
    pub fn update_size(&mut self, device: &wgpu::Device, size: UVec2) -> bool {
        if self.size() == size.max(UVec2::ONE) {
            return false;
        }

        log::debug!("Resizing mask texture to {}x{}", size.x, size.y);
        self.texture = Self::create_texture(device, size);
        self.view = self
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        true
    }

    fn create_texture(device: &wgpu::Device, size: UVec2) -> wgpu::Texture {
        let size = size.max(UVec2::ONE);
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Mask Texture"),
            size: wgpu::Extent3d {
                width: size.x,
                height: size.y,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            view_formats: &[],
            format: Self::FORMAT,
            usage: Self::USAGES,
        })
    }
}

impl Texture for MaskTexture {
    fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// The square selection result texture holding one texel per point.
#[derive(Debug, Clone)]
pub struct ResultTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl ResultTexture {
    /// The texture format.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// The texture usages.
    pub const USAGES: wgpu::TextureUsages =
        wgpu::TextureUsages::RENDER_ATTACHMENT.union(wgpu::TextureUsages::COPY_SRC);

    /// The size of a texel in bytes.
    pub const TEXEL_SIZE: u32 = 4;

    /// Create a new result texture.
    pub fn new(device: &wgpu::Device, side: u32) -> Self {
        Self::new_with_usages(device, side, Self::USAGES)
    }

    /// Create a new result texture with custom usages.
    pub fn new_with_usages(device: &wgpu::Device, side: u32, usage: wgpu::TextureUsages) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Result Texture"),
            size: wgpu::Extent3d {
                width: side,
                height: side,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            view_formats: &[],
            format: Self::FORMAT,
            usage,
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }

    /// Get the side length.
    pub fn side(&self) -> u32 {
        self.texture.width()
    }
}

impl Texture for ResultTexture {
    fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}
