use std::time::Instant;

use glam::*;

use crate::{
    BufferWrapper, CameraTransform, CameraTransformBuffer, Error, MaskTexture,
    PointPositionsBuffer, PointSet, Polygon, Region, ResultReadbackBuffer, ResultTexture,
    SelectionColors, SelectionResult, TexelCoordsBuffer, Texture,
    selection::{
        DEFAULT_MIN_RESULT_SIDE, MaskRasterizer, ResultTexels, SelectionComputeRenderer,
        TexelLayout,
    },
};

/// A backend computing polygon selections for an initialized point set.
///
/// Resource acquisition and release are symmetric: [`SelectionBackend::initialize`] allocates
/// everything that depends on the point set, [`SelectionBackend::release`] frees it.
pub trait SelectionBackend {
    /// Allocate the resources for a point set, replacing any previous ones.
    fn initialize(&mut self, positions: &[Vec3]) -> Result<TexelLayout, Error>;

    /// Compute which of the initialized points project inside the polygon.
    fn compute(
        &mut self,
        polygon: &Polygon,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<ResultTexels, Error>;

    /// Release the resources of the point set.
    fn release(&mut self);
}

/// The configuration of a [`GpuSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuSelectorConfig {
    /// The minimum side length of the result texture.
    pub min_result_side: u32,
}

impl Default for GpuSelectorConfig {
    fn default() -> Self {
        Self {
            min_result_side: DEFAULT_MIN_RESULT_SIDE,
        }
    }
}

/// The point set resources of a [`GpuSelector`].
#[derive(Debug)]
struct PointResources {
    layout: TexelLayout,
    positions: PointPositionsBuffer,
    texel_coords: TexelCoordsBuffer,
    result: ResultTexture,
    readback: ResultReadbackBuffer,
}

impl PointResources {
    fn destroy(&self) {
        self.positions.buffer().destroy();
        self.texel_coords.buffer().destroy();
        self.result.texture().destroy();
        self.readback.buffer().destroy();
    }
}

/// The wgpu [`SelectionBackend`].
///
/// Each compute rasterizes the polygon into the mask, renders every point into the result
/// texture, then reads the occupied rows back. The readback blocks until the device is idle.
#[derive(Debug)]
pub struct GpuSelector {
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: GpuSelectorConfig,
    camera_buffer: CameraTransformBuffer,
    mask: MaskTexture,
    mask_rasterizer: MaskRasterizer,
    compute_renderer: SelectionComputeRenderer,
    points: Option<PointResources>,
}

impl GpuSelector {
    /// Create a new GPU selector.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, config: GpuSelectorConfig) -> Self {
        log::debug!("Creating camera transform buffer");
        let camera_buffer = CameraTransformBuffer::new(device);

        log::debug!("Creating mask texture");
        let mask = MaskTexture::new(device, UVec2::ONE);

        log::debug!("Creating mask rasterizer");
        let mask_rasterizer = MaskRasterizer::new(device);

        log::debug!("Creating selection compute renderer");
        let compute_renderer = SelectionComputeRenderer::new(device, &camera_buffer, &mask);

        log::info!("GPU selector created");

        Self {
            device: device.clone(),
            queue: queue.clone(),
            config,
            camera_buffer,
            mask,
            mask_rasterizer,
            compute_renderer,
            points: None,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GpuSelectorConfig {
        &self.config
    }

    /// Get the mask texture.
    pub fn mask(&self) -> &MaskTexture {
        &self.mask
    }

    /// Get the result texture, if initialized.
    pub fn result_texture(&self) -> Option<&ResultTexture> {
        self.points.as_ref().map(|points| &points.result)
    }

    /// Get the texel layout, if initialized.
    pub fn layout(&self) -> Option<&TexelLayout> {
        self.points.as_ref().map(|points| &points.layout)
    }
}

impl SelectionBackend for GpuSelector {
    fn initialize(&mut self, positions: &[Vec3]) -> Result<TexelLayout, Error> {
        let layout = TexelLayout::new(positions.len(), self.config.min_result_side);
        let max_side = self.device.limits().max_texture_dimension_2d;
        if layout.side() > max_side {
            return Err(Error::TooManyPoints {
                count: positions.len(),
                max_side,
            });
        }

        self.release();

        log::debug!("Creating point positions buffer");
        let positions_buffer = PointPositionsBuffer::new(&self.device, positions);

        log::debug!("Creating texel coords buffer");
        let texel_coords = TexelCoordsBuffer::new(&self.device, &layout.texel_uvs());

        log::debug!("Creating result texture");
        let result = ResultTexture::new(&self.device, layout.side());

        log::debug!("Creating result readback buffer");
        let readback = ResultReadbackBuffer::new(&self.device, layout.side(), layout.rows());

        log::info!(
            "GPU selector initialized with {} points, result texture {}x{}",
            layout.count(),
            layout.side(),
            layout.side(),
        );

        self.points = Some(PointResources {
            layout,
            positions: positions_buffer,
            texel_coords,
            result,
            readback,
        });

        Ok(layout)
    }

    fn compute(
        &mut self,
        polygon: &Polygon,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<ResultTexels, Error> {
        let points = self.points.as_ref().ok_or(Error::UninitializedSelector)?;
        let layout = points.layout;

        if layout.count() == 0 {
            return Ok(ResultTexels::new(
                layout,
                points.readback.bytes_per_row(),
                Vec::new(),
            ));
        }

        if self.mask.update_size(&self.device, viewport) {
            self.compute_renderer
                .update_bind_group(&self.device, &self.camera_buffer, &self.mask);
        }

        self.camera_buffer.update(&self.queue, camera, viewport);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("GPU Selector Command Encoder"),
            });

        self.mask_rasterizer.rasterize(
            &self.device,
            &self.queue,
            &mut encoder,
            polygon,
            viewport,
            &self.mask,
        );

        self.compute_renderer.render(
            &mut encoder,
            &points.result,
            &points.positions,
            &points.texel_coords,
            layout.count() as u32,
        );

        points.readback.prepare_download(&mut encoder, &points.result);

        self.queue.submit(Some(encoder.finish()));

        let bytes = pollster::block_on(points.readback.map_download(&self.device))?;

        Ok(ResultTexels::new(
            layout,
            points.readback.bytes_per_row(),
            bytes,
        ))
    }

    fn release(&mut self) {
        if let Some(points) = self.points.take() {
            log::debug!("Releasing GPU selector resources of {} points", points.layout.count());
            points.destroy();
        }
    }
}

impl Drop for GpuSelector {
    fn drop(&mut self) {
        self.release();
    }
}

/// The GPU selection engine, owning a [`SelectionBackend`] for one point set at a time.
///
/// [`GpuSelectionEngine::init_points`] must run again whenever the point set or its size
/// changes, since the texel layout depends on the point count.
#[derive(Debug)]
pub struct GpuSelectionEngine<B = GpuSelector> {
    /// The colors to paint.
    pub colors: SelectionColors,
    backend: B,
    layout: Option<TexelLayout>,
}

impl<B: SelectionBackend> GpuSelectionEngine<B> {
    /// Create a new engine.
    pub fn new(backend: B, colors: SelectionColors) -> Self {
        Self {
            colors,
            backend,
            layout: None,
        }
    }

    /// Get the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the texel layout, if initialized.
    pub fn layout(&self) -> Option<&TexelLayout> {
        self.layout.as_ref()
    }

    /// Check if a point set is initialized.
    pub fn is_initialized(&self) -> bool {
        self.layout.is_some()
    }

    /// Initialize the engine for a point set.
    pub fn init_points(&mut self, positions: &[Vec3]) -> Result<TexelLayout, Error> {
        self.layout = None;
        let layout = self.backend.initialize(positions)?;
        self.layout = Some(layout);
        Ok(layout)
    }

    /// Compute the raw result texels for a polygon.
    pub fn compute(
        &mut self,
        polygon: &Polygon,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<ResultTexels, Error> {
        if self.layout.is_none() {
            return Err(Error::UninitializedSelector);
        }

        self.backend.compute(polygon, camera, viewport)
    }

    /// Select the points inside a region.
    ///
    /// Fails without touching the colors if the engine is not initialized or was initialized
    /// for a different number of points.
    pub fn select(
        &mut self,
        region: &Region,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<SelectionResult, Error> {
        let layout = self.layout.ok_or(Error::UninitializedSelector)?;
        if layout.count() != points.len() {
            return Err(Error::ResourceSizeMismatch {
                expected: layout.count(),
                actual: points.len(),
            });
        }

        let polygon = region.to_polygon();

        let start = Instant::now();
        let texels = self.backend.compute(&polygon, camera, viewport)?;

        let (_, colors) = points.split_mut();
        let mut selected_count = 0;
        for (color, selected) in colors.iter_mut().zip(texels.iter()) {
            *color = self.colors.pick(selected);
            selected_count += selected as usize;
        }
        let result = SelectionResult::new(selected_count, colors.len(), start.elapsed());

        log::info!(
            "GPU selection: {} of {} points in {:.2} ms",
            result.selected_count,
            result.total_count,
            result.elapsed_ms,
        );

        Ok(result)
    }

    /// Release the resources of the point set.
    pub fn release(&mut self) {
        self.layout = None;
        self.backend.release();
    }
}
