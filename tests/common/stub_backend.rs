use wgpu_point_selection::{
    CameraTransform, Error, Polygon, glam::*,
    projector,
    selection::{ResultTexels, SelectionBackend, TexelLayout},
};

/// A [`SelectionBackend`] computing the selection on the CPU, counting calls.
#[derive(Debug, Default)]
pub struct StubBackend {
    pub positions: Option<Vec<Vec3>>,
    pub initialize_calls: usize,
    pub compute_calls: usize,
    pub release_calls: usize,
}

impl SelectionBackend for StubBackend {
    fn initialize(&mut self, positions: &[Vec3]) -> Result<TexelLayout, Error> {
        self.initialize_calls += 1;
        self.positions = Some(positions.to_vec());
        Ok(TexelLayout::new(positions.len(), 1))
    }

    fn compute(
        &mut self,
        polygon: &Polygon,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<ResultTexels, Error> {
        let positions = self.positions.as_ref().ok_or(Error::UninitializedSelector)?;
        self.compute_calls += 1;

        Ok(ResultTexels::from_selection(
            TexelLayout::new(positions.len(), 1),
            positions
                .iter()
                .map(|p| polygon.contains(projector::project_to_screen(*p, camera, viewport))),
        ))
    }

    fn release(&mut self) {
        self.release_calls += 1;
        self.positions = None;
    }
}
