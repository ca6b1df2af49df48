use std::time::Instant;

use glam::*;

use crate::{
    CameraTransform, Error, PointSet, Polygon, Region, ScreenBox, SelectionColors,
    SelectionResult, projector,
};

/// A selector testing every point on the CPU.
///
/// Each pass is a single-threaded linear scan which projects every point and repaints it,
/// including the ones outside the region, so nothing accumulates across passes.
#[derive(Debug, Clone, Default)]
pub struct CpuSelector {
    /// The colors to paint.
    pub colors: SelectionColors,
}

impl CpuSelector {
    /// Create a new CPU selector.
    pub fn new(colors: SelectionColors) -> Self {
        Self { colors }
    }

    /// Select the points inside a region.
    pub fn select(
        &self,
        region: &Region,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> SelectionResult {
        match region {
            Region::Box(screen_box) => self.select_box(screen_box, points, camera, viewport),
            Region::Polygon(polygon) => self.select_polygon(polygon, points, camera, viewport),
        }
    }

    /// Select the points inside a box.
    pub fn select_box(
        &self,
        screen_box: &ScreenBox,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> SelectionResult {
        self.scan(points, camera, viewport, |p| screen_box.contains(p))
    }

    /// Select the points inside a polygon.
    pub fn select_polygon(
        &self,
        polygon: &Polygon,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> SelectionResult {
        self.scan(points, camera, viewport, |p| polygon.contains(p))
    }

    /// Select the points inside a polygon given as raw lasso vertices.
    ///
    /// Returns [`Error::DegenerateGesture`] without touching the colors if there are fewer than
    /// three vertices.
    pub fn select_lasso(
        &self,
        vertices: Vec<Vec2>,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<SelectionResult, Error> {
        let polygon = Polygon::new(vertices)?;
        Ok(self.select_polygon(&polygon, points, camera, viewport))
    }

    fn scan(
        &self,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
        contains: impl Fn(Vec2) -> bool,
    ) -> SelectionResult {
        let (positions, colors) = points.split_mut();

        let start = Instant::now();
        let mut selected_count = 0;
        for (pos, color) in positions.iter().zip(colors.iter_mut()) {
            let selected = contains(projector::project_to_screen(*pos, camera, viewport));
            *color = self.colors.pick(selected);
            selected_count += selected as usize;
        }
        let result = SelectionResult::new(selected_count, positions.len(), start.elapsed());

        log::info!(
            "CPU selection: {} of {} points in {:.2} ms",
            result.selected_count,
            result.total_count,
            result.elapsed_ms,
        );

        result
    }
}
