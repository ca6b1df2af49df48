use glam::*;

use crate::{
    CameraTransform, Error, GestureController, Modifiers, PointSet, PointerButton, Region,
    SelectionColors, SelectionResult, SelectionResultStore,
    selection::{CpuSelector, GpuSelectionEngine, GpuSelector, SelectionBackend},
};

/// The selector run when a gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectorKind {
    #[default]
    Cpu,
    Gpu,
}

/// A selection session wiring pointer events to the active selector and the result store.
///
/// Selection runs synchronously inside [`SelectionSession::pointer_up`]. Recoverable errors,
/// i.e. a degenerate gesture, an uninitialized GPU engine or a point count mismatch, are logged
/// and leave the colors and the published result unchanged.
#[derive(Debug)]
pub struct SelectionSession<B = GpuSelector> {
    /// The gesture state machine.
    pub gesture: GestureController,
    /// The selector to run on release.
    pub selector: SelectorKind,
    cpu: CpuSelector,
    gpu: Option<GpuSelectionEngine<B>>,
    results: SelectionResultStore,
}

impl<B: SelectionBackend> SelectionSession<B> {
    /// Create a new session with only the CPU selector.
    pub fn new(gesture: GestureController, colors: SelectionColors) -> Self {
        Self {
            gesture,
            selector: SelectorKind::Cpu,
            cpu: CpuSelector::new(colors),
            gpu: None,
            results: SelectionResultStore::new(),
        }
    }

    /// Attach a GPU engine and make it the active selector.
    pub fn with_gpu(mut self, engine: GpuSelectionEngine<B>) -> Self {
        self.gpu = Some(engine);
        self.selector = SelectorKind::Gpu;
        self
    }

    /// Get the result store.
    pub fn results(&self) -> &SelectionResultStore {
        &self.results
    }

    /// Get the CPU selector.
    pub fn cpu(&self) -> &CpuSelector {
        &self.cpu
    }

    /// Get the GPU engine, if attached.
    pub fn gpu(&self) -> Option<&GpuSelectionEngine<B>> {
        self.gpu.as_ref()
    }

    /// Initialize the GPU engine for a newly loaded point set.
    ///
    /// Does nothing without a GPU engine.
    pub fn init_points(&mut self, points: &PointSet) -> Result<(), Error> {
        if let Some(gpu) = &mut self.gpu {
            gpu.init_points(points.positions())?;
        }
        Ok(())
    }

    /// Release the GPU resources of the current point set.
    pub fn release(&mut self) {
        if let Some(gpu) = &mut self.gpu {
            gpu.release();
        }
    }

    /// Handle a pointer press, returning whether a gesture started.
    pub fn pointer_down(&mut self, pos: Vec2, button: PointerButton, modifiers: Modifiers) -> bool {
        self.gesture.pointer_down(pos, button, modifiers)
    }

    /// Handle a pointer move.
    pub fn pointer_move(&mut self, pos: Vec2) {
        self.gesture.pointer_move(pos);
    }

    /// Handle a pointer release, running the active selector on the gesture's region.
    ///
    /// Returns the published result, or [`None`] if nothing changed.
    pub fn pointer_up(
        &mut self,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Option<SelectionResult> {
        let region = self.gesture.pointer_up()?;

        match self.run(&region, points, camera, viewport) {
            Ok(result) => {
                self.results.publish(result);
                Some(result)
            }
            Err(e) => {
                log::warn!("Selection discarded: {e}");
                None
            }
        }
    }

    fn run(
        &mut self,
        region: &Region,
        points: &mut PointSet,
        camera: &CameraTransform,
        viewport: UVec2,
    ) -> Result<SelectionResult, Error> {
        match self.selector {
            SelectorKind::Cpu => Ok(self.cpu.select(region, points, camera, viewport)),
            SelectorKind::Gpu => self
                .gpu
                .as_mut()
                .ok_or(Error::UninitializedSelector)?
                .select(region, points, camera, viewport),
        }
    }
}
