use bitflags::bitflags;
use glam::*;

use crate::{MIN_POLYGON_VERTICES, Polygon, Region, ScreenBox};

bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// The shape a gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureMode {
    /// A box spanning the press position and the latest pointer position.
    Box,
    /// A free-form polygon through every pointer position.
    #[default]
    Lasso,
}

/// The state of a [`GestureController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureState {
    Idle,
    Dragging,
}

/// The input state machine turning pointer events into a selection region.
///
/// `Idle → Dragging` on a primary press with [`GestureController::modifier`] held,
/// `Dragging → Idle` on release.
#[derive(Debug, Clone)]
pub struct GestureController {
    /// The shape produced on release.
    pub mode: GestureMode,
    /// The modifiers that must be held to start a gesture.
    pub modifier: Modifiers,
    state: GestureState,
    path: Vec<Vec2>,
}

impl GestureController {
    /// Create a new controller requiring [`Modifiers::SHIFT`].
    pub fn new(mode: GestureMode) -> Self {
        Self {
            mode,
            modifier: Modifiers::SHIFT,
            state: GestureState::Idle,
            path: Vec::new(),
        }
    }

    /// Get the state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Check if a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    /// Get the accumulated screen points of the current gesture.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Handle a pointer press.
    ///
    /// Returns whether a gesture started. A press while already dragging is ignored.
    pub fn pointer_down(&mut self, pos: Vec2, button: PointerButton, modifiers: Modifiers) -> bool {
        if self.is_dragging() || button != PointerButton::Primary || !modifiers.contains(self.modifier)
        {
            return false;
        }

        self.state = GestureState::Dragging;
        self.path.clear();
        self.path.push(pos);
        true
    }

    /// Handle a pointer move.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if self.is_dragging() {
            self.path.push(pos);
        }
    }

    /// Handle a pointer release.
    ///
    /// Returns the region of the gesture, or [`None`] if no gesture was in progress or it had
    /// fewer than [`MIN_POLYGON_VERTICES`] points. The controller is idle afterwards.
    pub fn pointer_up(&mut self) -> Option<Region> {
        if !self.is_dragging() {
            return None;
        }

        self.state = GestureState::Idle;
        let path = std::mem::take(&mut self.path);

        if path.len() < MIN_POLYGON_VERTICES {
            log::debug!("Discarding gesture with {} points", path.len());
            return None;
        }

        Self::region_from_path(self.mode, path)
    }

    /// Abort the current gesture without producing a region.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
        self.path.clear();
    }

    /// Get the region the current gesture would produce if released now.
    pub fn preview_region(&self) -> Option<Region> {
        if !self.is_dragging() || self.path.len() < MIN_POLYGON_VERTICES {
            return None;
        }

        Self::region_from_path(self.mode, self.path.clone())
    }

    fn region_from_path(mode: GestureMode, path: Vec<Vec2>) -> Option<Region> {
        match mode {
            GestureMode::Box => {
                let start = *path.first()?;
                let end = *path.last()?;
                Some(Region::Box(ScreenBox::from_corners(start, end)))
            }
            GestureMode::Lasso => Polygon::new(path).ok().map(Region::Polygon),
        }
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureMode::default())
    }
}
