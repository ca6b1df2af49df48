use glam::*;

use crate::Error;

/// Convert a `0xRRGGBB` hex color to RGB in `[0, 1]`.
pub fn color_from_hex(hex: u32) -> Vec3 {
    vec3(
        ((hex >> 16) & 0xff) as f32,
        ((hex >> 8) & 0xff) as f32,
        (hex & 0xff) as f32,
    ) / 255.0
}

/// The colors painted by a selection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionColors {
    /// The color of points outside the region.
    pub base: Vec3,
    /// The color of points inside the region.
    pub selected: Vec3,
}

impl SelectionColors {
    /// Create new selection colors.
    pub const fn new(base: Vec3, selected: Vec3) -> Self {
        Self { base, selected }
    }

    /// Get the color for a point.
    pub fn pick(&self, selected: bool) -> Vec3 {
        if selected { self.selected } else { self.base }
    }
}

impl Default for SelectionColors {
    fn default() -> Self {
        Self::new(color_from_hex(0xF6F6F6), color_from_hex(0x86FFAF))
    }
}

/// A point cloud with parallel position and color sequences.
///
/// Positions are fixed after construction. Colors are rewritten by selection passes, which
/// also raise the dirty flag for the display side to re-upload them.
#[derive(Debug, Clone)]
pub struct PointSet {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    colors_dirty: bool,
}

impl PointSet {
    /// Create a new point set.
    pub fn new(positions: Vec<Vec3>, colors: Vec<Vec3>) -> Result<Self, Error> {
        if positions.len() != colors.len() {
            return Err(Error::PointSetLengthMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }

        Ok(Self {
            positions,
            colors,
            colors_dirty: true,
        })
    }

    /// Create a new point set with every point in the same color.
    pub fn with_uniform_color(positions: Vec<Vec3>, color: Vec3) -> Self {
        let colors = vec![color; positions.len()];
        Self {
            positions,
            colors,
            colors_dirty: true,
        }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if there are no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get the positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Get the colors.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Borrow the positions for reading and the colors for writing.
    ///
    /// This marks the colors as dirty.
    pub fn split_mut(&mut self) -> (&[Vec3], &mut [Vec3]) {
        self.colors_dirty = true;
        (&self.positions, &mut self.colors)
    }

    /// Check if the colors changed since the last [`PointSet::take_colors_dirty`].
    pub fn colors_dirty(&self) -> bool {
        self.colors_dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_colors_dirty(&mut self) -> bool {
        std::mem::take(&mut self.colors_dirty)
    }
}
