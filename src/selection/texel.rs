use glam::*;

use crate::{ResultReadbackBuffer, ResultTexture};

/// A result texel marker byte must exceed this to count as selected.
pub const SELECTED_BYTE_THRESHOLD: u8 = 128;

/// The default minimum side length of the result texture.
pub const DEFAULT_MIN_RESULT_SIDE: u32 = 1024;

/// The assignment of points to result texture texels.
///
/// The texture is square with a power of two side `s` where `s² >= count`. Point `i` owns the
/// texel `(i mod s, i div s)`. The layout is computed once per point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexelLayout {
    side: u32,
    count: usize,
}

impl TexelLayout {
    /// Create the layout for `count` points.
    ///
    /// The side is the next power of two of `⌈√count⌉`, but at least `min_side` rounded up to a
    /// power of two.
    pub fn new(count: usize, min_side: u32) -> Self {
        let mut side = ((count as f64).sqrt().ceil() as u32)
            .next_power_of_two()
            .max(min_side.max(1).next_power_of_two());
        while (side as u64 * side as u64) < count as u64 {
            side *= 2;
        }

        Self { side, count }
    }

    /// Get the side length of the result texture.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Get the number of points.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get the number of texture rows holding at least one point.
    pub fn rows(&self) -> u32 {
        self.count.div_ceil(self.side as usize) as u32
    }

    /// Get the texel of a point.
    pub fn texel(&self, index: usize) -> UVec2 {
        let side = self.side as usize;
        uvec2((index % side) as u32, (index / side) as u32)
    }

    /// Get the UV of the center of the texel of a point.
    pub fn texel_uv(&self, index: usize) -> Vec2 {
        (self.texel(index).as_vec2() + 0.5) / self.side as f32
    }

    /// Get the texel center UVs of every point in index order.
    pub fn texel_uvs(&self) -> Vec<Vec2> {
        (0..self.count).map(|i| self.texel_uv(i)).collect()
    }
}

/// The result texels read back from the [`ResultTexture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTexels {
    layout: TexelLayout,
    bytes_per_row: u32,
    bytes: Vec<u8>,
}

impl ResultTexels {
    /// Create new result texels.
    ///
    /// `bytes` holds [`TexelLayout::rows`] rows of `bytes_per_row` bytes each, RGBA8 texels.
    pub fn new(layout: TexelLayout, bytes_per_row: u32, bytes: Vec<u8>) -> Self {
        Self {
            layout,
            bytes_per_row,
            bytes,
        }
    }

    /// Create result texels from per-point selection flags, in the layout of a readback.
    pub fn from_selection(layout: TexelLayout, selected: impl IntoIterator<Item = bool>) -> Self {
        let bytes_per_row = ResultReadbackBuffer::padded_bytes_per_row(layout.side());
        let mut bytes = vec![0; bytes_per_row as usize * layout.rows() as usize];
        for (i, selected) in selected.into_iter().take(layout.count()).enumerate() {
            let offset = Self::offset(&layout, bytes_per_row, i);
            let marker = if selected { u8::MAX } else { 0 };
            bytes[offset..offset + 3].fill(marker);
            bytes[offset + 3] = u8::MAX;
        }

        Self::new(layout, bytes_per_row, bytes)
    }

    /// Get the layout.
    pub fn layout(&self) -> &TexelLayout {
        &self.layout
    }

    /// Get the raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Check if a point is selected.
    ///
    /// Missing texels count as unselected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.bytes
            .get(Self::offset(&self.layout, self.bytes_per_row, index))
            .is_some_and(|marker| *marker > SELECTED_BYTE_THRESHOLD)
    }

    /// Iterate over the selection of every point in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.layout.count()).map(|i| self.is_selected(i))
    }

    fn offset(layout: &TexelLayout, bytes_per_row: u32, index: usize) -> usize {
        let texel = layout.texel(index);
        texel.y as usize * bytes_per_row as usize
            + texel.x as usize * ResultTexture::TEXEL_SIZE as usize
    }
}
