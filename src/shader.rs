//! WGSL shader sources.
//!
//! See the documentation of each constant for the source.

/// The lasso mask rasterization shader, used by
/// [`MaskRasterizer`](crate::selection::MaskRasterizer).
#[doc = concat!("```wgsl\n", include_str!("shader/mask.wgsl"), "\n```")]
pub const MASK: &str = include_str!("shader/mask.wgsl");

/// The per-point selection shader, used by
/// [`SelectionComputeRenderer`](crate::selection::SelectionComputeRenderer).
#[doc = concat!("```wgsl\n", include_str!("shader/selection.wgsl"), "\n```")]
pub const SELECTION: &str = include_str!("shader/selection.wgsl");
