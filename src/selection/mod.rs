//! The selection strategies.
//!
//! - [`CpuSelector`] projects and tests every point on the CPU, against a box or a polygon.
//! - [`GpuSelectionEngine`] rasterizes the polygon into a mask and tests every point on the
//!   GPU through a [`SelectionBackend`], [`GpuSelector`] being the wgpu one.

mod cpu;
mod gpu;
mod mask_rasterizer;
mod selection_compute;
mod texel;

pub use cpu::*;
pub use gpu::*;
pub use mask_rasterizer::*;
pub use selection_compute::*;
pub use texel::*;
