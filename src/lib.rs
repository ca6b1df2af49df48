//! Interactive box and lasso selection for large point clouds.
//!
//! A [`SelectionSession`] turns pointer events into a screen space [`Region`] and, on release,
//! runs either the [`CpuSelector`](selection::CpuSelector) linear scan or the
//! [`GpuSelectionEngine`](selection::GpuSelectionEngine) mask pass over a [`PointSet`]. Every
//! pass repaints all point colors and publishes a [`SelectionResult`] to a
//! [`SelectionResultStore`].

mod buffer;
mod camera;
mod error;
mod gesture;
mod point_set;
mod region;
mod result;
mod session;

pub mod projector;
pub mod selection;
pub mod shader;

pub use buffer::*;
pub use camera::*;
pub use error::*;
pub use gesture::*;
pub use point_set::*;
pub use region::*;
pub use result::*;
pub use session::*;

pub use glam;
pub use wgpu;
