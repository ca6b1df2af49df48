use std::ops::Range;

use glam::*;

/// A trait for cameras that can produce view and projection matrices.
pub trait CameraTrait {
    /// Get the view matrix.
    fn view(&self) -> Mat4;

    /// Get the projection matrix.
    fn projection(&self, aspect_ratio: f32) -> Mat4;
}

/// A perspective camera looking at a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The point the camera looks at.
    pub target: Vec3,
    /// The z range of the camera.
    pub z: Range<f32>,
    /// The vertical FOV.
    pub vertical_fov: f32,
}

impl Camera {
    /// Up direction.
    pub const UP: Vec3 = Vec3::Y;

    /// Create a new camera.
    pub fn new(pos: Vec3, target: Vec3, z: Range<f32>, vertical_fov: f32) -> Self {
        Self {
            pos,
            target,
            z,
            vertical_fov,
        }
    }
}

impl CameraTrait for Camera {
    fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.target, Self::UP)
    }

    fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.vertical_fov, aspect_ratio, self.z.start, self.z.end)
    }
}

/// A snapshot of the projection × view transform.
///
/// Taken once when a gesture ends and used unchanged for the whole selection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// The combined projection × view matrix.
    pub view_proj: Mat4,
}

impl CameraTransform {
    /// Create a new camera transform from a combined matrix.
    pub const fn new(view_proj: Mat4) -> Self {
        Self { view_proj }
    }

    /// Create a new camera transform from separate view and projection matrices.
    pub fn from_view_projection(view: Mat4, projection: Mat4) -> Self {
        Self::new(projection * view)
    }

    /// Snapshot a camera for the given viewport size.
    pub fn from_camera(camera: &impl CameraTrait, viewport: UVec2) -> Self {
        let aspect_ratio = viewport.x as f32 / viewport.y.max(1) as f32;
        Self::from_view_projection(camera.view(), camera.projection(aspect_ratio))
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}
