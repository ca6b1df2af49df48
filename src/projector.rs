//! Mapping from world space to normalized device coordinates and screen pixels.
//!
//! Screen coordinates have their origin at the top left with Y growing downward, while NDC Y
//! grows upward, hence the flip in [`ndc_to_screen`] and [`screen_to_ndc`].
//!
//! Points behind the camera are not excluded: the perspective divide mirrors them, and they are
//! tested against the region like any other point. Non-finite coordinates compare false against
//! every bound and therefore never land inside a region.

use glam::*;

use crate::CameraTransform;

/// Project a world space point to NDC.
pub fn project(point: Vec3, camera: &CameraTransform) -> Vec2 {
    camera.view_proj.project_point3(point).truncate()
}

/// Convert NDC to screen pixel coordinates.
pub fn ndc_to_screen(ndc: Vec2, viewport: UVec2) -> Vec2 {
    let size = viewport.as_vec2();
    vec2(
        (ndc.x * 0.5 + 0.5) * size.x,
        (-(ndc.y * 0.5) + 0.5) * size.y,
    )
}

/// Convert screen pixel coordinates to NDC.
pub fn screen_to_ndc(screen: Vec2, viewport: UVec2) -> Vec2 {
    let size = viewport.as_vec2();
    vec2(screen.x / size.x * 2.0 - 1.0, -(screen.y / size.y) * 2.0 + 1.0)
}

/// Project a world space point directly to screen pixel coordinates.
pub fn project_to_screen(point: Vec3, camera: &CameraTransform, viewport: UVec2) -> Vec2 {
    ndc_to_screen(project(point, camera), viewport)
}
