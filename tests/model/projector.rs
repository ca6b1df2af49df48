use wgpu_point_selection::{CameraTransform, Camera, CameraTrait, glam::*, projector};

use crate::common::given;

#[test]
fn test_ndc_to_screen_should_flip_y_and_scale_to_viewport() {
    let viewport = uvec2(800, 600);

    assert_eq!(projector::ndc_to_screen(vec2(-1.0, 1.0), viewport), vec2(0.0, 0.0));
    assert_eq!(projector::ndc_to_screen(vec2(1.0, -1.0), viewport), vec2(800.0, 600.0));
    assert_eq!(projector::ndc_to_screen(Vec2::ZERO, viewport), vec2(400.0, 300.0));
    assert_eq!(projector::ndc_to_screen(vec2(0.5, 0.5), viewport), vec2(600.0, 150.0));
}

#[test]
fn test_screen_to_ndc_should_invert_ndc_to_screen() {
    let viewport = uvec2(640, 480);

    for screen in [vec2(0.0, 0.0), vec2(640.0, 480.0), vec2(160.0, 360.0)] {
        let ndc = projector::screen_to_ndc(screen, viewport);
        let back = projector::ndc_to_screen(ndc, viewport);
        assert!(back.abs_diff_eq(screen, 1e-3), "{screen} -> {ndc} -> {back}");
    }
}

#[test]
fn test_project_when_camera_is_identity_should_return_xy() {
    let ndc = projector::project(vec3(0.25, -0.5, 0.5), &CameraTransform::default());

    assert_eq!(ndc, vec2(0.25, -0.5));
}

#[test]
fn test_project_to_screen_when_camera_is_pixel_camera_should_return_world_xy() {
    let viewport = uvec2(256, 128);
    let camera = given::pixel_camera(viewport);

    let screen = projector::project_to_screen(vec3(10.5, 100.5, 0.0), &camera, viewport);

    assert!(screen.abs_diff_eq(vec2(10.5, 100.5), 1e-3), "{screen}");
}

#[test]
fn test_project_when_point_is_behind_camera_should_mirror_it() {
    let camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z, 0.1..100.0, std::f32::consts::FRAC_PI_2);
    let transform = CameraTransform::from_view_projection(camera.view(), camera.projection(1.0));

    let front = projector::project(vec3(1.0, 0.0, -2.0), &transform);
    let behind = projector::project(vec3(1.0, 0.0, 2.0), &transform);

    assert!(front.x > 0.0);
    assert!(behind.is_finite());
    assert!(behind.x < 0.0);
}

#[test]
fn test_project_when_point_is_at_camera_should_not_be_finite() {
    let camera = given::perspective_camera(given::VIEWPORT);

    let ndc = projector::project(vec3(0.0, 0.0, 3.0), &camera);

    assert!(!ndc.is_finite());
}
