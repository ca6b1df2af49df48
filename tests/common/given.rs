use wgpu_point_selection::{
    Camera, CameraTransform, PointSet, Polygon, SelectionColors, glam::*,
};

pub const VIEWPORT: UVec2 = UVec2::new(256, 128);

/// A camera mapping world `(x, y, 0)` to screen pixel `(x, y)`.
pub fn pixel_camera(viewport: UVec2) -> CameraTransform {
    CameraTransform::new(Mat4::orthographic_rh(
        0.0,
        viewport.x as f32,
        viewport.y as f32,
        0.0,
        -1.0,
        1.0,
    ))
}

/// A perspective camera at `(0, 0, 3)` looking at the origin.
pub fn perspective_camera(viewport: UVec2) -> CameraTransform {
    CameraTransform::from_camera(
        &Camera::new(
            vec3(0.0, 0.0, 3.0),
            Vec3::ZERO,
            0.1..100.0,
            std::f32::consts::FRAC_PI_3,
        ),
        viewport,
    )
}

/// One point at the center of every `step`-th pixel of the viewport.
pub fn pixel_grid(viewport: UVec2, step: u32) -> PointSet {
    let positions = (0..viewport.y)
        .step_by(step as usize)
        .flat_map(|y| {
            (0..viewport.x)
                .step_by(step as usize)
                .map(move |x| vec3(x as f32 + 0.5, y as f32 + 0.5, 0.0))
        })
        .collect();

    PointSet::with_uniform_color(positions, SelectionColors::default().base)
}

/// Deterministic pseudo random points in the cube `[-1, 1]³`.
pub fn synthetic_cloud(count: usize, seed: u64) -> PointSet {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    };

    let positions = (0..count).map(|_| vec3(next(), next(), next())).collect();

    PointSet::with_uniform_color(positions, SelectionColors::default().base)
}

/// A concave star around `center`, vertices on integer pixels.
pub fn star_lasso(center: Vec2, outer: f32, inner: f32, tips: usize) -> Polygon {
    let vertices = (0..tips * 2)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / tips as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            (center + Vec2::from_angle(angle) * radius).round()
        })
        .collect();

    Polygon::new(vertices).expect("star polygon")
}

/// An L shaped concave polygon, vertices on integer pixels.
pub fn l_lasso() -> Polygon {
    Polygon::new(vec![
        vec2(16.0, 16.0),
        vec2(48.0, 16.0),
        vec2(48.0, 80.0),
        vec2(112.0, 80.0),
        vec2(112.0, 112.0),
        vec2(16.0, 112.0),
    ])
    .expect("L polygon")
}
