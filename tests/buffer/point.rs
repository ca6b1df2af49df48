use wgpu_point_selection::{
    BufferWrapper, PointColorsBuffer, PointPositionsBuffer, PointSet, TexelCoordsBuffer,
    glam::*, selection::TexelLayout,
};

use crate::common::{TestContext, given};

#[test]
fn test_point_positions_buffer_new_should_hold_every_point() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };
    let points = given::synthetic_cloud(100, 7);

    let buffer = PointPositionsBuffer::new(&ctx.device, points.positions());

    assert_eq!(buffer.len(), 100);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.buffer().size(), 100 * 12);
}

#[test]
fn test_texel_coords_buffer_new_should_hold_every_texel() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };
    let layout = TexelLayout::new(100, 1);

    let buffer = TexelCoordsBuffer::new(&ctx.device, &layout.texel_uvs());

    assert_eq!(buffer.len(), 100);
    assert_eq!(buffer.buffer().size(), 100 * 8);
}

#[test]
fn test_point_colors_buffer_update_if_dirty_should_upload_once() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };
    let mut points = PointSet::with_uniform_color(vec![Vec3::ZERO; 8], Vec3::ONE);
    let buffer = PointColorsBuffer::new(&ctx.device, points.colors());

    assert_eq!(buffer.len(), 8);
    assert!(buffer.update_if_dirty(&ctx.queue, &mut points));
    assert!(!buffer.update_if_dirty(&ctx.queue, &mut points));

    points.split_mut().1[0] = Vec3::X;

    assert!(buffer.update_if_dirty(&ctx.queue, &mut points));
    assert!(!points.colors_dirty());
}
