use wgpu_point_selection::{MaskTexture, ResultTexture, Texture, glam::*};

use crate::common::{TestContext, given};

#[test]
fn test_mask_texture_update_size_should_recreate_only_on_change() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };
    let mut mask = MaskTexture::new(&ctx.device, given::VIEWPORT);

    assert_eq!(mask.size(), given::VIEWPORT);
    assert!(!mask.update_size(&ctx.device, given::VIEWPORT));
    assert!(mask.update_size(&ctx.device, uvec2(64, 32)));
    assert_eq!(mask.size(), uvec2(64, 32));
}

#[test]
fn test_mask_texture_when_viewport_is_zero_should_clamp_to_one_pixel() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };
    let mut mask = MaskTexture::new(&ctx.device, UVec2::ZERO);

    assert_eq!(mask.size(), UVec2::ONE);
    assert!(!mask.update_size(&ctx.device, UVec2::ZERO));
}

#[test]
fn test_result_texture_new_should_be_square() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };

    let texture = ResultTexture::new(&ctx.device, 64);

    assert_eq!(texture.side(), 64);
    assert_eq!(texture.size(), uvec2(64, 64));
    assert_eq!(texture.texture().format(), ResultTexture::FORMAT);
}
