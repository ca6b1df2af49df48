use wgpu_point_selection::{
    ResultReadbackBuffer, ResultTexture, Texture,
    selection::{ResultTexels, TexelLayout},
    wgpu,
};

use crate::common::TestContext;

#[test]
fn test_result_readback_buffer_new_should_allocate_padded_rows() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };

    let buffer = ResultReadbackBuffer::new(&ctx.device, 16, 3);

    assert_eq!(buffer.bytes_per_row(), 256);
    assert_eq!(buffer.rows(), 3);
    assert_eq!(buffer.buffer().size(), 256 * 3);
}

#[test]
fn test_result_readback_buffer_download_should_return_occupied_rows() {
    let Some(ctx) = TestContext::try_new() else {
        return;
    };
    let layout = TexelLayout::new(40, 1);
    let texture = ResultTexture::new_with_usages(
        &ctx.device,
        layout.side(),
        ResultTexture::USAGES | wgpu::TextureUsages::COPY_DST,
    );
    let selected = (0..40).map(|i| i % 2 == 1).collect::<Vec<_>>();

    let texels = (0..layout.side() * layout.side())
        .flat_map(|i| {
            let marker = if selected.get(i as usize).copied().unwrap_or(false) {
                u8::MAX
            } else {
                0
            };
            [marker, marker, marker, u8::MAX]
        })
        .collect::<Vec<_>>();
    ctx.queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: texture.texture(),
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &texels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(layout.side() * ResultTexture::TEXEL_SIZE),
            rows_per_image: Some(layout.side()),
        },
        wgpu::Extent3d {
            width: layout.side(),
            height: layout.side(),
            depth_or_array_layers: 1,
        },
    );

    let buffer = ResultReadbackBuffer::new(&ctx.device, layout.side(), layout.rows());
    let bytes = pollster::block_on(buffer.download(&ctx.device, &ctx.queue, &texture))
        .expect("download");

    assert_eq!(bytes.len(), 256 * 5);
    let downloaded = ResultTexels::new(layout, buffer.bytes_per_row(), bytes);
    assert_eq!(downloaded.iter().collect::<Vec<_>>(), selected);
}
