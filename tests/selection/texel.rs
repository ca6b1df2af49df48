use wgpu_point_selection::{
    ResultReadbackBuffer, glam::*,
    selection::{DEFAULT_MIN_RESULT_SIDE, ResultTexels, SELECTED_BYTE_THRESHOLD, TexelLayout},
};

#[test]
fn test_texel_layout_new_when_empty_should_use_min_side() {
    let layout = TexelLayout::new(0, DEFAULT_MIN_RESULT_SIDE);

    assert_eq!(layout.side(), 1024);
    assert_eq!(layout.count(), 0);
    assert_eq!(layout.rows(), 0);
}

#[test]
fn test_texel_layout_new_should_fit_every_point() {
    let cases = [
        (1, 1, 1),
        (2, 1, 2),
        (1000, 1, 32),
        (1024, 1, 32),
        (1025, 1, 64),
        (10, 100, 128),
        (1_000_000, DEFAULT_MIN_RESULT_SIDE, 1024),
        (1_048_577, DEFAULT_MIN_RESULT_SIDE, 2048),
    ];

    for (count, min_side, side) in cases {
        let layout = TexelLayout::new(count, min_side);

        assert_eq!(layout.side(), side, "count {count}, min side {min_side}");
        assert!(layout.side().is_power_of_two());
        assert!(layout.side() as usize * layout.side() as usize >= count);
    }
}

#[test]
fn test_texel_layout_rows_should_cover_only_occupied_rows() {
    assert_eq!(TexelLayout::new(1000, 1).rows(), 32);
    assert_eq!(TexelLayout::new(1025, 1).rows(), 17);
    assert_eq!(TexelLayout::new(5, DEFAULT_MIN_RESULT_SIDE).rows(), 1);
}

#[test]
fn test_texel_layout_texel_should_be_row_major() {
    let layout = TexelLayout::new(100, 8);

    assert_eq!(layout.side(), 16);
    assert_eq!(layout.texel(0), uvec2(0, 0));
    assert_eq!(layout.texel(15), uvec2(15, 0));
    assert_eq!(layout.texel(16), uvec2(0, 1));
    assert_eq!(layout.texel(99), uvec2(3, 6));
}

#[test]
fn test_texel_layout_texel_uv_should_point_at_texel_center() {
    let layout = TexelLayout::new(100, 8);

    assert_eq!(layout.texel_uv(0), vec2(0.5, 0.5) / 16.0);
    assert_eq!(layout.texel_uv(17), vec2(1.5, 1.5) / 16.0);
    assert_eq!(layout.texel_uvs().len(), 100);
    assert_eq!(layout.texel_uvs()[99], layout.texel_uv(99));
}

#[test]
fn test_result_texels_is_selected_should_require_marker_above_threshold() {
    let layout = TexelLayout::new(4, 2);
    let bytes_per_row = ResultReadbackBuffer::padded_bytes_per_row(layout.side());
    let mut bytes = vec![0; bytes_per_row as usize * layout.rows() as usize];
    let markers = [
        0,
        SELECTED_BYTE_THRESHOLD,
        SELECTED_BYTE_THRESHOLD + 1,
        u8::MAX,
    ];
    for (i, marker) in markers.into_iter().enumerate() {
        let texel = layout.texel(i);
        bytes[texel.y as usize * bytes_per_row as usize + texel.x as usize * 4] = marker;
    }

    let texels = ResultTexels::new(layout, bytes_per_row, bytes);

    assert_eq!(
        texels.iter().collect::<Vec<_>>(),
        vec![false, false, true, true]
    );
}

#[test]
fn test_result_texels_is_selected_when_texel_is_missing_should_return_false() {
    let layout = TexelLayout::new(4, 2);

    let texels = ResultTexels::new(layout, 256, Vec::new());

    assert!(texels.iter().all(|selected| !selected));
    assert!(!texels.is_selected(1000));
}

#[test]
fn test_result_texels_from_selection_should_skip_row_padding() {
    let layout = TexelLayout::new(40, 1);
    let selected = (0..40).map(|i| i % 3 == 0).collect::<Vec<_>>();

    let texels = ResultTexels::from_selection(layout, selected.iter().copied());

    assert_eq!(layout.side(), 8);
    assert_eq!(texels.bytes().len(), 256 * 5);
    assert_eq!(texels.iter().collect::<Vec<_>>(), selected);
}

#[test]
fn test_padded_bytes_per_row_should_align_to_copy_alignment() {
    assert_eq!(ResultReadbackBuffer::padded_bytes_per_row(1), 256);
    assert_eq!(ResultReadbackBuffer::padded_bytes_per_row(16), 256);
    assert_eq!(ResultReadbackBuffer::padded_bytes_per_row(64), 256);
    assert_eq!(ResultReadbackBuffer::padded_bytes_per_row(65), 512);
    assert_eq!(ResultReadbackBuffer::padded_bytes_per_row(1024), 4096);
}
