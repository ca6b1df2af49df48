use wgpu_point_selection::{Error, PointSet, SelectionColors, color_from_hex, glam::*};

#[test]
fn test_color_from_hex_should_split_channels() {
    assert_eq!(color_from_hex(0xFF0000), Vec3::X);
    assert_eq!(color_from_hex(0x00FF00), Vec3::Y);
    assert_eq!(color_from_hex(0x0000FF), Vec3::Z);
    assert_eq!(color_from_hex(0x000000), Vec3::ZERO);
}

#[test]
fn test_selection_colors_pick_should_return_matching_color() {
    let colors = SelectionColors::new(Vec3::ZERO, Vec3::ONE);

    assert_eq!(colors.pick(true), Vec3::ONE);
    assert_eq!(colors.pick(false), Vec3::ZERO);
}

#[test]
fn test_selection_colors_default_should_be_light_gray_and_green() {
    let colors = SelectionColors::default();

    assert_eq!(colors.base, color_from_hex(0xF6F6F6));
    assert_eq!(colors.selected, color_from_hex(0x86FFAF));
    assert_ne!(colors.base, colors.selected);
}

#[test]
fn test_point_set_new_when_lengths_differ_should_return_error() {
    let result = PointSet::new(vec![Vec3::ZERO; 3], vec![Vec3::ONE; 2]);

    assert!(matches!(
        result,
        Err(Error::PointSetLengthMismatch {
            positions: 3,
            colors: 2
        })
    ));
}

#[test]
fn test_point_set_new_should_keep_parallel_sequences() {
    let positions = vec![Vec3::X, Vec3::Y];
    let colors = vec![Vec3::ONE, Vec3::ZERO];

    let points = PointSet::new(positions.clone(), colors.clone()).expect("point set");

    assert_eq!(points.len(), 2);
    assert!(!points.is_empty());
    assert_eq!(points.positions(), positions.as_slice());
    assert_eq!(points.colors(), colors.as_slice());
}

#[test]
fn test_point_set_with_uniform_color_should_fill_colors() {
    let points = PointSet::with_uniform_color(vec![Vec3::ZERO; 5], Vec3::ONE);

    assert_eq!(points.colors(), &[Vec3::ONE; 5]);
}

#[test]
fn test_point_set_when_empty_should_report_empty() {
    let points = PointSet::with_uniform_color(Vec::new(), Vec3::ONE);

    assert!(points.is_empty());
    assert_eq!(points.len(), 0);
}

#[test]
fn test_point_set_split_mut_should_mark_colors_dirty() {
    let mut points = PointSet::with_uniform_color(vec![Vec3::ZERO; 2], Vec3::ONE);
    assert!(points.take_colors_dirty());
    assert!(!points.colors_dirty());

    let (positions, colors) = points.split_mut();
    assert_eq!(positions.len(), colors.len());
    colors[1] = Vec3::ZERO;

    assert!(points.colors_dirty());
    assert_eq!(points.colors()[1], Vec3::ZERO);
    assert!(points.take_colors_dirty());
    assert!(!points.take_colors_dirty());
}
