// File: crates/graph-core/tests/coordinate.rs
// Purpose: Viewport sizing and the math <-> pixel transform.

use graph_core::{CoordinateSpace, GraphError, Viewport};

const SCALES: [f64; 7] = [0.5, 1.0, 7.0, 12.3, 25.0, 50.0, 120.0];

#[test]
fn scale_50_gives_5000_square_canvas() {
    let vp = Viewport::from_scale(50.0).expect("valid scale");
    assert_eq!(vp.width_px, 5000);
    assert_eq!(vp.height_px, 5000);
    assert_eq!(vp.center_x(), 2500.0);
    assert_eq!(vp.center_y(), 2500.0);
}

#[test]
fn canvas_is_always_square_and_100_units_wide() {
    for &scale in &SCALES {
        let vp = Viewport::from_scale(scale).unwrap();
        assert_eq!(vp.width_px, vp.height_px, "scale {scale}");
        assert_eq!(vp.width_px, (100.0 * scale).floor() as u32, "scale {scale}");
    }
}

#[test]
fn origin_maps_to_center_for_every_scale() {
    for &scale in &SCALES {
        let vp = Viewport::from_scale(scale).unwrap();
        let space = vp.space();
        assert_eq!(space.to_pixel_y(0.0), vp.center_y());
        assert_eq!(space.to_pixel(0.0, 0.0), vp.origin());
    }
}

#[test]
fn to_pixel_y_round_trips() {
    for &scale in &SCALES {
        let space = Viewport::from_scale(scale).unwrap().space();
        for &y in &[-1.0e6, -314.5, -1.0, 0.0, 0.25, 42.0, 9.75e5] {
            let py = space.to_pixel_y(y);
            let back = (py - space.center_y) * -scale;
            assert!((back - y).abs() <= 1e-9 * y.abs().max(1.0), "scale {scale} y {y} back {back}");
            assert!((space.from_pixel_y(py) - y).abs() <= 1e-9 * y.abs().max(1.0));
        }
    }
}

#[test]
fn larger_values_move_up_the_screen() {
    let space = CoordinateSpace::new(10.0, 500.0, 500.0);
    assert!(space.to_pixel_y(100.0) < space.to_pixel_y(0.0));
    assert!(space.to_pixel_y(-100.0) > space.to_pixel_y(0.0));
}

#[test]
fn columns_map_to_math_x_around_center() {
    let space = Viewport::from_scale(50.0).unwrap().space();
    assert_eq!(space.to_pixel_x(0), 0.0);
    assert_eq!(space.to_pixel_x(4999), 4999.0);
    assert_eq!(space.math_x(0.0), -50.0);
    assert_eq!(space.math_x(2500.0), 0.0);
    assert_eq!(space.math_x(2550.0), 1.0);
    assert_eq!(space.math_y(2450.0), 1.0);
    let p = space.to_pixel(1.0, 1.0);
    assert_eq!((p.x, p.y), (2550.0, 2450.0));
}

#[test]
fn non_positive_or_non_finite_scale_is_rejected() {
    for scale in [0.0, -1.0, -50.0, f64::NAN, f64::INFINITY] {
        match Viewport::from_scale(scale) {
            Err(GraphError::InvalidConfiguration { .. }) => {}
            other => panic!("scale {scale}: expected InvalidConfiguration, got {other:?}"),
        }
    }
}

#[test]
fn fractional_canvas_side_truncates() {
    // 100 * 12.125 = 1212.5 exactly
    let vp = Viewport::from_scale(12.125).unwrap();
    assert_eq!(vp.width_px, 1212);
    assert_eq!(vp.height_px, 1212);
    assert_eq!(vp.center_x(), 606.0);
    assert_eq!(vp.origin().y, 606.0);

    let vp = Viewport::from_scale(0.999).unwrap();
    assert_eq!(vp.width_px, 99);
}

#[test]
fn large_scales_are_valid_viewports() {
    let vp = Viewport::from_scale(250.0).unwrap();
    assert_eq!(vp.width_px, 25_000);
    let vp = Viewport::from_scale(1.0e6).unwrap();
    assert_eq!(vp.width_px, 100_000_000);
}

#[test]
fn vanishing_canvas_is_rejected() {
    assert!(matches!(Viewport::from_scale(0.001), Err(GraphError::InvalidConfiguration { .. })));
}

#[test]
fn centered_scroll_puts_origin_in_middle_of_container() {
    let vp = Viewport::from_scale(50.0).unwrap();
    assert_eq!(vp.centered_scroll(540, 540), (2230, 2230));

    // container bigger than the canvas: no scroll
    let small = Viewport::from_scale(2.0).unwrap();
    assert_eq!(small.centered_scroll(540, 540), (0, 0));
}

#[test]
fn clamp_scroll_keeps_window_on_canvas() {
    let vp = Viewport::from_scale(10.0).unwrap(); // 1000 px
    assert_eq!(vp.clamp_scroll(-20, 5000, 540, 540), (0, 460));
    assert_eq!(vp.clamp_scroll(100, 200, 540, 540), (100, 200));
}
