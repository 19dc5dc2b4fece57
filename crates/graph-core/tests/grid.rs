// File: crates/graph-core/tests/grid.rs
// Purpose: Axis placement, grid line counts and boundary inclusion.

use graph_core::grid::{axis_count, unit_offsets};
use graph_core::{Canvas2D, Color, DrawCall, GridRenderer, RecordingCanvas, Viewport};

const AXIS: Color = Color::BLACK;

fn faint() -> Color {
    Color::from_argb(26, 0, 0, 0)
}

fn draw(scale: f64) -> (RecordingCanvas, graph_core::GridSummary, Viewport) {
    let vp = Viewport::from_scale(scale).unwrap();
    let mut canvas = RecordingCanvas::new();
    canvas.resize(vp.width_px, vp.height_px).unwrap();
    let summary = GridRenderer::new(vp, AXIS, 2.0, faint(), 0.5).draw(&mut canvas);
    (canvas, summary, vp)
}

#[test]
fn scale_50_draws_101_lines_each_way() {
    let (canvas, summary, _) = draw(50.0);
    assert_eq!(axis_count(2500.0, 50.0), 50);
    assert_eq!(summary.vertical, 101);
    assert_eq!(summary.horizontal, 101);
    assert_eq!(canvas.lines_with_color(faint()).len(), 202);
}

#[test]
fn line_count_is_two_axis_counts_plus_one() {
    for scale in [1.0, 3.0, 12.5, 20.0, 37.5, 64.0] {
        let (_, summary, vp) = draw(scale);
        let expected = 2 * (vp.center_x() / scale).floor() as usize + 1;
        assert_eq!(summary.vertical, expected, "scale {scale}");
        assert_eq!(summary.horizontal, expected, "scale {scale}");
    }
}

#[test]
fn vertical_lines_sit_on_unit_multiples_from_left_edge_to_right_edge() {
    let (canvas, _, vp) = draw(50.0);
    let verticals: Vec<f64> = canvas
        .lines_with_color(faint())
        .into_iter()
        .filter(|(from, to)| from.x == to.x)
        .map(|(from, _)| from.x)
        .collect();
    assert_eq!(verticals.first().copied(), Some(0.0));
    assert_eq!(verticals.last().copied(), Some(vp.width_px as f64));
    assert!(verticals.contains(&vp.center_x()), "a grid line runs through the origin");
    for pair in verticals.windows(2) {
        assert_eq!(pair[1] - pair[0], 50.0);
    }
}

#[test]
fn grid_lines_span_the_full_viewport() {
    let (canvas, _, vp) = draw(10.0);
    for (from, to) in canvas.lines_with_color(faint()) {
        if from.x == to.x {
            assert_eq!((from.y, to.y), (0.0, vp.height_px as f64));
        } else {
            assert_eq!(from.y, to.y);
            assert_eq!((from.x, to.x), (0.0, vp.width_px as f64));
        }
    }
}

#[test]
fn axes_come_first_bold_and_through_origin() {
    let (canvas, _, vp) = draw(50.0);
    let lines: Vec<_> = canvas.lines().collect();
    let (x_from, x_to, x_color, x_weight) = lines[0];
    let (y_from, y_to, y_color, y_weight) = lines[1];

    assert_eq!((x_color, x_weight), (AXIS, 2.0));
    assert_eq!((y_color, y_weight), (AXIS, 2.0));
    assert_eq!((x_from.x, x_from.y, x_to.x, x_to.y), (0.0, 2500.0, vp.width_px as f64, 2500.0));
    assert_eq!((y_from.x, y_from.y, y_to.x, y_to.y), (2500.0, 0.0, 2500.0, vp.height_px as f64));

    assert!(lines[2..].iter().all(|l| l.2 == faint() && l.3 == 0.5));
}

#[test]
fn unit_offsets_are_symmetric_about_center() {
    let offsets: Vec<f64> = unit_offsets(250.0, 50.0).collect();
    assert_eq!(offsets, vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0]);
}

#[test]
fn grid_only_strokes_lines() {
    let (canvas, _, _) = draw(5.0);
    assert!(canvas.calls.iter().skip(1).all(|c| matches!(c, DrawCall::Line { .. })));
}
