// File: crates/graph-core/tests/host.rs
// Purpose: Slot text parsing and trigger-driven sessions.

use graph_core::host::{parse_coefficient, parse_color, parse_weight};
use graph_core::types::{DEFAULT_SCALE, DEFAULT_STROKE_WEIGHT};
use graph_core::{
    Color, FunctionKind, GraphEngine, GraphError, GraphSession, RecordingCanvas, SkiaCanvas, SlotInput, Theme,
    Trigger,
};

#[test]
fn coefficients_follow_form_semantics() {
    assert_eq!(parse_coefficient("").unwrap(), 0.0);
    assert_eq!(parse_coefficient("   ").unwrap(), 0.0);
    assert_eq!(parse_coefficient(" -2.5 ").unwrap(), -2.5);
    assert_eq!(parse_coefficient("1e3").unwrap(), 1000.0);
    assert!(matches!(parse_coefficient("two"), Err(GraphError::InvalidCoefficient { .. })));
    assert!(matches!(parse_coefficient("1,5"), Err(GraphError::InvalidCoefficient { .. })));
}

#[test]
fn colors_accept_short_and_long_hex() {
    assert_eq!(parse_color("#ff8000").unwrap(), Color::from_argb(255, 255, 128, 0));
    assert_eq!(parse_color("#0af").unwrap(), Color::from_argb(255, 0, 170, 255));
    assert_eq!(parse_color(" #FFFFFF ").unwrap(), Color::from_argb(255, 255, 255, 255));
    for bad in ["ff8000", "#ff80", "#gg0000", "", "#", "#ff80001"] {
        assert!(matches!(parse_color(bad), Err(GraphError::InvalidColor { .. })), "{bad:?}");
    }
}

#[test]
fn weights_default_when_empty_and_must_be_positive() {
    assert_eq!(parse_weight("").unwrap(), DEFAULT_STROKE_WEIGHT);
    assert_eq!(parse_weight("0.5").unwrap(), 0.5);
    for bad in ["0", "-1", "NaN", "inf", "thick"] {
        assert!(matches!(parse_weight(bad), Err(GraphError::InvalidWeight { .. })), "{bad:?}");
    }
}

#[test]
fn slot_strings_parse() {
    let slot: SlotInput = "quadratic:1,0,-2:#3366ff:3".parse().unwrap();
    assert_eq!(slot.kind, "quadratic");
    assert_eq!(slot.coefficients, ["1".to_string(), "0".to_string(), "-2".to_string()]);
    assert_eq!(slot.color, "#3366ff");
    assert_eq!(slot.weight, "3");

    let bare: SlotInput = "linear".parse().unwrap();
    assert_eq!(bare.coefficients, [String::new(), String::new(), String::new()]);

    assert!(matches!("cubic:1,2".parse::<SlotInput>(), Err(GraphError::UnknownFunction { .. })));
    assert!(matches!("linear:1,2,3,4".parse::<SlotInput>(), Err(GraphError::InvalidCoefficient { .. })));
}

#[test]
fn kind_names_are_case_insensitive_and_accept_form_spelling() {
    let theme = Theme::light();
    for name in ["quadratic", "Quadratic", "cuadratic", "CUADRATIC"] {
        let spec = SlotInput::new(name, &["1", "2", "3"]).resolve(0, &theme).unwrap();
        assert_eq!(spec.kind, FunctionKind::quadratic(1.0, 2.0, 3.0), "{name}");
        assert_eq!(spec.kind.name(), "quadratic");
    }
    assert_eq!(FunctionKind::linear(1.0, 0.0).name(), "linear");
    assert_eq!(FunctionKind::None.name(), "none");
    assert_eq!(FunctionKind::from_coefficients("", &[]).unwrap(), FunctionKind::None);
}

#[test]
fn resolve_builds_spec_with_theme_defaults() {
    let theme = Theme::light();
    let spec = SlotInput::new("Linear", &["2", ""]).resolve(1, &theme).unwrap();
    assert_eq!(spec.kind, FunctionKind::linear(2.0, 0.0));
    assert_eq!(spec.stroke.color, theme.curve_color(1));
    assert_eq!(spec.stroke.weight, DEFAULT_STROKE_WEIGHT);

    let spec = SlotInput::new("quadratic", &["1", "2", "3"])
        .with_color("#000")
        .with_weight("4")
        .resolve(0, &theme)
        .unwrap();
    assert_eq!(spec.kind, FunctionKind::quadratic(1.0, 2.0, 3.0));
    assert_eq!(spec.stroke.color, Color::from_argb(255, 0, 0, 0));
    assert_eq!(spec.stroke.weight, 4.0);
}

#[test]
fn resolve_ignores_fields_the_family_does_not_use() {
    // the hidden third field of a linear slot may hold anything
    let spec = SlotInput::new("linear", &["1", "1", "garbage"]).resolve(0, &Theme::light()).unwrap();
    assert_eq!(spec.kind, FunctionKind::linear(1.0, 1.0));

    let none = SlotInput::new("none", &["x", "y", "z"]).resolve(0, &Theme::light()).unwrap();
    assert!(!none.is_active());
}

#[test]
fn enter_key_code_maps_to_trigger() {
    assert_eq!(Trigger::from_key_code(13), Some(Trigger::Enter));
    assert_eq!(Trigger::from_key_code(32), None);
}

fn session() -> GraphSession<RecordingCanvas> {
    GraphSession::new(GraphEngine::default(), RecordingCanvas::new())
}

#[test]
fn every_trigger_runs_one_pass() {
    let mut s = session();
    assert_eq!(s.scale(), DEFAULT_SCALE);
    assert!(s.last_summary().is_none());

    s.set_slot(0, "linear:1,0".parse().unwrap());
    let summary = s.handle(Trigger::Enter).unwrap().clone();
    assert_eq!(summary.viewport.width_px, 5000);
    assert_eq!(summary.curves.len(), 1);

    let summary = s.handle(Trigger::ScaleChanged(10.0)).unwrap().clone();
    assert_eq!(summary.viewport.width_px, 1000);
    assert_eq!(s.scale(), 10.0);
    assert_eq!(s.scale_label(), "10");
    assert_eq!(s.canvas().width, 1000);

    s.set_slot(1, "quadratic:1".parse().unwrap());
    let summary = s.handle(Trigger::Graph).unwrap();
    assert_eq!(summary.curves.len(), 2);
    assert_eq!(summary.viewport.width_px, 1000, "graph action keeps the current scale");
}

#[test]
fn rejected_scale_keeps_previous_state() {
    let mut s = session();
    s.handle(Trigger::ScaleChanged(20.0)).unwrap();
    let calls_before = s.canvas().calls.clone();

    let err = s.handle(Trigger::ScaleChanged(0.0)).unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfiguration { .. }));
    assert_eq!(s.scale(), 20.0);
    assert_eq!(s.canvas().calls, calls_before);
    assert_eq!(s.viewport().map(|v| v.width_px), Some(2000));
}

#[test]
fn surface_failure_keeps_previous_scale() {
    let canvas = SkiaCanvas::with_background(Color::WHITE).unwrap();
    let mut s = GraphSession::new(GraphEngine::default(), canvas);
    s.handle(Trigger::ScaleChanged(3.0)).unwrap();

    let err = s.handle(Trigger::ScaleChanged(250.0)).unwrap_err();
    assert!(matches!(err, GraphError::Surface { .. }), "got {err:?}");
    assert_eq!(s.scale(), 3.0);
    assert_eq!((s.canvas().width(), s.canvas().height()), (300, 300));
    assert_eq!(s.scale_label(), "3");
}

#[test]
fn invalid_slot_is_disabled_without_blocking_others() {
    let mut s = session();
    s.set_slot(0, SlotInput::new("linear", &["oops", "1"]));
    s.set_slot(1, "linear:2,1".parse().unwrap());
    s.set_slot(2, SlotInput::new("quadratic", &["1", "0", "0"]).with_color("red"));

    let summary = s.handle(Trigger::ScaleChanged(5.0)).unwrap();
    assert_eq!(summary.curves.len(), 1);
    assert_eq!(summary.curves[0].slot, 1);
    assert_eq!(summary.grid.vertical, 101);
}

#[test]
fn out_of_range_slot_is_ignored() {
    let mut s = session();
    s.set_slot(7, "linear:1,1".parse().unwrap());
    assert_eq!(s.slots().len(), 3);
    assert!(s.slots().iter().all(|slot| slot.kind.is_empty()));
}

#[test]
fn centered_scroll_follows_latest_pass() {
    let mut s = session();
    assert_eq!(s.centered_scroll(540, 540), None);
    s.handle(Trigger::Graph).unwrap();
    assert_eq!(s.centered_scroll(540, 540), Some((2230, 2230)));
    s.handle(Trigger::ScaleChanged(10.0)).unwrap();
    assert_eq!(s.centered_scroll(540, 540), Some((230, 230)));
}
