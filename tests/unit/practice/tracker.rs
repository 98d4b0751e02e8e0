use super::*;
use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::render::layers::{GridStyle, LayerKind};

fn layers() -> LayerCompositor {
    let mut l = LayerCompositor::new(GridStyle {
        color: Rgba8::rgb(0xF0, 0xF8, 0xFF),
        width: 4.0,
    });
    l.resize(64.0, 1.0).unwrap();
    l
}

#[test]
fn tap_is_invalid() {
    let mut layers = layers();
    let mut t = StrokeCompletionTracker::new();
    t.pointer_down();
    t.observe_brush(false);
    let out = t.pointer_up(&mut layers).unwrap();
    assert!(!out.valid);
    assert!(out.committed);
    assert_eq!(t.ignored_gestures(), 1);
    assert_eq!(t.valid_strokes(), 0);
}

#[test]
fn brush_motion_makes_a_stroke() {
    let mut layers = layers();
    let mut t = StrokeCompletionTracker::new();
    t.pointer_down();
    t.observe_brush(false);
    t.observe_brush(true);
    t.observe_brush(false);
    assert!(t.moved_since_down());
    assert!(t.pointer_up(&mut layers).unwrap().valid);
    assert!(!t.is_armed());
    assert_eq!(t.valid_strokes(), 1);
}

#[test]
fn motion_while_disarmed_is_ignored() {
    let mut layers = layers();
    let mut t = StrokeCompletionTracker::new();
    t.observe_brush(true);
    assert!(!t.moved_since_down());
    t.pointer_down();
    assert!(!t.pointer_up(&mut layers).unwrap().valid);
}

#[test]
fn pointer_up_commits_scratch() {
    let mut layers = layers();
    let mut p = BezPath::new();
    p.move_to((8.0, 32.0));
    p.line_to((56.0, 32.0));
    layers
        .layer_mut(LayerKind::Scratch)
        .unwrap()
        .stroke_path(&p, 6.0, Rgba8::rgb(0, 0, 0))
        .unwrap();

    let mut t = StrokeCompletionTracker::new();
    t.pointer_down();
    t.pointer_up(&mut layers).unwrap();
    assert!(layers.layer(LayerKind::Scratch).unwrap().is_blank());
    assert_eq!(
        layers
            .layer(LayerKind::Drawing)
            .unwrap()
            .alpha_at(Point::new(20.0, 32.0)),
        Some(255)
    );
}

#[test]
fn uninitialized_layers_still_judge() {
    let mut layers = LayerCompositor::new(GridStyle {
        color: Rgba8::rgb(0, 0, 0),
        width: 1.0,
    });
    let mut t = StrokeCompletionTracker::new();
    t.pointer_down();
    t.observe_brush(true);
    let out = t.pointer_up(&mut layers).unwrap();
    assert!(out.valid);
    assert!(!out.committed);
}

#[test]
fn abort_disarms_once() {
    let mut t = StrokeCompletionTracker::new();
    assert!(!t.abort());
    t.pointer_down();
    t.observe_brush(true);
    assert!(t.abort());
    assert!(!t.is_armed());
    assert!(!t.abort());
    assert_eq!(t.ignored_gestures(), 1);
}
