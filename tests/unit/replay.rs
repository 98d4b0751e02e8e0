use super::*;

#[test]
fn parses_tagged_ops() {
    let ops = parse_script(
        r#"[
            { "op": "down", "x": 1, "y": 2 },
            { "op": "frame" },
            { "op": "frame", "count": 3 },
            { "op": "set_index", "index": 1 },
            { "op": "resize", "css_size": 200, "dpr": 2 },
            { "op": "toggle_auto_reset" },
            { "op": "up" }
        ]"#,
    )
    .unwrap();
    assert_eq!(ops[0], ScriptOp::Down { x: 1.0, y: 2.0 });
    assert_eq!(ops[1], ScriptOp::Frame { count: 1 });
    assert_eq!(ops[2], ScriptOp::Frame { count: 3 });
    assert_eq!(ops[3], ScriptOp::SetIndex { index: 1 });
    assert_eq!(
        ops[4],
        ScriptOp::Resize {
            css_size: 200.0,
            dpr: 2.0
        }
    );
    assert_eq!(ops[6], ScriptOp::Up);
}

#[test]
fn unknown_op_is_a_serde_error() {
    let err = parse_script(r#"[{ "op": "erase" }]"#).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn straight_drag_shape() {
    let ops = straight_drag(Point::new(0.0, 0.0), Point::new(40.0, 0.0), 4);
    assert_eq!(ops.len(), 11);
    assert_eq!(ops[0], ScriptOp::Down { x: 0.0, y: 0.0 });
    assert_eq!(ops[8], ScriptOp::Move { x: 40.0, y: 0.0 });
    assert_eq!(ops[10], ScriptOp::Up);
}
