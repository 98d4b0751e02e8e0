use super::*;

#[test]
fn vec_sink_records_in_order() {
    let mut log: Vec<SessionEvent> = Vec::new();
    log.on_stroke_recorded(true);
    log.on_character_completed(2, "水");
    log.on_index_changed(3);
    log.on_auto_reset_toggled(false);
    assert_eq!(
        log,
        vec![
            SessionEvent::StrokeRecorded { valid: true },
            SessionEvent::CharacterCompleted {
                index: 2,
                glyph: "水".to_string()
            },
            SessionEvent::IndexChanged { index: 3 },
            SessionEvent::AutoResetToggled { enabled: false },
        ]
    );
}

#[test]
fn channel_sink_forwards_and_survives_dropped_receiver() {
    let (mut tx, rx) = mpsc::channel();
    tx.on_index_changed(1);
    assert_eq!(rx.recv().unwrap(), SessionEvent::IndexChanged { index: 1 });
    drop(rx);
    tx.on_stroke_recorded(false);
}

#[test]
fn events_serialize_with_tag() {
    let json = serde_json::to_string(&SessionEvent::AutoResetToggled { enabled: true }).unwrap();
    assert_eq!(json, r#"{"event":"auto_reset_toggled","enabled":true}"#);
}
