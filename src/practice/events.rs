use std::sync::mpsc;

/// Session notifications for the persistence/navigation collaborator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A gesture finished; `valid` is false for taps and aborted gestures.
    StrokeRecorded {
        /// Whether the gesture counted as a stroke.
        valid: bool,
    },
    /// The target stroke count was reached (or passed at a manual reset).
    CharacterCompleted {
        /// Index of the completed character.
        index: usize,
        /// Its glyph, for the practice log.
        glyph: String,
    },
    /// The active character changed.
    IndexChanged {
        /// New active index.
        index: usize,
    },
    /// Auto-reset was switched.
    AutoResetToggled {
        /// New setting.
        enabled: bool,
    },
}

/// Fire-and-forget receiver of session notifications.
pub trait EventSink {
    /// A gesture finished.
    fn on_stroke_recorded(&mut self, valid: bool);
    /// A character was completed.
    fn on_character_completed(&mut self, index: usize, glyph: &str);
    /// The active character changed.
    fn on_index_changed(&mut self, new_index: usize);
    /// Auto-reset was switched.
    fn on_auto_reset_toggled(&mut self, enabled: bool);
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_stroke_recorded(&mut self, _valid: bool) {}
    fn on_character_completed(&mut self, _index: usize, _glyph: &str) {}
    fn on_index_changed(&mut self, _new_index: usize) {}
    fn on_auto_reset_toggled(&mut self, _enabled: bool) {}
}

impl EventSink for Vec<SessionEvent> {
    fn on_stroke_recorded(&mut self, valid: bool) {
        self.push(SessionEvent::StrokeRecorded { valid });
    }

    fn on_character_completed(&mut self, index: usize, glyph: &str) {
        self.push(SessionEvent::CharacterCompleted {
            index,
            glyph: glyph.to_string(),
        });
    }

    fn on_index_changed(&mut self, new_index: usize) {
        self.push(SessionEvent::IndexChanged { index: new_index });
    }

    fn on_auto_reset_toggled(&mut self, enabled: bool) {
        self.push(SessionEvent::AutoResetToggled { enabled });
    }
}

impl EventSink for mpsc::Sender<SessionEvent> {
    fn on_stroke_recorded(&mut self, valid: bool) {
        forward(self, SessionEvent::StrokeRecorded { valid });
    }

    fn on_character_completed(&mut self, index: usize, glyph: &str) {
        forward(
            self,
            SessionEvent::CharacterCompleted {
                index,
                glyph: glyph.to_string(),
            },
        );
    }

    fn on_index_changed(&mut self, new_index: usize) {
        forward(self, SessionEvent::IndexChanged { index: new_index });
    }

    fn on_auto_reset_toggled(&mut self, enabled: bool) {
        forward(self, SessionEvent::AutoResetToggled { enabled });
    }
}

fn forward(tx: &mpsc::Sender<SessionEvent>, event: SessionEvent) {
    if tx.send(event).is_err() {
        tracing::warn!("session event receiver dropped");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/practice/events.rs"]
mod tests;
