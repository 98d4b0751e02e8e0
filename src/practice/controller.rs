use crate::foundation::error::{TraceError, TraceResult};
use crate::practice::character::{Character, StrokeProgress};
use crate::practice::events::EventSink;

/// Gesture lifecycle as seen by the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No active gesture.
    #[default]
    Idle,
    /// Pointer is down; capture, brush and renderer are running.
    Drawing,
    /// Pointer went up; scratch is being committed and judged.
    Committing,
    /// Counters are being updated.
    Evaluating,
}

/// Mutable session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Index into the character list; always in range when the list is non-empty.
    pub active_index: usize,
    /// Valid strokes drawn on the active character since the last clear.
    pub drawn_stroke_count: u32,
    /// Clear automatically once the target stroke count is reached.
    pub is_auto_reset_enabled: bool,
}

impl SessionState {
    /// The persisted subset.
    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            is_auto_reset: self.is_auto_reset_enabled,
            last_index: self.active_index,
        }
    }
}

/// Settings the collaborator loads and saves between sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSettings {
    /// Auto-reset on completion.
    pub is_auto_reset: bool,
    /// Character the learner was last on.
    #[serde(alias = "lastKanjiIndex")]
    pub last_index: usize,
}

/// Explicit navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Following character, wrapping to the first.
    Next,
    /// Preceding character, wrapping to the last.
    Previous,
    /// Jump to an index.
    SetIndex(usize),
}

/// What the drawing layer must do after a session transition.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerAction {
    /// Leave committed ink alone.
    Keep,
    /// Clear scratch and drawing.
    ClearDrawing,
}

/// Owns [`SessionState`] and applies the completion, reset and navigation rules.
///
/// The controller never touches layers itself; transitions that wipe ink return
/// [`LayerAction::ClearDrawing`] for the caller to apply.
#[derive(Clone, Debug)]
pub struct PracticeSessionController {
    characters: Vec<Character>,
    state: SessionState,
    phase: Phase,
    glyph_hidden: bool,
}

impl PracticeSessionController {
    /// Start a session. A `last_index` outside the list falls back to 0.
    pub fn new(characters: Vec<Character>, settings: SessionSettings) -> Self {
        let active_index = if settings.last_index < characters.len() {
            settings.last_index
        } else {
            if !characters.is_empty() {
                tracing::debug!(
                    last_index = settings.last_index,
                    len = characters.len(),
                    "stale last index, starting at 0"
                );
            }
            0
        };
        Self {
            characters,
            state: SessionState {
                active_index,
                drawn_stroke_count: 0,
                is_auto_reset_enabled: settings.is_auto_reset,
            },
            phase: Phase::Idle,
            glyph_hidden: false,
        }
    }

    /// False for an empty character list; capture and navigation are then disabled.
    pub fn is_enabled(&self) -> bool {
        !self.characters.is_empty()
    }

    /// All characters of the session.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// The active character.
    pub fn current(&self) -> Option<&Character> {
        self.characters.get(self.state.active_index)
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Settings to persist.
    pub fn settings(&self) -> SessionSettings {
        self.state.settings()
    }

    /// Current gesture phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Counter for display.
    pub fn progress(&self) -> StrokeProgress {
        StrokeProgress {
            drawn: self.state.drawn_stroke_count,
            target: self.current().and_then(Character::completion_target),
        }
    }

    /// Whether the model glyph is hidden.
    pub fn is_glyph_hidden(&self) -> bool {
        self.glyph_hidden
    }

    /// Flip glyph visibility; returns the new hidden flag.
    pub fn toggle_glyph_hidden(&mut self) -> bool {
        self.glyph_hidden = !self.glyph_hidden;
        self.glyph_hidden
    }

    /// Enter [`Phase::Drawing`]. Refused when the session is disabled.
    pub fn begin_gesture(&mut self) -> bool {
        if !self.is_enabled() {
            tracing::trace!("gesture ignored, no characters");
            return false;
        }
        self.phase = Phase::Drawing;
        true
    }

    /// Enter [`Phase::Committing`] from [`Phase::Drawing`].
    pub fn begin_commit(&mut self) -> bool {
        if self.phase != Phase::Drawing {
            return false;
        }
        self.phase = Phase::Committing;
        true
    }

    /// Apply the result of a committed gesture and return to [`Phase::Idle`].
    pub fn record_stroke<S: EventSink + ?Sized>(
        &mut self,
        valid: bool,
        sink: &mut S,
    ) -> LayerAction {
        sink.on_stroke_recorded(valid);
        if !valid || !self.is_enabled() {
            self.phase = Phase::Idle;
            return LayerAction::Keep;
        }

        self.phase = Phase::Evaluating;
        self.state.drawn_stroke_count = self.state.drawn_stroke_count.saturating_add(1);
        let target = self.current().and_then(Character::completion_target);
        let action = match target {
            Some(target)
                if self.state.is_auto_reset_enabled && self.state.drawn_stroke_count == target =>
            {
                self.complete(sink);
                LayerAction::ClearDrawing
            }
            _ => LayerAction::Keep,
        };
        tracing::debug!(
            index = self.state.active_index,
            drawn = self.state.drawn_stroke_count,
            "stroke counted"
        );
        self.phase = Phase::Idle;
        action
    }

    /// Drop an in-flight gesture, reporting it as invalid. Returns whether one was in flight.
    pub fn abort_gesture<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        tracing::debug!(phase = ?self.phase, "gesture aborted");
        self.phase = Phase::Idle;
        sink.on_stroke_recorded(false);
        true
    }

    /// Move to another character. Always clears ink and the counter.
    ///
    /// No-op on an empty list; `SetIndex` out of range is rejected.
    pub fn navigate<S: EventSink + ?Sized>(
        &mut self,
        nav: Navigation,
        sink: &mut S,
    ) -> TraceResult<LayerAction> {
        let len = self.characters.len();
        if len == 0 {
            tracing::trace!(?nav, "navigation ignored, no characters");
            return Ok(LayerAction::Keep);
        }
        let current = self.state.active_index;
        let next = match nav {
            Navigation::Next => (current + 1) % len,
            Navigation::Previous => (current + len - 1) % len,
            Navigation::SetIndex(i) if i < len => i,
            Navigation::SetIndex(i) => {
                return Err(TraceError::validation(format!(
                    "character index {i} out of range for {len} characters"
                )));
            }
        };
        self.abort_gesture(sink);
        self.state.active_index = next;
        self.state.drawn_stroke_count = 0;
        tracing::debug!(from = current, to = next, "navigated");
        sink.on_index_changed(next);
        Ok(LayerAction::ClearDrawing)
    }

    /// Manual reset: report completion if the known target was reached, then clear.
    pub fn reset<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> LayerAction {
        self.abort_gesture(sink);
        let reached = self
            .current()
            .and_then(Character::completion_target)
            .is_some_and(|target| self.state.drawn_stroke_count >= target);
        if reached {
            self.complete(sink);
        } else {
            tracing::debug!(drawn = self.state.drawn_stroke_count, "reset");
            self.state.drawn_stroke_count = 0;
        }
        LayerAction::ClearDrawing
    }

    /// Flip auto-reset; returns the new setting.
    pub fn toggle_auto_reset<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        let enabled = !self.state.is_auto_reset_enabled;
        self.state.is_auto_reset_enabled = enabled;
        sink.on_auto_reset_toggled(enabled);
        enabled
    }

    fn complete<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        let index = self.state.active_index;
        if let Some(c) = self.characters.get(index) {
            tracing::debug!(
                index,
                glyph = %c.glyph,
                drawn = self.state.drawn_stroke_count,
                "character completed"
            );
            sink.on_character_completed(index, &c.glyph);
        }
        self.state.drawn_stroke_count = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/practice/controller.rs"]
mod tests;
