use crate::foundation::error::TraceResult;
use crate::render::layers::LayerCompositor;

/// Result of finishing a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeOutcome {
    /// The brush travelled during the gesture, so it counts as a stroke.
    pub valid: bool,
    /// The scratch layer was committed (false when layers are not allocated).
    pub committed: bool,
}

/// Tells real strokes from taps.
///
/// Armed on pointer-down; any brush displacement while armed marks the gesture as a stroke.
#[derive(Clone, Debug, Default)]
pub struct StrokeCompletionTracker {
    armed: bool,
    moved_since_down: bool,
    valid_strokes: u64,
    ignored_gestures: u64,
}

impl StrokeCompletionTracker {
    /// Fresh tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for a new gesture.
    pub fn pointer_down(&mut self) {
        self.armed = true;
        self.moved_since_down = false;
    }

    /// Feed the result of a per-frame brush update.
    pub fn observe_brush(&mut self, brush_moved: bool) {
        if self.armed && brush_moved {
            self.moved_since_down = true;
        }
    }

    /// Finish the gesture: commit scratch into drawing, then judge it.
    ///
    /// Commit happens for taps too; only validity differs.
    pub fn pointer_up(&mut self, layers: &mut LayerCompositor) -> TraceResult<StrokeOutcome> {
        let valid = self.armed && self.moved_since_down;
        self.disarm(valid);
        let committed = layers.commit_scratch_to_drawing()?;
        Ok(StrokeOutcome { valid, committed })
    }

    /// Drop the gesture without committing. Returns whether one was armed.
    pub fn abort(&mut self) -> bool {
        let was_armed = self.armed;
        if was_armed {
            self.disarm(false);
        }
        was_armed
    }

    /// Whether a gesture is being tracked.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether the brush moved since the last pointer-down.
    pub fn moved_since_down(&self) -> bool {
        self.moved_since_down
    }

    /// Gestures judged as strokes over the tracker's lifetime.
    pub fn valid_strokes(&self) -> u64 {
        self.valid_strokes
    }

    /// Taps and aborted gestures over the tracker's lifetime.
    pub fn ignored_gestures(&self) -> u64 {
        self.ignored_gestures
    }

    fn disarm(&mut self, valid: bool) {
        self.armed = false;
        self.moved_since_down = false;
        if valid {
            self.valid_strokes += 1;
        } else {
            self.ignored_gestures += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/practice/tracker.rs"]
mod tests;
