use std::time::Duration;

use crate::board::trace_board::TraceBoard;
use crate::foundation::core::Point;
use crate::foundation::error::TraceResult;
use crate::input::capture::{DeviceEvent, PointerPhase};
use crate::practice::events::EventSink;

/// One step of a scripted session.
///
/// Pointer positions are device coordinates, offset by the board origin like real input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    /// Pointer down.
    Down {
        /// Device x.
        x: f64,
        /// Device y.
        y: f64,
    },
    /// Pointer move.
    Move {
        /// Device x.
        x: f64,
        /// Device y.
        y: f64,
    },
    /// Pointer up.
    Up,
    /// Run render frames.
    Frame {
        /// Number of frames.
        #[serde(default = "one")]
        count: u32,
    },
    /// Next character.
    Next,
    /// Previous character.
    Previous,
    /// Jump to a character.
    SetIndex {
        /// Target index.
        index: usize,
    },
    /// Manual reset.
    Reset,
    /// Flip auto-reset.
    ToggleAutoReset,
    /// Flip glyph visibility.
    ToggleHidden,
    /// Resize the surface.
    Resize {
        /// Logical edge length.
        css_size: f64,
        /// Device pixel ratio.
        dpr: f64,
    },
    /// Move the surface origin.
    Origin {
        /// Device x of the top-left corner.
        x: f64,
        /// Device y of the top-left corner.
        y: f64,
    },
}

fn one() -> u32 {
    1
}

/// Counters from a finished replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Ops applied.
    pub ops: usize,
    /// Frames ticked.
    pub frames: u64,
}

/// Parse a JSON array of ops.
pub fn parse_script(json: &str) -> TraceResult<Vec<ScriptOp>> {
    Ok(serde_json::from_str(json)?)
}

/// Drive `board` through `ops`, ticking frames through the board's own render loop.
///
/// Stops at the first failing op. Frame errors are logged by the loop and do not stop the
/// replay.
#[tracing::instrument(skip_all, fields(ops = ops.len()))]
pub fn replay<S: EventSink>(
    board: &mut TraceBoard<S>,
    ops: &[ScriptOp],
) -> TraceResult<ReplaySummary> {
    let mut rl = board.render_loop(Duration::ZERO);
    let mut summary = ReplaySummary::default();
    for op in ops {
        match op {
            ScriptOp::Down { x, y } => {
                board.handle(&DeviceEvent::mouse(PointerPhase::Down, *x, *y));
            }
            ScriptOp::Move { x, y } => {
                board.handle(&DeviceEvent::mouse(PointerPhase::Move, *x, *y));
            }
            ScriptOp::Up => {
                board.handle(&DeviceEvent::mouse(PointerPhase::Up, 0.0, 0.0));
            }
            ScriptOp::Frame { count } => {
                for _ in 0..*count {
                    if !rl.tick(board) {
                        break;
                    }
                }
            }
            ScriptOp::Next => board.next()?,
            ScriptOp::Previous => board.previous()?,
            ScriptOp::SetIndex { index } => board.set_index(*index)?,
            ScriptOp::Reset => board.reset(),
            ScriptOp::ToggleAutoReset => {
                board.toggle_auto_reset();
            }
            ScriptOp::ToggleHidden => {
                board.toggle_glyph_hidden();
            }
            ScriptOp::Resize { css_size, dpr } => board.resize(*css_size, *dpr)?,
            ScriptOp::Origin { x, y } => board.set_origin(Point::new(*x, *y)),
        }
        summary.ops += 1;
    }
    summary.frames = rl.frames();
    tracing::debug!(ops = summary.ops, frames = summary.frames, "replay finished");
    Ok(summary)
}

/// Ops for a straight drag from `from` to `to` in `steps` moves, one frame per move.
pub fn straight_drag(from: Point, to: Point, steps: u32) -> Vec<ScriptOp> {
    let steps = steps.max(1);
    let mut ops = Vec::with_capacity(steps as usize * 2 + 3);
    ops.push(ScriptOp::Down { x: from.x, y: from.y });
    ops.push(ScriptOp::Frame { count: 1 });
    for i in 1..=steps {
        let p = from.lerp(to, f64::from(i) / f64::from(steps));
        ops.push(ScriptOp::Move { x: p.x, y: p.y });
        ops.push(ScriptOp::Frame { count: 1 });
    }
    ops.push(ScriptOp::Up);
    ops
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
