use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::foundation::error::TraceResult;

/// Shared stop flag for a [`RenderLoop`].
///
/// Clones observe the same flag; cancelling any clone stops the loop at its next tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// New, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Something driven once per frame.
pub trait FrameTarget {
    /// Advance one frame. Errors are logged by the loop, never propagated.
    fn on_frame(&mut self, frame: u64) -> TraceResult<()>;
}

/// Why [`RenderLoop::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The token was cancelled.
    Cancelled,
    /// The frame budget was used up.
    BudgetReached,
}

/// Fixed-tick cooperative frame scheduler.
#[derive(Debug)]
pub struct RenderLoop {
    interval: Duration,
    token: CancelToken,
    frame: u64,
    failed_frames: u64,
}

impl RenderLoop {
    /// Loop ticking every `interval`, stopped through `token`.
    pub fn new(interval: Duration, token: CancelToken) -> Self {
        Self {
            interval,
            token,
            frame: 0,
            failed_frames: 0,
        }
    }

    /// Loop at roughly 60 ticks per second.
    pub fn display_rate(token: CancelToken) -> Self {
        Self::new(Duration::from_micros(16_667), token)
    }

    /// The loop's stop flag.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Frames whose target returned an error.
    pub fn failed_frames(&self) -> u64 {
        self.failed_frames
    }

    /// Run one frame unless cancelled. Returns whether a frame ran.
    pub fn tick<T: FrameTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        let frame = self.frame;
        self.frame += 1;
        if let Err(err) = target.on_frame(frame) {
            self.failed_frames += 1;
            tracing::warn!(frame, error = %err, "frame failed");
        }
        true
    }

    /// Tick until cancelled or `max_frames` frames have run, sleeping out the rest of
    /// each interval between frames.
    pub fn run<T: FrameTarget + ?Sized>(
        &mut self,
        target: &mut T,
        max_frames: Option<u64>,
    ) -> LoopExit {
        let mut ran = 0u64;
        loop {
            if max_frames.is_some_and(|max| ran >= max) {
                tracing::debug!(frames = self.frame, "render loop budget reached");
                return LoopExit::BudgetReached;
            }
            let started = Instant::now();
            if !self.tick(target) {
                tracing::debug!(frames = self.frame, "render loop cancelled");
                return LoopExit::Cancelled;
            }
            ran += 1;
            if let Some(rest) = self.interval.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/render_loop.rs"]
mod tests;
