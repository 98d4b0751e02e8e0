use std::time::Duration;

use crate::board::render_loop::{CancelToken, FrameTarget, RenderLoop};
use crate::brush::lazy::{BrushState, LazyBrush};
use crate::config::BoardOpts;
use crate::foundation::core::{FrameRGBA, Point, Rgba8};
use crate::foundation::error::TraceResult;
use crate::input::capture::{DeviceEvent, InputCapture, InputPort};
use crate::practice::character::{Character, StrokeProgress};
use crate::practice::controller::{
    LayerAction, Navigation, PracticeSessionController, SessionSettings, SessionState,
};
use crate::practice::events::EventSink;
use crate::practice::tracker::StrokeCompletionTracker;
use crate::render::layers::{CursorStyle, GridStyle, LayerCompositor, LayerKind};
use crate::render::stroke::{Stroke, StrokeRenderer};

/// A complete tracing surface: input, smoothing, layers and the practice session.
///
/// Input arrives through [`InputPort`] (or [`TraceBoard::handle`]); rendering advances one
/// [`TraceBoard::frame`] at a time, typically driven by a [`RenderLoop`]. Everything runs on the
/// caller's thread.
pub struct TraceBoard<S: EventSink> {
    opts: BoardOpts,
    capture: InputCapture,
    brush: LazyBrush,
    stroke: Stroke,
    renderer: StrokeRenderer,
    layers: LayerCompositor,
    tracker: StrokeCompletionTracker,
    session: PracticeSessionController,
    cursor: CursorStyle,
    sink: S,
    attached: bool,
    token: CancelToken,
}

impl<S: EventSink> TraceBoard<S> {
    /// Build a board and allocate its layers at the configured size.
    pub fn new(
        opts: BoardOpts,
        characters: Vec<Character>,
        settings: SessionSettings,
        sink: S,
    ) -> TraceResult<Self> {
        opts.validate()?;
        let mut layers = LayerCompositor::new(GridStyle {
            color: opts.grid_color,
            width: opts.grid_width,
        });
        layers.resize(opts.css_size, opts.device_pixel_ratio)?;

        let session = PracticeSessionController::new(characters, settings);
        tracing::debug!(
            characters = session.characters().len(),
            index = session.state().active_index,
            auto_reset = session.state().is_auto_reset_enabled,
            "board created"
        );

        Ok(Self {
            capture: InputCapture::new(Point::ORIGIN),
            brush: LazyBrush::new(opts.brush_radius, opts.lazy_enabled),
            stroke: Stroke::new(),
            renderer: StrokeRenderer::new(opts.stroke_width, opts.ink),
            layers,
            tracker: StrokeCompletionTracker::new(),
            session,
            cursor: CursorStyle {
                brush_color: opts.cursor_color,
                pointer_color: opts.pointer_color,
                pointer_radius: opts.pointer_radius,
            },
            sink,
            attached: true,
            token: CancelToken::new(),
            opts,
        })
    }

    /// Resize the surface. A device pixel ratio change aborts the gesture in progress.
    pub fn resize(&mut self, css_size: f64, dpr: f64) -> TraceResult<()> {
        if dpr != self.layers.dpr() && self.abort_gesture() {
            tracing::debug!(from = self.layers.dpr(), to = dpr, "dpr changed mid-gesture");
        }
        self.layers.resize(css_size, dpr)?;
        self.opts.css_size = css_size;
        self.opts.device_pixel_ratio = dpr;
        Ok(())
    }

    /// Move the surface's top-left corner, in device coordinates.
    pub fn set_origin(&mut self, origin: Point) {
        self.capture.set_origin(origin);
    }

    /// Feed a raw device event. Ignored after [`TraceBoard::teardown`].
    pub fn handle(&mut self, event: &DeviceEvent) {
        event.dispatch(self);
    }

    /// Advance one frame: brush update, guide, in-progress stroke, cursor.
    ///
    /// Does nothing while layers are not allocated.
    pub fn frame(&mut self) -> TraceResult<()> {
        if !self.layers.is_ready() {
            tracing::trace!("frame skipped, layers not ready");
            return Ok(());
        }
        let drawing = self.capture.is_active();
        if drawing {
            self.advance_brush();
        }

        self.layers.draw_grid()?;
        if drawing {
            self.render_scratch()?;
        }

        if drawing && self.opts.show_cursor {
            let BrushState { raw, brush, radius } = self.brush.state();
            self.layers.draw_interface(brush, radius, raw, &self.cursor)?;
        } else {
            self.layers.clear_interface();
        }
        Ok(())
    }

    /// Navigate between characters. Clears the ink and aborts any gesture.
    pub fn navigate(&mut self, nav: Navigation) -> TraceResult<()> {
        let action = self.session.navigate(nav, &mut self.sink)?;
        self.drop_gesture();
        self.apply(action);
        Ok(())
    }

    /// Next character, wrapping.
    pub fn next(&mut self) -> TraceResult<()> {
        self.navigate(Navigation::Next)
    }

    /// Previous character, wrapping.
    pub fn previous(&mut self) -> TraceResult<()> {
        self.navigate(Navigation::Previous)
    }

    /// Jump to a character.
    pub fn set_index(&mut self, index: usize) -> TraceResult<()> {
        self.navigate(Navigation::SetIndex(index))
    }

    /// Manual reset: clear the ink, reporting completion when the target was reached.
    pub fn reset(&mut self) {
        let action = self.session.reset(&mut self.sink);
        self.drop_gesture();
        self.apply(action);
    }

    /// Flip auto-reset; returns the new setting.
    pub fn toggle_auto_reset(&mut self) -> bool {
        self.session.toggle_auto_reset(&mut self.sink)
    }

    /// Flip model glyph visibility; returns whether it is now hidden.
    pub fn toggle_glyph_hidden(&mut self) -> bool {
        self.session.toggle_glyph_hidden()
    }

    /// Detach input and cancel the render loop together.
    pub fn teardown(&mut self) {
        if !self.attached {
            return;
        }
        self.abort_gesture();
        self.attached = false;
        self.token.cancel();
        tracing::debug!("board torn down");
    }

    /// A render loop bound to this board's cancel token.
    pub fn render_loop(&self, interval: Duration) -> RenderLoop {
        RenderLoop::new(interval, self.token.clone())
    }

    /// The board's cancel token.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Whether input is accepted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.capture.is_active()
    }

    /// Flatten the layer stack into one premultiplied frame.
    pub fn snapshot(
        &self,
        background: Option<Rgba8>,
        include_interface: bool,
    ) -> TraceResult<Option<FrameRGBA>> {
        self.layers.flatten(background, include_interface)
    }

    /// Effective configuration.
    pub fn opts(&self) -> &BoardOpts {
        &self.opts
    }

    /// Session controller.
    pub fn session(&self) -> &PracticeSessionController {
        &self.session
    }

    /// Session state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Stroke counter for display.
    pub fn progress(&self) -> StrokeProgress {
        self.session.progress()
    }

    /// Layer stack.
    pub fn layers(&self) -> &LayerCompositor {
        &self.layers
    }

    /// Lazy brush state.
    pub fn brush(&self) -> BrushState {
        self.brush.state()
    }

    /// The stroke being drawn.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Raw local samples of the current gesture.
    pub fn samples(&self) -> &[Point] {
        self.capture.samples()
    }

    /// Stroke/tap classifier.
    pub fn tracker(&self) -> &StrokeCompletionTracker {
        &self.tracker
    }

    /// Event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Event sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the board, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn advance_brush(&mut self) {
        let moved = self.brush.update();
        self.tracker.observe_brush(moved);
        if moved || self.stroke.is_empty() {
            self.stroke.push(self.brush.brush());
        }
        self.stroke.valid = self.tracker.moved_since_down();
    }

    fn render_scratch(&mut self) -> TraceResult<bool> {
        let Some(scratch) = self.layers.layer_mut(LayerKind::Scratch) else {
            return Ok(false);
        };
        self.renderer.render(self.stroke.points(), scratch)
    }

    fn finish_gesture(&mut self) -> TraceResult<()> {
        // Input coalesced since the last frame still belongs to this stroke.
        self.advance_brush();
        self.render_scratch()?;
        self.capture.up();
        self.session.begin_commit();

        let outcome = self.tracker.pointer_up(&mut self.layers)?;
        tracing::debug!(
            valid = outcome.valid,
            points = self.stroke.len(),
            "gesture committed"
        );
        let action = self.session.record_stroke(outcome.valid, &mut self.sink);
        self.apply(action);
        self.stroke.clear();
        self.brush.update_both(self.brush.raw());
        Ok(())
    }

    /// Abort the gesture in progress, reporting it as invalid.
    fn abort_gesture(&mut self) -> bool {
        let dropped = self.drop_gesture();
        self.session.abort_gesture(&mut self.sink) || dropped
    }

    fn drop_gesture(&mut self) -> bool {
        let active = self.capture.is_active();
        self.capture.cancel();
        self.tracker.abort();
        self.stroke.clear();
        self.layers.clear_scratch();
        active
    }

    fn apply(&mut self, action: LayerAction) {
        match action {
            LayerAction::Keep => {}
            LayerAction::ClearDrawing => {
                self.layers.clear_all();
            }
        }
    }
}

impl<S: EventSink> InputPort for TraceBoard<S> {
    fn pointer_down(&mut self, device: Point) {
        if !self.attached {
            return;
        }
        if self.capture.is_active() {
            tracing::debug!("pointer down during gesture, restarting");
            self.abort_gesture();
        }
        if !self.session.begin_gesture() {
            return;
        }
        let p = self.capture.down(device);
        self.brush.update_both(p);
        self.stroke.clear();
        self.stroke.push(p);
        self.tracker.pointer_down();
        tracing::debug!(x = p.x, y = p.y, "gesture started");
    }

    fn pointer_move(&mut self, device: Point) {
        if !self.attached {
            return;
        }
        if let Some(p) = self.capture.move_to(device) {
            self.brush.set_raw(p);
        }
    }

    fn pointer_up(&mut self) {
        if !self.attached || !self.capture.is_active() {
            return;
        }
        if let Err(err) = self.finish_gesture() {
            tracing::warn!(error = %err, "gesture commit failed");
            self.abort_gesture();
        }
    }
}

impl<S: EventSink> FrameTarget for TraceBoard<S> {
    fn on_frame(&mut self, _frame: u64) -> TraceResult<()> {
        self.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/trace_board.rs"]
mod tests;
