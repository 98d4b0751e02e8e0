//! kanji-trace is a handwriting capture and practice engine for tracing characters stroke by
//! stroke.
//!
//! Pointer input is smoothed by a lazy brush, stitched into quadratic curves and rasterized
//! onto four stacked layers. Finished gestures are classified as strokes or taps and counted
//! against the active character's stroke target, which drives the practice loop:
//!
//! - Build a [`TraceBoard`] from [`BoardOpts`], a list of [`Character`]s and [`SessionSettings`]
//! - Feed it [`DeviceEvent`]s (or call the [`InputPort`] methods directly)
//! - Tick frames with a [`RenderLoop`] and observe [`SessionEvent`]s through an [`EventSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod board;
pub(crate) mod brush;
pub(crate) mod config;
pub(crate) mod input;
pub(crate) mod practice;
pub(crate) mod render;
/// Scripted input for tests and the command line.
pub mod replay;

pub use crate::foundation::core::{Affine, BezPath, FrameRGBA, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{TraceError, TraceResult};
pub use crate::foundation::math::{midpoint, pull_within};

pub use crate::board::render_loop::{CancelToken, FrameTarget, LoopExit, RenderLoop};
pub use crate::board::trace_board::TraceBoard;
pub use crate::brush::lazy::{BrushState, LazyBrush};
pub use crate::config::BoardOpts;
pub use crate::input::capture::{DeviceEvent, InputCapture, InputPort, PointerPhase};
pub use crate::practice::character::{Character, StrokeProgress};
pub use crate::practice::controller::{
    LayerAction, Navigation, Phase, PracticeSessionController, SessionSettings, SessionState,
};
pub use crate::practice::events::{EventSink, NullSink, SessionEvent};
pub use crate::practice::tracker::{StrokeCompletionTracker, StrokeOutcome};
pub use crate::render::layers::{CursorStyle, GridStyle, LayerCompositor, LayerKind};
pub use crate::render::stroke::{Stroke, StrokeRenderer, stroke_path};
pub use crate::render::surface::Surface;
