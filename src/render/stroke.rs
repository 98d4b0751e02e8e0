use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::foundation::error::TraceResult;
use crate::foundation::math::midpoint;
use crate::render::surface::Surface;

/// Brush-smoothed points of one pointer-down to pointer-up gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    /// Whether the brush actually travelled during the gesture.
    pub valid: bool,
}

impl Stroke {
    /// Empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a brush point.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Collected points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of collected points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forget all points and reset validity.
    pub fn clear(&mut self) {
        self.points.clear();
        self.valid = false;
    }

    /// Smoothed outline for the collected points, see [`stroke_path`].
    pub fn path(&self) -> Option<BezPath> {
        stroke_path(&self.points)
    }
}

/// Stitch a point sequence into a quadratic Bezier chain.
///
/// Each interior sample acts as the control point of a quadratic segment ending at the
/// midpoint to the next sample, which keeps the curve tangent-continuous. The final stretch to
/// the newest sample is a straight line since its successor is not known yet. Returns `None` for
/// fewer than two points.
///
/// The very first segment, from the first sample to the first midpoint, is emitted as a line:
/// a quadratic whose control point coincides with its start is that same line.
pub fn stroke_path(points: &[Point]) -> Option<BezPath> {
    if points.len() < 2 {
        return None;
    }

    let mut path = BezPath::new();
    let mut p1 = points[0];
    let mut p2 = points[1];
    path.move_to(p1);

    for i in 1..points.len() - 1 {
        let mid = midpoint(p1, p2);
        if i == 1 {
            path.line_to(mid);
        } else {
            path.quad_to(p1, mid);
        }
        p1 = points[i];
        p2 = points[i + 1];
    }

    path.line_to(p2);
    Some(path)
}

/// Renders the in-progress stroke onto the scratch layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeRenderer {
    width: f64,
    color: Rgba8,
}

impl StrokeRenderer {
    /// Renderer drawing `width`-wide strokes in `color`.
    pub fn new(width: f64, color: Rgba8) -> Self {
        Self { width, color }
    }

    /// Stroke width in logical units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Clear `scratch` and redraw the whole stroke.
    ///
    /// Returns whether anything was drawn (nothing is for fewer than two points).
    pub fn render(&self, points: &[Point], scratch: &mut Surface) -> TraceResult<bool> {
        scratch.clear();
        let Some(path) = stroke_path(points) else {
            return Ok(false);
        };
        scratch.stroke_path(&path, self.width, self.color)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/stroke.rs"]
mod tests;
