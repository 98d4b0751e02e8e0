use crate::foundation::core::Point;
use crate::foundation::math::pull_within;

/// Raw pointer position, trailing brush position and trailing radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushState {
    /// Latest pointer position.
    pub raw: Point,
    /// Smoothed brush position.
    pub brush: Point,
    /// Maximum lag between `raw` and `brush`.
    pub radius: f64,
}

impl BrushState {
    /// Distance between pointer and brush.
    pub fn lag(&self) -> f64 {
        self.raw.distance(self.brush)
    }
}

/// A brush that trails the pointer by at most `radius`.
///
/// The brush only moves when the pointer outruns the radius, and then only far enough to sit on
/// the radius again. Jitter smaller than the radius never reaches the ink.
#[derive(Clone, Debug)]
pub struct LazyBrush {
    state: BrushState,
    enabled: bool,
    moved: bool,
}

impl LazyBrush {
    /// Brush at the origin with the given trailing radius.
    pub fn new(radius: f64, enabled: bool) -> Self {
        Self {
            state: BrushState {
                raw: Point::ORIGIN,
                brush: Point::ORIGIN,
                radius: radius.max(0.0),
            },
            enabled,
            moved: false,
        }
    }

    /// Record a new pointer position. The brush follows on the next [`LazyBrush::update`].
    pub fn set_raw(&mut self, raw: Point) {
        self.state.raw = raw;
    }

    /// Place pointer and brush at `p` without counting it as brush motion.
    pub fn update_both(&mut self, p: Point) {
        self.state.raw = p;
        self.state.brush = p;
        self.moved = false;
    }

    /// Advance the brush toward the pointer; called once per frame.
    ///
    /// Returns whether the brush moved.
    pub fn update(&mut self) -> bool {
        let BrushState { raw, brush, radius } = self.state;
        let dist = raw.distance(brush);

        if !self.enabled {
            self.moved = dist > 0.0;
            self.state.brush = raw;
            return self.moved;
        }

        if dist > radius {
            self.state.brush = pull_within(raw, brush, radius);
            self.moved = self.state.brush != brush;
        } else {
            self.moved = false;
        }
        self.moved
    }

    /// Whether the last [`LazyBrush::update`] displaced the brush.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Smoothed brush position.
    pub fn brush(&self) -> Point {
        self.state.brush
    }

    /// Latest pointer position.
    pub fn raw(&self) -> Point {
        self.state.raw
    }

    /// Trailing radius.
    pub fn radius(&self) -> f64 {
        self.state.radius
    }

    /// Change the trailing radius; negative values clamp to zero.
    pub fn set_radius(&mut self, radius: f64) {
        self.state.radius = radius.max(0.0);
    }

    /// Whether smoothing is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn smoothing on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Snapshot of the brush state.
    pub fn state(&self) -> BrushState {
        self.state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/brush/lazy.rs"]
mod tests;
