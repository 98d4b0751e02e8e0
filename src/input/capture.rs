use crate::foundation::core::Point;

/// Lifecycle phase of a device pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Button pressed / finger placed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released / finger lifted.
    Up,
}

/// A raw device event in device (client) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DeviceEvent {
    /// Mouse or pen event.
    Mouse {
        /// Event phase.
        phase: PointerPhase,
        /// Pointer position.
        position: Point,
    },
    /// Touch event carrying every active contact; only the first is used.
    Touch {
        /// Event phase.
        phase: PointerPhase,
        /// Active contacts, in platform order. Empty on the final lift.
        contacts: Vec<Point>,
    },
}

impl DeviceEvent {
    /// Mouse event shorthand.
    pub fn mouse(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self::Mouse {
            phase,
            position: Point::new(x, y),
        }
    }

    /// Forward onto an input port.
    ///
    /// Touch down/move without any contact carries no position and is dropped.
    pub fn dispatch<P: InputPort + ?Sized>(&self, port: &mut P) {
        let (phase, position) = match self {
            Self::Mouse { phase, position } => (*phase, Some(*position)),
            Self::Touch { phase, contacts } => (*phase, contacts.first().copied()),
        };
        match (phase, position) {
            (PointerPhase::Down, Some(p)) => port.pointer_down(p),
            (PointerPhase::Move, Some(p)) => port.pointer_move(p),
            (PointerPhase::Up, _) => port.pointer_up(),
            (_, None) => {}
        }
    }
}

/// Receiver of pointer lifecycle callbacks, in device coordinates.
pub trait InputPort {
    /// Gesture start.
    fn pointer_down(&mut self, device: Point);
    /// Pointer motion; ignored by implementors when no gesture is active.
    fn pointer_move(&mut self, device: Point);
    /// Gesture end.
    fn pointer_up(&mut self);
}

/// Normalizes device positions into surface-local coordinates and tracks the gesture lifecycle.
///
/// Holds the raw samples of the current gesture only; the buffer is emptied on release.
#[derive(Clone, Debug, Default)]
pub struct InputCapture {
    origin: Point,
    active: bool,
    samples: Vec<Point>,
}

impl InputCapture {
    /// Capture with the surface's top-left at `origin` (device coordinates).
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            active: false,
            samples: Vec::new(),
        }
    }

    /// Update the surface origin, e.g. after layout moved the surface.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Current surface origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Convert a device position into surface-local coordinates.
    pub fn to_local(&self, device: Point) -> Point {
        Point::new(device.x - self.origin.x, device.y - self.origin.y)
    }

    /// Start a gesture. Returns the local position of the first sample.
    pub fn down(&mut self, device: Point) -> Point {
        let p = self.to_local(device);
        self.active = true;
        self.samples.clear();
        self.samples.push(p);
        p
    }

    /// Append a sample. `None` when no gesture is active.
    pub fn move_to(&mut self, device: Point) -> Option<Point> {
        if !self.active {
            return None;
        }
        let p = self.to_local(device);
        self.samples.push(p);
        Some(p)
    }

    /// End the gesture and clear the sample buffer. Returns whether a gesture was active.
    pub fn up(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.samples.clear();
        was_active
    }

    /// Drop the in-progress gesture without treating it as a release.
    pub fn cancel(&mut self) {
        self.active = false;
        self.samples.clear();
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raw local samples of the current gesture.
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/capture.rs"]
mod tests;
