use crate::dynamics::state::TrajectoryState;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Release,
    Burst,
    Apex,
    Altitude { threshold: f64, ascending: bool },
}

/// A discrete event that occurred during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightEvent {
    pub time: f64,
    pub altitude: f64,
    pub kind: EventKind,
}

impl FlightEvent {
    pub fn at(state: &TrajectoryState, kind: EventKind) -> Self {
        Self { time: state.time, altitude: state.altitude, kind }
    }
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &TrajectoryState, current: &TrajectoryState) -> Option<EventKind>;
}

/// Detects when altitude crosses a threshold (ascending or descending).
pub struct AltitudeDetector {
    pub altitude: f64,
    pub ascending: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, ascending: bool) -> Self {
        Self { altitude, ascending, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &TrajectoryState, current: &TrajectoryState) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.ascending {
            prev.altitude < self.altitude && current.altitude >= self.altitude
        } else {
            prev.altitude > self.altitude && current.altitude <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Altitude { threshold: self.altitude, ascending: self.ascending })
        } else {
            None
        }
    }
}
