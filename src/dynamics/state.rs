use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665;              // standard gravity, m/s^2
pub const R_UNIVERSAL: f64 = 8.314_462_618; // universal gas constant, J/(mol·K)

// ---------------------------------------------------------------------------
// Vertical flight state
// ---------------------------------------------------------------------------

/// ODE state vector `[altitude, vertical velocity]`.
pub type StateVector = Vector2<f64>;

/// State of one ascent run at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryState {
    pub time: f64,       // s
    pub altitude: f64,   // m
    pub velocity: f64,   // m/s, positive up
    pub burst: bool,     // latches once the envelope ruptures
}

impl TrajectoryState {
    /// At rest on the ground, envelope intact.
    pub fn release() -> Self {
        Self { time: 0.0, altitude: 0.0, velocity: 0.0, burst: false }
    }

    pub fn vector(&self) -> StateVector {
        StateVector::new(self.altitude, self.velocity)
    }

    /// New state at `time` carrying the integrated vector; burst is unchanged.
    pub fn advanced(&self, time: f64, y: &StateVector) -> Self {
        Self { time, altitude: y[0], velocity: y[1], burst: self.burst }
    }

    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.altitude.is_finite() && self.velocity.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub dt: f64,
    pub max_time: f64,
}

impl SimConfig {
    /// Fixed-step grid for a run of `duration` seconds: one hundred steps for
    /// short runs, one-second steps otherwise.
    pub fn for_duration(duration: f64) -> Self {
        let dt = if duration < 100.0 { duration / 100.0 } else { 1.0 };
        Self { dt, max_time: duration }
    }

    /// Number of grid points `k·dt` strictly before `max_time`.
    pub fn grid_points(&self) -> usize {
        (self.max_time / self.dt).ceil() as usize
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::for_duration(3.0 * 3600.0)
    }
}
