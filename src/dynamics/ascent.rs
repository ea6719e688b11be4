use crate::dynamics::state::{StateVector, G0};
use crate::envelope::Balloon;
use crate::physics::atmosphere::Atmosphere;

// ---------------------------------------------------------------------------
// Vertical equation of motion: balloon + hanging payload
// ---------------------------------------------------------------------------

/// Balloon carrying a point-mass payload.
///
/// The payload adds weight and inertia but no buoyancy or drag.
#[derive(Debug, Clone, Copy)]
pub struct Ascent<'a, A: Atmosphere> {
    pub balloon: &'a Balloon<A>,
    pub payload: f64, // kg
}

impl<'a, A: Atmosphere> Ascent<'a, A> {
    pub fn new(balloon: &'a Balloon<A>, payload: f64) -> Self {
        Self { balloon, payload }
    }

    pub fn total_mass(&self, burst: bool) -> f64 {
        self.balloon.mass(burst) + self.payload
    }

    /// Net vertical force on the whole train, N.
    pub fn net_force(&self, alt: f64, vel: f64, burst: bool) -> f64 {
        self.balloon.net_vertical_force(alt, vel, None, burst) - self.payload * G0
    }

    /// `d/dt [altitude, velocity] = [velocity, F / m]`.
    pub fn derivatives(&self, y: &StateVector, burst: bool) -> StateVector {
        let (alt, vel) = (y[0], y[1]);
        StateVector::new(vel, self.net_force(alt, vel, burst) / self.total_mass(burst))
    }
}
