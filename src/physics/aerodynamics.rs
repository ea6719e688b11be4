use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

/// Speed (m/s) above which the quadratic drag law is no longer trusted.
pub const DRAG_SPEED_LIMIT: f64 = 150.0;

/// Below this speed (m/s) drag grows linearly instead of quadratically.
pub const LINEAR_DRAG_SPEED: f64 = 1.0;

static HIGH_SPEED_WARNED: AtomicBool = AtomicBool::new(false);

/// Vertical drag force on a body moving with `vel` (positive = up).
///
/// Magnitude `cd * rho * |v|^n / 2 * area` with `n = 1` under 1 m/s and
/// `n = 2` otherwise; the sign always opposes the motion. Near-sonic speeds
/// still evaluate; the first one in the process logs a warning, later ones a
/// debug event.
pub fn drag_force(vel: f64, density: f64, cd: f64, area: f64) -> f64 {
    let speed = vel.abs();
    if speed > DRAG_SPEED_LIMIT {
        if HIGH_SPEED_WARNED.swap(true, Ordering::Relaxed) {
            debug!(velocity = vel, limit = DRAG_SPEED_LIMIT, "speed outside the validity range of the drag law");
        } else {
            warn!(velocity = vel, limit = DRAG_SPEED_LIMIT, "speed outside the validity range of the drag law");
        }
    }
    let n = if speed < LINEAR_DRAG_SPEED { 1 } else { 2 };
    let magnitude = cd * density * speed.powi(n) / 2.0 * area;
    -magnitude.copysign(vel)
}
