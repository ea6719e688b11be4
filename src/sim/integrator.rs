use crate::dynamics::state::StateVector;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `y` by `dt` under `f(y) = dy/dt`.
///
/// The system is autonomous, so `f` takes no time argument.
pub fn rk4_step<F>(y: &StateVector, dt: f64, f: F) -> StateVector
where
    F: Fn(&StateVector) -> StateVector,
{
    let k1 = f(y);
    let k2 = f(&(y + k1 * (dt * 0.5)));
    let k3 = f(&(y + k2 * (dt * 0.5)));
    let k4 = f(&(y + k3 * dt));

    y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}
