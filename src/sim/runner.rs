use tracing::{debug, info, warn};

use crate::dynamics::state::{SimConfig, TrajectoryState};
use crate::dynamics::Ascent;
use crate::envelope::{Balloon, Registry};
use crate::error::{require_non_negative, require_positive, SimError};
use crate::physics::aerodynamics::DRAG_SPEED_LIMIT;
use crate::physics::atmosphere::{Atmosphere, Isa};
use super::event::{EventDetector, EventKind, FlightEvent};
use super::integrator::rk4_step;
use super::result::{AscentResult, Diagnostic, ExitStatus, Sample};

// ---------------------------------------------------------------------------
// Flight parameters (the single public entry point's input)
// ---------------------------------------------------------------------------

/// Free-lift flight of a balloon carrying a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightParams {
    pub duration: f64,      // s
    pub envelope_mass: f64, // kg
    pub diameter: f64,      // m, unstretched
    pub material: String,
    pub gas: String,
    pub payload: f64,       // kg
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            duration: 3.0 * 3600.0,
            envelope_mass: 3.0,
            diameter: 2.164,
            material: "rubber".into(),
            gas: "helium".into(),
            payload: 0.0,
        }
    }
}

impl FlightParams {
    /// Check every argument before any numerical work.
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("duration", self.duration)?;
        require_positive("envelope mass", self.envelope_mass)?;
        require_positive("diameter", self.diameter)?;
        require_non_negative("payload", self.payload)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Simulation entry points
// ---------------------------------------------------------------------------

/// Validate, build the balloon from the registry, and run the ascent in the
/// standard atmosphere.
pub fn simulate(params: &FlightParams, registry: &Registry) -> Result<AscentResult, SimError> {
    params.validate()?;
    let material = registry.material(&params.material)?;
    let gas = registry.gas(&params.gas)?;

    let balloon = Balloon::builder(material, gas)
        .envelope_mass(params.envelope_mass)
        .diameter(params.diameter)
        .build_in(Isa)
        .map_err(|e| match e {
            SimError::InvalidInput(msg) => SimError::ConstructionFailure(msg),
            other => other,
        })?;

    info!(
        duration = params.duration,
        envelope_mass = params.envelope_mass,
        diameter = params.diameter,
        material = %params.material,
        gas = %params.gas,
        payload = params.payload,
        gas_mass = balloon.gas_mass(),
        "starting free-lift simulation"
    );

    let config = SimConfig::for_duration(params.duration);
    simulate_with(&balloon, params.payload, &config, &mut [])
}

/// Run the fixed-step ascent loop for an already built balloon.
///
/// After every completed step the new state is checked, in order: finite,
/// inside the atmosphere, envelope intact, above the release altitude. The
/// first failing check ends the loop. A step that bursts the envelope is
/// accepted even if it lands past the ceiling. Detectors see every accepted
/// step.
pub fn simulate_with<A: Atmosphere>(
    balloon: &Balloon<A>,
    payload: f64,
    config: &SimConfig,
    detectors: &mut [&mut dyn EventDetector],
) -> Result<AscentResult, SimError> {
    require_non_negative("payload", payload)?;
    require_positive("time step", config.dt)?;
    require_positive("duration", config.max_time)?;

    let ascent = Ascent::new(balloon, payload);
    let ceiling = balloon.atmosphere().ceiling();
    let points = config.grid_points();

    let mut state = TrajectoryState::release();
    let mut trajectory = Vec::with_capacity(points.min(200_000));
    trajectory.push(Sample::from(&state));

    let mut events = vec![FlightEvent::at(&state, EventKind::Release)];
    let mut diagnostics = Vec::new();
    let mut burst_sample = None;
    let mut exit_status = ExitStatus::DurationExhausted;

    for k in 1..points {
        let time = k as f64 * config.dt;
        let y = rk4_step(&state.vector(), config.dt, |y| ascent.derivatives(y, state.burst));
        let next = state.advanced(time, &y);

        if !next.is_finite() {
            return Err(SimError::IntegrationFailure {
                time,
                reason: format!("non-finite state (altitude {}, velocity {})", next.altitude, next.velocity),
            });
        }
        let burst = balloon.is_burst(next.altitude, None);
        if !burst && next.altitude > ceiling {
            return Err(SimError::IntegrationFailure {
                time,
                reason: format!("altitude {:.0} m is above the atmosphere ceiling {:.0} m", next.altitude, ceiling),
            });
        }

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&state, &next) {
                events.push(FlightEvent::at(&next, kind));
            }
        }

        if next.velocity.abs() > DRAG_SPEED_LIMIT && diagnostics.is_empty() {
            warn!(time, velocity = next.velocity, "ascent speed outside drag law range");
            diagnostics.push(Diagnostic::HighSpeedDrag { time, velocity: next.velocity });
        }

        state = next;
        let sample = Sample::from(&state);
        trajectory.push(sample);

        if burst {
            state.burst = true;
            debug!(time, altitude = state.altitude, "envelope burst");
            events.push(FlightEvent::at(&state, EventKind::Burst));
            burst_sample = Some(sample);
            exit_status = ExitStatus::Burst;
            break;
        }

        if state.altitude < 0.0 {
            warn!(time, payload, "balloon sank below release altitude");
            exit_status = ExitStatus::NoFreeLift;
            break;
        }
    }

    let result = AscentResult::from_run(trajectory, exit_status, burst_sample, events, diagnostics);
    info!(
        status = %result.exit_status,
        apex_altitude = result.apex_altitude,
        time_to_apex = result.time_to_apex,
        "simulation finished"
    );
    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
