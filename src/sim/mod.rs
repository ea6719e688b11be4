pub mod event;
pub mod integrator;
pub mod result;
pub mod runner;

pub use event::{AltitudeDetector, EventDetector, EventKind, FlightEvent};
pub use integrator::rk4_step;
pub use result::{AscentResult, Diagnostic, ExitStatus, Sample};
pub use runner::{simulate, simulate_with, FlightParams};
