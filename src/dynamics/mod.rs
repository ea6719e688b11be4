pub mod ascent;
pub mod state;

pub use ascent::Ascent;
pub use state::{SimConfig, StateVector, TrajectoryState, G0, R_UNIVERSAL};
