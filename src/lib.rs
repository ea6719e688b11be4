pub mod physics;
pub mod dynamics;
pub mod envelope;
pub mod error;
pub mod sim;
pub mod io;

pub use envelope::{Balloon, BalloonBuilder, Gas, Material, Registry};
pub use error::SimError;
pub use sim::{simulate, simulate_with, AscentResult, ExitStatus, FlightParams, Sample};

// Short paths for the most used pieces
pub mod atmosphere {
    pub use crate::physics::atmosphere::*;
}

pub mod types {
    pub use crate::dynamics::state::{SimConfig, StateVector, TrajectoryState, G0, R_UNIVERSAL};
}
