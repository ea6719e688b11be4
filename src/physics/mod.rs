pub mod aerodynamics;
pub mod atmosphere;
pub mod geometry;

pub use atmosphere::{isa, Atmo, Atmosphere, Isa, ISA_CEILING};
