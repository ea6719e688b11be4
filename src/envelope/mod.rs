pub mod balloon;
pub mod gas;
pub mod material;
pub mod registry;

pub use balloon::{Balloon, BalloonBuilder, SPHERE_CD};
pub use gas::Gas;
pub use material::Material;
pub use registry::Registry;
