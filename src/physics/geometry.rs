use std::f64::consts::PI;

// Sphere and thin-shell helpers shared by the envelope model.

pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Radius of the sphere holding `volume`. Non-negative for non-negative input.
pub fn sphere_radius(volume: f64) -> f64 {
    (3.0 * volume / (4.0 * PI)).cbrt()
}

/// Frontal (great-circle) area of a sphere.
pub fn cross_section(radius: f64) -> f64 {
    PI * radius * radius
}

/// Thickness of a spherical shell of given mass and wall density, assuming the
/// wall volume is conserved while it stretches.
pub fn shell_thickness(mass: f64, density: f64, radius: f64) -> f64 {
    mass / (4.0 * density * PI * radius * radius)
}
