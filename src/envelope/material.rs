// ---------------------------------------------------------------------------
// Envelope wall material
// ---------------------------------------------------------------------------

/// Elastic properties of an envelope wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub elastic_modulus: f64,  // E, Pa
    pub poisson_ratio: f64,    // mu, dimensionless
    pub density: f64,          // kg/m^3
    pub rel_strain_max: f64,   // relative strain at rupture
}

impl Material {
    /// Natural latex rubber used for sounding balloons.
    pub fn rubber() -> Self {
        Material {
            name: "rubber".into(),
            elastic_modulus: 8.0e6,
            poisson_ratio: 0.47,
            density: 915.0,
            rel_strain_max: 5.0,
        }
    }

    /// Biaxial modulus `E / (1 - mu)` relating strain to wall stress.
    pub fn biaxial_modulus(&self) -> f64 {
        self.elastic_modulus / (1.0 - self.poisson_ratio)
    }
}
