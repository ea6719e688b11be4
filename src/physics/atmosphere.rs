use crate::dynamics::state::G0;

// ---------------------------------------------------------------------------
// Atmosphere interface
// ---------------------------------------------------------------------------

/// Altitude-indexed ambient conditions.
///
/// Implementations must be pure: the same altitude always yields the same
/// values. Results are only meaningful up to [`Atmosphere::ceiling`]; the
/// simulator refuses to step past it.
pub trait Atmosphere: Send + Sync {
    /// Ambient temperature, K.
    fn temperature(&self, altitude: f64) -> f64;
    /// Ambient pressure, Pa. Strictly positive below the ceiling.
    fn pressure(&self, altitude: f64) -> f64;
    /// Ambient density, kg/m^3.
    fn density(&self, altitude: f64) -> f64;
    /// Highest altitude (m) at which the model is defined.
    fn ceiling(&self) -> f64;

    /// All three properties at once.
    fn sample(&self, altitude: f64) -> Atmo {
        Atmo {
            temperature: self.temperature(altitude),
            pressure: self.pressure(altitude),
            density: self.density(altitude),
        }
    }
}

impl<A: Atmosphere + ?Sized> Atmosphere for &A {
    fn temperature(&self, altitude: f64) -> f64 {
        (**self).temperature(altitude)
    }
    fn pressure(&self, altitude: f64) -> f64 {
        (**self).pressure(altitude)
    }
    fn density(&self, altitude: f64) -> f64 {
        (**self).density(altitude)
    }
    fn ceiling(&self) -> f64 {
        (**self).ceiling()
    }
}

// ---------------------------------------------------------------------------
// ISA 1976 Standard Atmosphere (sea level to 86 km)
// ---------------------------------------------------------------------------

const R_AIR: f64 = 287.052_87; // specific gas constant for dry air, J/(kg·K)

const T0: f64 = 288.15;        // sea-level temperature, K
const P0: f64 = 101_325.0;     // sea-level pressure, Pa

/// Upper edge of the tabulated layers.
pub const ISA_CEILING: f64 = 86_000.0;

/// Atmospheric properties at a given geometric altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmo {
    pub density: f64,      // kg/m^3
    pub pressure: f64,     // Pa
    pub temperature: f64,  // K
}

/// ISA 1976 standard atmosphere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Isa;

impl Atmosphere for Isa {
    fn temperature(&self, altitude: f64) -> f64 {
        isa(altitude).temperature
    }

    fn pressure(&self, altitude: f64) -> f64 {
        isa(altitude).pressure
    }

    fn density(&self, altitude: f64) -> f64 {
        isa(altitude).density
    }

    fn ceiling(&self) -> f64 {
        ISA_CEILING
    }

    fn sample(&self, altitude: f64) -> Atmo {
        isa(altitude)
    }
}

/// ISA 1976 standard atmosphere model.
///
/// Piecewise temperature profile with 7 layers from 0-86 km.
/// Clamps negative altitudes to sea level; returns near-vacuum above 86 km.
pub fn isa(altitude_m: f64) -> Atmo {
    let h = altitude_m.max(0.0);

    let (temperature, pressure) = if h < 11_000.0 {
        // Troposphere: lapse -6.5 K/km
        gradient_layer(h, 0.0, T0, -0.0065, P0)
    } else if h < 20_000.0 {
        // Tropopause: isothermal 216.65 K
        isothermal_layer(h, 11_000.0, 216.65, 22_632.1)
    } else if h < 32_000.0 {
        // Stratosphere I: lapse +1.0 K/km
        gradient_layer(h, 20_000.0, 216.65, 0.001, 5_474.89)
    } else if h < 47_000.0 {
        // Stratosphere II: lapse +2.8 K/km
        gradient_layer(h, 32_000.0, 228.65, 0.0028, 868.019)
    } else if h < 51_000.0 {
        // Mesosphere I: isothermal 270.65 K
        isothermal_layer(h, 47_000.0, 270.65, 110.906)
    } else if h < 71_000.0 {
        // Mesosphere II: lapse -2.8 K/km
        gradient_layer(h, 51_000.0, 270.65, -0.0028, 66.9389)
    } else if h < ISA_CEILING {
        // Mesosphere III: lapse -2.0 K/km
        gradient_layer(h, 71_000.0, 214.65, -0.002, 3.956_42)
    } else {
        // Above 86 km: exponential decay approximation
        let t = 186.87;
        let p = 0.3734 * (-0.000_15 * (h - ISA_CEILING)).exp();
        (t, p.max(0.0))
    };

    let density = if temperature > 0.0 {
        pressure / (R_AIR * temperature)
    } else {
        0.0
    };

    Atmo {
        density,
        pressure,
        temperature,
    }
}

// ---------------------------------------------------------------------------
// Layer helpers
// ---------------------------------------------------------------------------

/// Gradient layer: T = T_base + lapse * (h - h_base)
fn gradient_layer(h: f64, h_base: f64, t_base: f64, lapse: f64, p_base: f64) -> (f64, f64) {
    let t = t_base + lapse * (h - h_base);
    let p = p_base * (t / t_base).powf(-G0 / (lapse * R_AIR));
    (t, p)
}

/// Isothermal layer: T = const, pressure decays exponentially
fn isothermal_layer(h: f64, h_base: f64, t: f64, p_base: f64) -> (f64, f64) {
    let p = p_base * ((-G0 / (R_AIR * t)) * (h - h_base)).exp();
    (t, p)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sea_level_standard_values() {
        let a = isa(0.0);
        assert_abs_diff_eq!(a.temperature, 288.15, epsilon = 0.01);
        assert_abs_diff_eq!(a.pressure, 101_325.0, epsilon = 1.0);
        assert_abs_diff_eq!(a.density, 1.225, epsilon = 0.001);
    }

    #[test]
    fn tropopause_11km() {
        let a = isa(11_000.0);
        assert_abs_diff_eq!(a.temperature, 216.65, epsilon = 0.5);
        assert_abs_diff_eq!(a.pressure, 22_632.0, epsilon = 100.0);
    }

    #[test]
    fn pressure_strictly_decreases_below_ceiling() {
        let mut prev = isa(0.0).pressure;
        for k in 1..172 {
            let p = isa(k as f64 * 500.0).pressure;
            assert!(p < prev, "pressure rose at {} m", k * 500);
            assert!(p > 0.0);
            prev = p;
        }
    }

    #[test]
    fn layer_boundaries_are_continuous() {
        for h in [11_000.0, 20_000.0, 32_000.0, 47_000.0, 51_000.0, 71_000.0] {
            let below = isa(h - 1e-3);
            let above = isa(h + 1e-3);
            assert_abs_diff_eq!(below.temperature, above.temperature, epsilon = 0.01);
            let rel = (below.pressure - above.pressure).abs() / below.pressure;
            assert!(rel < 1e-3, "pressure jump {rel} at {h} m");
        }
    }

    #[test]
    fn negative_altitude_clamps_to_sea_level() {
        let a = isa(-500.0);
        assert_abs_diff_eq!(a.temperature, 288.15, epsilon = 0.01);
    }

    #[test]
    fn trait_matches_free_function() {
        let atm = Isa;
        assert_eq!(atm.sample(25_000.0), isa(25_000.0));
        assert_eq!(atm.pressure(3_000.0), isa(3_000.0).pressure);
        assert_eq!(atm.ceiling(), ISA_CEILING);
    }
}
