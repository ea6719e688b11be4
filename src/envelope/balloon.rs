use std::sync::Arc;

use super::{Gas, Material};
use crate::dynamics::state::{G0, R_UNIVERSAL};
use crate::error::{require_positive, SimError};
use crate::physics::aerodynamics;
use crate::physics::atmosphere::{Atmosphere, Isa};
use crate::physics::geometry;

/// Drag coefficient of a sphere.
pub const SPHERE_CD: f64 = 0.5;

// ---------------------------------------------------------------------------
// Balloon: static envelope model
// ---------------------------------------------------------------------------

/// Elastic gas-filled envelope.
///
/// Stores only the fill (envelope mass, unstretched radius, gas mass) and the
/// shared property records. Every altitude-dependent quantity is recomputed
/// from the atmosphere on each call, so queries have no side effects.
///
/// The optional `temp` argument on each query is the gas temperature in K;
/// `None` means the gas sits at ambient temperature.
#[derive(Debug, Clone)]
pub struct Balloon<A: Atmosphere = Isa> {
    envelope_mass: f64,
    r0: f64,
    gas_mass: f64,
    material: Arc<Material>,
    gas: Arc<Gas>,
    atmosphere: A,
}

impl Balloon<Isa> {
    pub fn builder(material: Arc<Material>, gas: Arc<Gas>) -> BalloonBuilder {
        BalloonBuilder::new(material, gas)
    }
}

impl<A: Atmosphere> Balloon<A> {
    pub fn envelope_mass(&self) -> f64 {
        self.envelope_mass
    }

    pub fn unstretched_radius(&self) -> f64 {
        self.r0
    }

    pub fn unstretched_diameter(&self) -> f64 {
        2.0 * self.r0
    }

    pub fn gas_mass(&self) -> f64 {
        self.gas_mass
    }

    pub fn drag_coefficient(&self) -> f64 {
        SPHERE_CD
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn gas(&self) -> &Gas {
        &self.gas
    }

    pub fn atmosphere(&self) -> &A {
        &self.atmosphere
    }

    fn gas_temperature(&self, alt: f64, temp: Option<f64>) -> f64 {
        temp.unwrap_or_else(|| self.atmosphere.temperature(alt))
    }

    /// Gas volume at ambient pressure, m^3.
    pub fn volume(&self, alt: f64, temp: Option<f64>) -> f64 {
        let t = self.gas_temperature(alt, temp);
        let p = self.atmosphere.pressure(alt);
        self.gas_mass * R_UNIVERSAL * t / (self.gas.molar_mass * p)
    }

    pub fn radius(&self, alt: f64, temp: Option<f64>) -> f64 {
        geometry::sphere_radius(self.volume(alt, temp))
    }

    pub fn diameter(&self, alt: f64, temp: Option<f64>) -> f64 {
        2.0 * self.radius(alt, temp)
    }

    /// Diameter elongation relative to the unstretched diameter.
    pub fn relative_strain(&self, alt: f64, temp: Option<f64>) -> f64 {
        let d0 = self.unstretched_diameter();
        (self.diameter(alt, temp) - d0) / d0
    }

    /// Wall stress, Pa, from linear elasticity.
    ///
    /// Not clamped: past `rel_strain_max` the value only says how far the
    /// wall has overshot, it is not a physical stress.
    pub fn stress(&self, alt: f64, temp: Option<f64>) -> f64 {
        self.relative_strain(alt, temp) * self.material.biaxial_modulus()
    }

    /// True once strain strictly exceeds the material limit.
    pub fn is_burst(&self, alt: f64, temp: Option<f64>) -> bool {
        self.relative_strain(alt, temp) > self.material.rel_strain_max
    }

    pub fn wall_thickness(&self, alt: f64, temp: Option<f64>) -> f64 {
        geometry::shell_thickness(self.envelope_mass, self.material.density, self.radius(alt, temp))
    }

    /// Archimedes force, N, positive up.
    pub fn buoyant_force(&self, alt: f64, temp: Option<f64>) -> f64 {
        self.atmosphere.density(alt) * G0 * self.volume(alt, temp)
    }

    /// Air resistance, N, opposing `vel`.
    pub fn drag_force(&self, alt: f64, vel: f64, temp: Option<f64>) -> f64 {
        let area = geometry::cross_section(self.radius(alt, temp));
        aerodynamics::drag_force(vel, self.atmosphere.density(alt), SPHERE_CD, area)
    }

    /// Sum of vertical forces on envelope and gas, N, positive up.
    ///
    /// After burst the gas is gone: only the empty envelope's weight remains
    /// and neither buoyancy nor drag is applied.
    pub fn net_vertical_force(&self, alt: f64, vel: f64, temp: Option<f64>, burst: bool) -> f64 {
        let mut f_sum = -self.mass(burst) * G0;
        if !burst {
            f_sum += self.buoyant_force(alt, temp);
            f_sum += self.drag_force(alt, vel, temp);
        }
        f_sum
    }

    pub fn mass(&self, burst: bool) -> f64 {
        if burst {
            self.envelope_mass
        } else {
            self.envelope_mass + self.gas_mass
        }
    }

    pub fn acceleration(&self, alt: f64, vel: f64, temp: Option<f64>, burst: bool) -> f64 {
        self.net_vertical_force(alt, vel, temp, burst) / self.mass(burst)
    }

    /// Net upward force at rest with an intact envelope, N.
    pub fn free_lift(&self, alt: f64) -> f64 {
        self.net_vertical_force(alt, 0.0, None, false)
    }
}

// ---------------------------------------------------------------------------
// Balloon builder
// ---------------------------------------------------------------------------

pub struct BalloonBuilder {
    material: Arc<Material>,
    gas: Arc<Gas>,
    envelope_mass: Option<f64>,
    radius: Option<f64>,
    diameter: Option<f64>,
    gas_mass: Option<f64>,
}

impl BalloonBuilder {
    pub fn new(material: Arc<Material>, gas: Arc<Gas>) -> Self {
        Self {
            material,
            gas,
            envelope_mass: None,
            radius: None,
            diameter: None,
            gas_mass: None,
        }
    }

    pub fn envelope_mass(mut self, v: f64) -> Self { self.envelope_mass = Some(v); self }
    pub fn radius(mut self, v: f64) -> Self { self.radius = Some(v); self }
    pub fn diameter(mut self, v: f64) -> Self { self.diameter = Some(v); self }
    pub fn gas_mass(mut self, v: f64) -> Self { self.gas_mass = Some(v); self }

    /// Build against the standard atmosphere.
    pub fn build(self) -> Result<Balloon<Isa>, SimError> {
        self.build_in(Isa)
    }

    /// Build against any atmosphere.
    ///
    /// Without an explicit gas mass, the unstretched sphere is filled to
    /// ambient pressure and temperature at altitude 0.
    pub fn build_in<A: Atmosphere>(self, atmosphere: A) -> Result<Balloon<A>, SimError> {
        let envelope_mass = require_positive(
            "envelope mass",
            self.envelope_mass.ok_or_else(|| SimError::invalid("envelope mass not given"))?,
        )?;

        let r0 = match (self.radius, self.diameter) {
            (Some(r), None) => require_positive("radius", r)?,
            (None, Some(d)) => require_positive("diameter", d)? / 2.0,
            _ => {
                return Err(SimError::invalid(
                    "give exactly one of unstretched radius or diameter",
                ))
            }
        };

        let gas_mass = match self.gas_mass {
            Some(m) => require_positive("gas mass", m)?,
            None => {
                let alt = 0.0;
                let vol = geometry::sphere_volume(r0);
                let m = self.gas.molar_mass * atmosphere.pressure(alt) * vol
                    / (R_UNIVERSAL * atmosphere.temperature(alt));
                if !(m.is_finite() && m > 0.0) {
                    return Err(SimError::ConstructionFailure(format!(
                        "fill at altitude 0 gives gas mass {m} kg"
                    )));
                }
                m
            }
        };

        Ok(Balloon {
            envelope_mass,
            r0,
            gas_mass,
            material: self.material,
            gas: self.gas,
            atmosphere,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::atmosphere::isa;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sounding_balloon() -> Balloon {
        Balloon::builder(Arc::new(Material::rubber()), Arc::new(Gas::helium()))
            .envelope_mass(3.0)
            .diameter(2.164)
            .build()
            .unwrap()
    }

    /// Isothermal atmosphere with linearly falling pressure; easy to reason about.
    struct LinearAtmosphere;

    impl Atmosphere for LinearAtmosphere {
        fn temperature(&self, _altitude: f64) -> f64 {
            250.0
        }
        fn pressure(&self, altitude: f64) -> f64 {
            100_000.0 - altitude
        }
        fn density(&self, altitude: f64) -> f64 {
            self.pressure(altitude) / (287.0 * 250.0)
        }
        fn ceiling(&self) -> f64 {
            99_000.0
        }
    }

    #[test]
    fn sea_level_round_trip() {
        let b = sounding_balloon();
        assert_relative_eq!(b.radius(0.0, None), 1.082, max_relative = 1e-12);
        assert_relative_eq!(b.volume(0.0, None), geometry::sphere_volume(1.082), max_relative = 1e-12);
        assert_abs_diff_eq!(b.relative_strain(0.0, None), 0.0, epsilon = 1e-12);
        assert!(!b.is_burst(0.0, None));
    }

    #[test]
    fn helium_fill_mass() {
        // ~224 mol of helium in a 5.3 m^3 sphere at ISA sea level
        let b = sounding_balloon();
        let expected = 4.002_602e-3 * 101_325.0 * geometry::sphere_volume(1.082) / (R_UNIVERSAL * 288.15);
        assert_relative_eq!(b.gas_mass(), expected, max_relative = 1e-3);
        assert!(b.gas_mass() > 0.85 && b.gas_mass() < 0.95);
    }

    #[test]
    fn wall_thickness_at_release() {
        let b = sounding_balloon();
        assert_relative_eq!(b.wall_thickness(0.0, None) * 1000.0, 0.2229, max_relative = 1e-3);
    }

    #[test]
    fn strain_grows_with_altitude() {
        let b = sounding_balloon();
        let mut prev = b.relative_strain(0.0, None);
        for k in 1..=90 {
            let s = b.relative_strain(k as f64 * 500.0, None);
            assert!(s >= prev, "strain fell at {} m", k * 500);
            prev = s;
        }
    }

    #[test]
    fn bursts_in_the_upper_stratosphere() {
        let b = sounding_balloon();
        assert!(!b.is_burst(30_000.0, None));
        assert!(b.is_burst(40_000.0, None));
        // Past the limit the stress keeps growing; it is only an overshoot signal
        assert!(b.stress(40_000.0, None) > 5.0 * b.material().biaxial_modulus());
    }

    #[test]
    fn queries_are_idempotent() {
        let b = sounding_balloon();
        for alt in [0.0, 12_345.0, 33_000.0] {
            assert_eq!(b.volume(alt, None), b.volume(alt, None));
            assert_eq!(b.stress(alt, Some(230.0)), b.stress(alt, Some(230.0)));
            assert_eq!(b.net_vertical_force(alt, 4.0, None, false), b.net_vertical_force(alt, 4.0, None, false));
        }
    }

    #[test]
    fn explicit_temperature_overrides_ambient() {
        let b = sounding_balloon();
        let ambient = isa(5_000.0).temperature;
        assert_eq!(b.volume(5_000.0, Some(ambient)), b.volume(5_000.0, None));
        assert!(b.volume(5_000.0, Some(ambient + 20.0)) > b.volume(5_000.0, None));
    }

    #[test]
    fn buoyancy_is_constant_in_isothermal_fill() {
        // rho_air * V is independent of pressure when gas and air share T
        let b = Balloon::builder(Arc::new(Material::rubber()), Arc::new(Gas::helium()))
            .envelope_mass(3.0)
            .diameter(2.164)
            .build_in(LinearAtmosphere)
            .unwrap();
        assert_relative_eq!(b.buoyant_force(0.0, None), b.buoyant_force(50_000.0, None), max_relative = 1e-12);
    }

    #[test]
    fn burst_boundary_is_strict() {
        let probe = Balloon::builder(Arc::new(Material::rubber()), Arc::new(Gas::helium()))
            .envelope_mass(3.0)
            .diameter(2.164)
            .build_in(LinearAtmosphere)
            .unwrap();
        let h = 97_000.0;
        let limit = probe.relative_strain(h, None);

        let material = Material { rel_strain_max: limit, ..Material::rubber() };
        let b = Balloon::builder(Arc::new(material), Arc::new(Gas::helium()))
            .envelope_mass(3.0)
            .diameter(2.164)
            .build_in(LinearAtmosphere)
            .unwrap();

        assert_eq!(b.relative_strain(h, None), limit);
        assert!(!b.is_burst(h, None), "equality must not burst");
        assert!(b.is_burst(h + 1.0, None));
    }

    #[test]
    fn drag_opposes_motion_and_vanishes_at_rest() {
        let b = sounding_balloon();
        assert!(b.drag_force(1_000.0, 5.0, None) < 0.0);
        assert!(b.drag_force(1_000.0, -5.0, None) > 0.0);
        assert_abs_diff_eq!(b.drag_force(1_000.0, 0.0, None), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn burst_removes_gas_and_lift() {
        let b = sounding_balloon();
        assert_eq!(b.mass(true), 3.0);
        assert_relative_eq!(b.mass(false), 3.0 + b.gas_mass());
        let f = b.net_vertical_force(20_000.0, 10.0, None, true);
        assert_relative_eq!(f, -3.0 * G0);
        assert_relative_eq!(b.acceleration(20_000.0, 10.0, None, true), -G0);
    }

    #[test]
    fn intact_balloon_has_free_lift() {
        let b = sounding_balloon();
        assert!(b.free_lift(0.0) > 0.0);
        assert_relative_eq!(
            b.acceleration(0.0, 0.0, None, false),
            b.free_lift(0.0) / b.mass(false)
        );
    }

    #[test]
    fn radius_xor_diameter() {
        let rubber = Arc::new(Material::rubber());
        let helium = Arc::new(Gas::helium());
        let both = Balloon::builder(rubber.clone(), helium.clone())
            .envelope_mass(3.0)
            .radius(1.0)
            .diameter(2.0)
            .build();
        assert!(matches!(both, Err(SimError::InvalidInput(_))));

        let neither = Balloon::builder(rubber.clone(), helium.clone()).envelope_mass(3.0).build();
        assert!(matches!(neither, Err(SimError::InvalidInput(_))));

        let by_radius = Balloon::builder(rubber, helium).envelope_mass(3.0).radius(1.082).build().unwrap();
        assert_eq!(by_radius.unstretched_diameter(), 2.164);
    }

    #[test]
    fn rejects_non_positive_fill() {
        let rubber = Arc::new(Material::rubber());
        let helium = Arc::new(Gas::helium());
        let res = Balloon::builder(rubber.clone(), helium.clone()).envelope_mass(-1.0).diameter(2.0).build();
        assert!(matches!(res, Err(SimError::InvalidInput(_))));
        let res = Balloon::builder(rubber, helium).envelope_mass(1.0).diameter(2.0).gas_mass(0.0).build();
        assert!(matches!(res, Err(SimError::InvalidInput(_))));
    }

    #[test]
    fn degenerate_atmosphere_fails_construction() {
        struct Vacuum;
        impl Atmosphere for Vacuum {
            fn temperature(&self, _: f64) -> f64 { 0.0 }
            fn pressure(&self, _: f64) -> f64 { 0.0 }
            fn density(&self, _: f64) -> f64 { 0.0 }
            fn ceiling(&self) -> f64 { 0.0 }
        }
        let res = Balloon::builder(Arc::new(Material::rubber()), Arc::new(Gas::helium()))
            .envelope_mass(3.0)
            .diameter(2.164)
            .build_in(Vacuum);
        assert!(matches!(res, Err(SimError::ConstructionFailure(_))));
    }
}
