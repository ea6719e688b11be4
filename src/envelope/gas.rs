/// Lifting gas.
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    pub name: String,
    pub molar_mass: f64, // kg/mol
}

impl Gas {
    pub fn helium() -> Self {
        Gas { name: "helium".into(), molar_mass: 4.002_602e-3 }
    }

    pub fn hydrogen() -> Self {
        Gas { name: "hydrogen".into(), molar_mass: 2.015_88e-3 }
    }
}
