use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Gas, Material};
use crate::error::SimError;

/// Named material and gas records, built once and then only read.
///
/// Records are handed out as `Arc` so a balloon shares them instead of
/// copying; nothing can mutate them after insertion.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    materials: BTreeMap<String, Arc<Material>>,
    gases: BTreeMap<String, Arc<Gas>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rubber envelope; helium and hydrogen fill.
    pub fn standard() -> Self {
        Self::new()
            .with_material(Material::rubber())
            .with_gas(Gas::helium())
            .with_gas(Gas::hydrogen())
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.insert(material.name.clone(), Arc::new(material));
        self
    }

    pub fn with_gas(mut self, gas: Gas) -> Self {
        self.gases.insert(gas.name.clone(), Arc::new(gas));
        self
    }

    pub fn material(&self, name: &str) -> Result<Arc<Material>, SimError> {
        self.materials
            .get(name)
            .cloned()
            .ok_or_else(|| SimError::invalid(format!("unknown balloon material '{name}'")))
    }

    pub fn gas(&self, name: &str) -> Result<Arc<Gas>, SimError> {
        self.gases
            .get(name)
            .cloned()
            .ok_or_else(|| SimError::invalid(format!("unknown gas '{name}'")))
    }

    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    pub fn gas_names(&self) -> impl Iterator<Item = &str> {
        self.gases.keys().map(String::as_str)
    }
}
