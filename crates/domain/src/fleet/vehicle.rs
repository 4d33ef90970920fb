//! Shared vehicle identity and the `Vehicle` capability trait.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity shared by every vehicle in the fleet.
///
/// Brand and model are fixed at construction and only readable; the year can
/// be changed freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleBase {
    brand: String,
    model: String,
    year: i32,
}

impl VehicleBase {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
        }
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Formal representation, e.g. `Vehicle(brand='Volvo', model='FH', year=2018)`.
    pub fn repr(&self) -> String {
        format!(
            "Vehicle(brand='{}', model='{}', year={})",
            self.brand, self.model, self.year
        )
    }
}

impl fmt::Display for VehicleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.brand, self.model)
    }
}

/// Capabilities every fleet vehicle has.
///
/// Implementors supply their [`VehicleBase`] and their own `Display`, which is
/// expected to start with the base's display string. `start_engine` and
/// `repr` come from the base and are not meant to be overridden.
pub trait Vehicle: fmt::Display {
    fn base(&self) -> &VehicleBase;

    fn base_mut(&mut self) -> &mut VehicleBase;

    /// Status message for starting the engine.
    fn start_engine(&self) -> String {
        let base = self.base();
        format!(
            "The engine of the {} {} is now running.",
            base.brand(),
            base.model()
        )
    }

    /// Formal representation of the vehicle's shared identity.
    fn repr(&self) -> String {
        self.base().repr()
    }
}

impl Vehicle for VehicleBase {
    fn base(&self) -> &VehicleBase {
        self
    }

    fn base_mut(&mut self) -> &mut VehicleBase {
        self
    }
}
