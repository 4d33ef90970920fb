//! Passenger car variant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vehicle::{Vehicle, VehicleBase};

/// A passenger car with a door count.
///
/// # Example
///
/// ```
/// use guardrail_domain::fleet::{Car, Vehicle};
///
/// let car = Car::new("Toyota", "Corolla", 2020, 4);
///
/// assert_eq!(car.to_string(), "2020 Toyota Corolla with 4 doors");
/// assert_eq!(car.honk(), "Toyota Corolla says honk!");
/// assert_eq!(car.start_engine(), "The engine of the Toyota Corolla is now running.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(flatten)]
    base: VehicleBase,
    doors: u32,
}

impl Car {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32, doors: u32) -> Self {
        Self {
            base: VehicleBase::new(brand, model, year),
            doors,
        }
    }

    #[inline]
    pub fn doors(&self) -> u32 {
        self.doors
    }

    /// Sound the horn.
    pub fn honk(&self) -> String {
        format!("{} {} says honk!", self.base.brand(), self.base.model())
    }
}

impl Vehicle for Car {
    fn base(&self) -> &VehicleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VehicleBase {
        &mut self.base
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {} doors", self.base, self.doors)
    }
}
