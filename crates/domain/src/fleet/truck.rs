//! Cargo truck variant with a per-load capacity check.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vehicle::{Vehicle, VehicleBase};

/// A truck rated for `capacity` tons.
///
/// The truck does not track what it carries; [`Truck::load`] only reports
/// whether a single load fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    #[serde(flatten)]
    base: VehicleBase,
    capacity: f64,
}

/// Outcome of offering a load to a truck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadReport {
    /// The load fits.
    Loaded { weight: f64 },
    /// The load is heavier than the truck's capacity.
    OverCapacity { weight: f64, capacity: f64 },
}

impl LoadReport {
    /// Returns true if the load was accepted.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { weight } => write!(f, "Loaded {} tons into the truck.", weight),
            Self::OverCapacity { weight, capacity } => write!(
                f,
                "Cannot load {} tons. Exceeds capacity of {} tons.",
                weight, capacity
            ),
        }
    }
}

impl Truck {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        capacity: f64,
    ) -> Self {
        Self {
            base: VehicleBase::new(brand, model, year),
            capacity,
        }
    }

    /// Rated capacity in tons.
    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Check a load of `weight` tons against the capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail_domain::fleet::{LoadReport, Truck};
    ///
    /// let truck = Truck::new("Volvo", "FH", 2018, 20.0);
    ///
    /// assert_eq!(truck.load(15.0).to_string(), "Loaded 15 tons into the truck.");
    /// assert_eq!(
    ///     truck.load(25.0),
    ///     LoadReport::OverCapacity { weight: 25.0, capacity: 20.0 }
    /// );
    /// ```
    pub fn load(&self, weight: f64) -> LoadReport {
        if weight > self.capacity {
            tracing::debug!(weight, capacity = self.capacity, "load exceeds truck capacity");
            LoadReport::OverCapacity {
                weight,
                capacity: self.capacity,
            }
        } else {
            LoadReport::Loaded { weight }
        }
    }
}

impl Vehicle for Truck {
    fn base(&self) -> &VehicleBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VehicleBase {
        &mut self.base
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with a capacity of {} tons", self.base, self.capacity)
    }
}
