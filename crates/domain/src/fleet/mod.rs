//! Fleet vehicles - a closed family of variants sharing a base identity
//!
//! Composition stands in for inheritance: each variant embeds a
//! [`VehicleBase`] and implements [`Vehicle`] to expose it, then adds its own
//! fields and operations (`Car::honk`, `Truck::load`).

mod car;
mod truck;
mod vehicle;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use car::Car;
pub use truck::{LoadReport, Truck};
pub use vehicle::{Vehicle, VehicleBase};

/// Any vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FleetVehicle {
    Car(Car),
    Truck(Truck),
}

impl FleetVehicle {
    /// Variant name, as used in the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Car(_) => "car",
            Self::Truck(_) => "truck",
        }
    }
}

impl Vehicle for FleetVehicle {
    fn base(&self) -> &VehicleBase {
        match self {
            Self::Car(car) => car.base(),
            Self::Truck(truck) => truck.base(),
        }
    }

    fn base_mut(&mut self) -> &mut VehicleBase {
        match self {
            Self::Car(car) => car.base_mut(),
            Self::Truck(truck) => truck.base_mut(),
        }
    }
}

impl fmt::Display for FleetVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car(car) => fmt::Display::fmt(car, f),
            Self::Truck(truck) => fmt::Display::fmt(truck, f),
        }
    }
}

impl From<Car> for FleetVehicle {
    fn from(car: Car) -> Self {
        Self::Car(car)
    }
}

impl From<Truck> for FleetVehicle {
    fn from(truck: Truck) -> Self {
        Self::Truck(truck)
    }
}
