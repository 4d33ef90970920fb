pub mod aggregates;
pub mod common;
pub mod error;
pub mod fleet;
pub mod guarded;
pub mod value_objects;

pub use aggregates::{BankAccount, Car, MusicPlayer};
pub use error::{DomainError, ErrorKind};
pub use guarded::GuardedEntity;

// Fleet types stay namespaced: `fleet::Car` would clash with the guarded `Car`.
pub use fleet::{FleetVehicle, LoadReport, Truck, Vehicle, VehicleBase};

pub use value_objects::{Color, ModelYear, NonNegativeAmount, PositiveAmount, FIRST_MODEL_YEAR};
