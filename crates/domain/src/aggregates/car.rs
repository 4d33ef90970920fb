//! Car aggregate - a vehicle record that tracks mileage and paint color
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: mileage can only grow through `drive`
//! - **Newtypes**: `ModelYear`, `NonNegativeAmount`, `Color` carry the checks
//! - **Valid by construction**: `new()` validates every field or returns nothing

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::common::args;
use crate::error::DomainError;
use crate::guarded::{guarded, GuardedEntity};
use crate::value_objects::{Color, ModelYear, NonNegativeAmount};

/// A car with a running odometer.
///
/// # Invariants
///
/// - `year` is never earlier than 1886 (enforced by `ModelYear`)
/// - `mileage` is never negative
/// - `color`, once set, is never blank
///
/// # Example
///
/// ```
/// use guardrail_domain::aggregates::Car;
///
/// let mut car = Car::new("Honda", "Civic", 2018).unwrap();
/// car.drive(150.5).unwrap();
///
/// assert_eq!(car.mileage(), 150.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    make: String,
    model: String,
    year: ModelYear,
    mileage: f64,
    color: Option<Color>,
}

impl Car {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a new car with zero mileage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `year` is before 1886.
    ///
    /// # Example
    ///
    /// ```
    /// use guardrail_domain::aggregates::Car;
    ///
    /// let car = Car::new("Toyota", "Corolla", 2020).unwrap();
    /// assert_eq!(car.mileage(), 0.0);
    ///
    /// assert!(Car::new("Ford", "Mustang", 1800).is_err());
    /// ```
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Result<Self, DomainError> {
        Self::with_mileage(make, model, year, 0.0)
    }

    /// Create a new car with an existing odometer reading.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `year` is before 1886 or
    /// `mileage` is negative. The year is checked first.
    pub fn with_mileage(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: f64,
    ) -> Result<Self, DomainError> {
        let (make, model) = (make.into(), model.into());
        guarded(Self::ENTITY, "new", || Self::build(make, model, year, mileage))
    }

    fn build(make: String, model: String, year: i32, mileage: f64) -> Result<Self, DomainError> {
        let year = ModelYear::new(year)?;
        let mileage = NonNegativeAmount::new("mileage", mileage)?;
        Ok(Self {
            make,
            model,
            year,
            mileage: mileage.get(),
            color: None,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the manufacturer.
    #[inline]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Returns the model name.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the model year.
    #[inline]
    pub fn year(&self) -> ModelYear {
        self.year
    }

    /// Returns the odometer reading in kilometers.
    #[inline]
    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    /// Returns the paint color, if the car has been repainted.
    #[inline]
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Add `kilometers` to the odometer. Zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `kilometers` is negative.
    pub fn drive(&mut self, kilometers: f64) -> Result<(), DomainError> {
        guarded(Self::ENTITY, "drive", || self.add_distance(kilometers))
    }

    /// Repaint the car.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `color` is empty or whitespace only.
    pub fn repaint(&mut self, color: impl Into<String>) -> Result<(), DomainError> {
        let color = color.into();
        guarded(Self::ENTITY, "repaint", || self.set_color(color))
    }

    fn add_distance(&mut self, kilometers: f64) -> Result<(), DomainError> {
        let distance = NonNegativeAmount::new("kilometers", kilometers)?;
        let mileage = self.mileage + distance.get();
        if !mileage.is_finite() {
            return Err(DomainError::invalid_value("mileage would overflow"));
        }
        self.mileage = mileage;
        Ok(())
    }

    fn set_color(&mut self, color: String) -> Result<(), DomainError> {
        self.color = Some(Color::new(color)?);
        Ok(())
    }
}

impl GuardedEntity for Car {
    const ENTITY: &'static str = "Car";
    const OPERATIONS: &'static [&'static str] = &["drive", "repaint"];

    fn from_json(arguments: &Value) -> Result<Self, DomainError> {
        guarded(Self::ENTITY, "new", || {
            let make = args::text(args::required(arguments, "make")?, "make")?;
            let model = args::text(args::required(arguments, "model")?, "model")?;
            let year = args::integer(args::required(arguments, "year")?, "year")?;
            let mileage = args::optional(arguments, "mileage")?
                .map(|value| args::number(value, "mileage"))
                .transpose()?
                .unwrap_or(0.0);

            // Out-of-range integers cannot be valid years either way.
            let year = i32::try_from(year)
                .map_err(|_| DomainError::invalid_value("year is out of range"))?;
            Self::build(make.to_owned(), model.to_owned(), year, mileage)
        })
    }

    fn apply(&mut self, operation: &str, argument: &Value) -> Result<(), DomainError> {
        guarded(Self::ENTITY, operation, || match operation {
            "drive" => {
                let kilometers = args::number(argument, "kilometers")?;
                self.add_distance(kilometers)
            }
            "repaint" => {
                let color = args::text(argument, "color")?;
                self.set_color(color.to_owned())
            }
            _ => Err(DomainError::unknown_operation(Self::ENTITY, operation)),
        })
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarWireFormat {
    make: String,
    model: String,
    year: i32,
    #[serde(default)]
    mileage: f64,
    #[serde(default)]
    color: Option<String>,
}

impl Serialize for Car {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CarWireFormat {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.value(),
            mileage: self.mileage,
            color: self.color.as_ref().map(|c| c.as_str().to_owned()),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Car {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CarWireFormat::deserialize(deserializer)?;

        let mut car = Car::build(wire.make, wire.model, wire.year, wire.mileage)
            .map_err(serde::de::Error::custom)?;
        car.color = wire
            .color
            .map(Color::new)
            .transpose()
            .map_err(serde::de::Error::custom)?;
        Ok(car)
    }
}

// ============================================================================
// Tests
// ============================================================================
