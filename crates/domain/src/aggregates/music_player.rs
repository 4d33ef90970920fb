//! MusicPlayer aggregate - a portable player with a rechargeable battery

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::common::args;
use crate::error::DomainError;
use crate::guarded::{guarded, GuardedEntity};
use crate::value_objects::PositiveAmount;

/// A music player whose battery is measured in hours of playback.
///
/// # Invariants
///
/// - `battery_life` is positive and fixed at creation
/// - `0 <= current_battery <= battery_life`
///
/// # Example
///
/// ```
/// use guardrail_domain::aggregates::MusicPlayer;
///
/// let mut player = MusicPlayer::new("Apple", "iPod", 10.0).unwrap();
/// player.play_music(2.5).unwrap();
///
/// assert_eq!(player.current_battery(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MusicPlayer {
    brand: String,
    model: String,
    battery_life: f64,
    current_battery: f64,
}

impl MusicPlayer {
    /// Create a fully charged player.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `battery_life` is not positive.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        battery_life: f64,
    ) -> Result<Self, DomainError> {
        let (brand, model) = (brand.into(), model.into());
        guarded(Self::ENTITY, "new", || Self::build(brand, model, battery_life))
    }

    fn build(brand: String, model: String, battery_life: f64) -> Result<Self, DomainError> {
        let battery_life = PositiveAmount::new("battery_life", battery_life)?.get();
        Ok(Self {
            brand,
            model,
            battery_life,
            current_battery: battery_life,
        })
    }

    /// Returns the brand.
    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the model name.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the battery capacity in hours.
    #[inline]
    pub fn battery_life(&self) -> f64 {
        self.battery_life
    }

    /// Returns the remaining charge in hours.
    #[inline]
    pub fn current_battery(&self) -> f64 {
        self.current_battery
    }

    /// Play music for `duration` hours, draining the battery.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `duration` is not positive or
    /// exceeds the remaining charge.
    pub fn play_music(&mut self, duration: f64) -> Result<(), DomainError> {
        guarded(Self::ENTITY, "play_music", || self.drain(duration))
    }

    /// Charge the battery for `hours`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `hours` is not positive or the
    /// charge would exceed the battery capacity.
    pub fn recharge(&mut self, hours: f64) -> Result<(), DomainError> {
        guarded(Self::ENTITY, "recharge", || self.charge(hours))
    }

    fn drain(&mut self, duration: f64) -> Result<(), DomainError> {
        let duration = PositiveAmount::new("duration", duration)?;
        if duration.get() > self.current_battery {
            return Err(DomainError::invalid_value(format!(
                "insufficient charge: {} hours left, {} requested",
                self.current_battery, duration
            )));
        }
        self.current_battery -= duration.get();
        Ok(())
    }

    fn charge(&mut self, hours: f64) -> Result<(), DomainError> {
        let hours = PositiveAmount::new("hours", hours)?;
        if self.current_battery + hours.get() > self.battery_life {
            return Err(DomainError::invalid_value(format!(
                "recharge of {} hours exceeds battery capacity of {} hours",
                hours, self.battery_life
            )));
        }
        self.current_battery += hours.get();
        Ok(())
    }
}

impl GuardedEntity for MusicPlayer {
    const ENTITY: &'static str = "MusicPlayer";
    const OPERATIONS: &'static [&'static str] = &["play_music", "recharge"];

    fn from_json(arguments: &Value) -> Result<Self, DomainError> {
        guarded(Self::ENTITY, "new", || {
            let brand = args::text(args::required(arguments, "brand")?, "brand")?;
            let model = args::text(args::required(arguments, "model")?, "model")?;
            let battery_life =
                args::number(args::required(arguments, "batteryLife")?, "batteryLife")?;
            Self::build(brand.to_owned(), model.to_owned(), battery_life)
        })
    }

    fn apply(&mut self, operation: &str, argument: &Value) -> Result<(), DomainError> {
        guarded(Self::ENTITY, operation, || match operation {
            "play_music" => self.drain(args::number(argument, "duration")?),
            "recharge" => self.charge(args::number(argument, "hours")?),
            _ => Err(DomainError::unknown_operation(Self::ENTITY, operation)),
        })
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MusicPlayerWireFormat {
    brand: String,
    model: String,
    battery_life: f64,
    /// Absent means fully charged.
    #[serde(default)]
    current_battery: Option<f64>,
}

impl Serialize for MusicPlayer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MusicPlayerWireFormat {
            brand: self.brand.clone(),
            model: self.model.clone(),
            battery_life: self.battery_life,
            current_battery: Some(self.current_battery),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MusicPlayer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let wire = MusicPlayerWireFormat::deserialize(deserializer)?;
        let mut player = MusicPlayer::build(wire.brand, wire.model, wire.battery_life)
            .map_err(D::Error::custom)?;

        if let Some(current) = wire.current_battery {
            if !(0.0..=player.battery_life).contains(&current) {
                return Err(D::Error::custom(format!(
                    "current battery {} is outside 0..={}",
                    current, player.battery_life
                )));
            }
            player.current_battery = current;
        }
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn create_test_player() -> MusicPlayer {
        MusicPlayer::new("Sony", "Walkman", 15.0).unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_starts_fully_charged() {
            let player = create_test_player();
            assert_eq!(player.brand(), "Sony");
            assert_eq!(player.model(), "Walkman");
            assert_eq!(player.battery_life(), 15.0);
            assert_eq!(player.current_battery(), 15.0);
        }

        #[test]
        fn non_positive_capacity_is_rejected() {
            assert!(MusicPlayer::new("Sony", "Walkman", 0.0).is_err());
            assert!(MusicPlayer::new("Sony", "Walkman", -8.0).is_err());
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn walkman_session() {
            let mut player = create_test_player();

            let err = player.play_music(20.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert_eq!(player.current_battery(), 15.0);

            player.play_music(5.0).unwrap();
            assert_eq!(player.current_battery(), 10.0);

            let err = player.recharge(10.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert_eq!(player.current_battery(), 10.0);

            player.recharge(5.0).unwrap();
            assert_eq!(player.current_battery(), 15.0);
        }

        #[test]
        fn play_until_empty() {
            let mut player = MusicPlayer::new("Apple", "iPod", 10.0).unwrap();
            player.play_music(10.0).unwrap();
            assert_eq!(player.current_battery(), 0.0);
            assert!(player.play_music(0.5).is_err());
        }

        #[test]
        fn recharge_on_full_battery_is_rejected() {
            let mut player = MusicPlayer::new("Samsung", "Galaxy Player", 8.0).unwrap();
            assert!(player.recharge(3.0).is_err());
            assert_eq!(player.current_battery(), 8.0);
        }

        #[test]
        fn zero_duration_is_rejected() {
            let mut player = create_test_player();
            assert_eq!(
                player.play_music(0.0).unwrap_err(),
                DomainError::invalid_value("duration must be positive")
            );
            assert_eq!(
                player.recharge(0.0).unwrap_err(),
                DomainError::invalid_value("hours must be positive")
            );
        }

        #[test]
        fn huge_recharge_is_rejected_as_overcharge() {
            let mut player = create_test_player();
            player.play_music(5.0).unwrap();

            let err = player.recharge(f64::MAX).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert_eq!(player.current_battery(), 10.0);
        }
    }

    mod dynamic {
        use super::*;

        #[test]
        fn from_json_requires_capacity() {
            let err = MusicPlayer::from_json(&json!({ "brand": "Sony", "model": "Walkman" }))
                .unwrap_err();
            assert_eq!(err, DomainError::invalid_type("batteryLife", "present"));
        }

        #[test]
        fn apply_play_and_recharge() {
            let mut player = create_test_player();
            player.apply("play_music", &json!(2.5)).unwrap();
            assert_eq!(player.current_battery(), 12.5);

            let err = player.apply("recharge", &json!(null)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType);

            player.apply("recharge", &json!(2.5)).unwrap();
            assert_eq!(player.current_battery(), 15.0);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn roundtrip_keeps_partial_charge() {
            let mut player = create_test_player();
            player.play_music(4.0).unwrap();

            let json = serde_json::to_string(&player).unwrap();
            let restored: MusicPlayer = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, player);
        }

        #[test]
        fn missing_charge_means_full() {
            let json = r#"{"brand":"Sony","model":"Walkman","batteryLife":15.0}"#;
            let player: MusicPlayer = serde_json::from_str(json).unwrap();
            assert_eq!(player.current_battery(), 15.0);
        }

        #[test]
        fn overcharged_snapshot_is_rejected() {
            let snapshot = json!({
                "brand": "Sony",
                "model": "Walkman",
                "batteryLife": 15.0,
                "currentBattery": 16.0
            });
            assert!(serde_json::from_value::<MusicPlayer>(snapshot).is_err());
        }
    }
}
