//! Device keys: stable names for the apartment's fixed set of actuators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one of the actuators owned by the control engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKey {
    LivingRoomLight,
    BedroomLight,
    Thermostat,
    Dehumidifier,
    AirPurifier,
    CoffeeMaker,
    Siren,
    Camera,
}

impl DeviceKey {
    /// Every key, in display order.
    pub const ALL: [Self; 8] = [
        Self::LivingRoomLight,
        Self::BedroomLight,
        Self::Thermostat,
        Self::Dehumidifier,
        Self::AirPurifier,
        Self::CoffeeMaker,
        Self::Siren,
        Self::Camera,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LivingRoomLight => "living_room_light",
            Self::BedroomLight => "bedroom_light",
            Self::Thermostat => "thermostat",
            Self::Dehumidifier => "dehumidifier",
            Self::AirPurifier => "air_purifier",
            Self::CoffeeMaker => "coffee_maker",
            Self::Siren => "siren",
            Self::Camera => "camera",
        }
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device {0:?}")]
pub struct UnknownDevice(pub String);

impl FromStr for DeviceKey {
    type Err = UnknownDevice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| UnknownDevice(s.to_string()))
    }
}
