//! Read-model handed to drivers for rendering.

use serde::{Deserialize, Serialize};

use crate::actuator::Actuator;
use crate::advisory::ClothingAdvice;
use crate::device::DeviceKey;
use crate::mode::{Mode, SecurityStatus};
use crate::status::Status;

/// One environment pass worth of raw readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    /// °C.
    pub temperature: f64,
    /// Percent.
    pub humidity: f64,
    /// µg/m³.
    pub dust: f64,
}

impl Readings {
    #[must_use]
    pub const fn new(temperature: f64, humidity: f64, dust: f64) -> Self {
        Self {
            temperature,
            humidity,
            dust,
        }
    }

    #[must_use]
    pub fn clothing_advice(&self) -> ClothingAdvice {
        ClothingAdvice::for_conditions(self.temperature, self.humidity)
    }
}

/// Flattened view of a single actuator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorView {
    pub key: DeviceKey,
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recording: Option<bool>,
}

impl ActuatorView {
    #[must_use]
    pub fn new(key: DeviceKey, actuator: &Actuator) -> Self {
        Self {
            key,
            name: actuator.name().to_string(),
            status: actuator.status(),
            brightness: actuator.brightness(),
            target_temp: actuator.target_temp(),
            is_recording: actuator.is_recording(),
        }
    }
}

/// Everything a dashboard needs to draw the apartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSnapshot {
    pub mode: Mode,
    pub breach_active: bool,
    pub status: SecurityStatus,
    /// `None` until the first environment pass.
    pub readings: Option<Readings>,
    pub advice: Option<ClothingAdvice>,
    pub actuators: Vec<ActuatorView>,
}

impl HomeSnapshot {
    #[must_use]
    pub fn actuator(&self, key: DeviceKey) -> Option<&ActuatorView> {
        self.actuators.iter().find(|view| view.key == key)
    }
}
