//! Control thresholds and engine tuning.
//!
//! A [`Band`] is a pair of thresholds implementing hysteresis: a device turns
//! on once the reading exceeds `on_above` and turns off once it drops below
//! `off_below`. Between the two nothing changes.

use serde::{Deserialize, Serialize};

use crate::actuator::validate_target;
use crate::error::ValidationError;
use crate::sensor::SensorRange;
use crate::status::Status;

/// Enter/exit threshold pair. Invariant: `off_below <= on_above`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub on_above: f64,
    pub off_below: f64,
}

impl Band {
    #[must_use]
    pub const fn new(on_above: f64, off_below: f64) -> Self {
        Self {
            on_above,
            off_below,
        }
    }

    /// Symmetric band of `half_width` on either side of `center`.
    #[must_use]
    pub fn around(center: f64, half_width: f64) -> Self {
        Self::new(center + half_width, center - half_width)
    }

    /// The transition to apply for `value` given the `current` status, if any.
    #[must_use]
    pub fn decide(&self, value: f64, current: Status) -> Option<Status> {
        match current {
            Status::Off if value > self.on_above => Some(Status::On),
            Status::On if value < self.off_below => Some(Status::Off),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::InvertedBand`] when `off_below > on_above`
    /// or either bound is not finite.
    pub fn validate(&self, name: &'static str) -> Result<(), ValidationError> {
        if self.on_above.is_finite() && self.off_below.is_finite() && self.off_below <= self.on_above
        {
            Ok(())
        } else {
            Err(ValidationError::InvertedBand {
                name,
                on_above: self.on_above,
                off_below: self.off_below,
            })
        }
    }
}

/// Ranges the simulated sensors report within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorRanges {
    /// °C.
    pub temperature: SensorRange,
    /// Percent relative humidity.
    pub humidity: SensorRange,
    /// µg/m³.
    pub dust: SensorRange,
}

impl Default for SensorRanges {
    fn default() -> Self {
        Self {
            temperature: SensorRange::new(20.0, 30.0),
            humidity: SensorRange::new(40.0, 80.0),
            dust: SensorRange::new(0.0, 100.0),
        }
    }
}

/// Fixed thresholds and probabilities the engine is constructed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial living-room thermostat target, °C.
    pub target_temp: f64,
    /// Half-width of the thermostat dead-band around the target.
    pub thermostat_half_band: f64,
    /// Dehumidifier band, percent.
    pub humidity: Band,
    /// Air purifier band, µg/m³.
    pub dust: Band,
    /// Chance a single door sample reports open.
    pub door_probability: f64,
    /// Chance of an ambient motion trigger per armed security pass.
    pub motion_probability: f64,
    pub sensors: SensorRanges,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_temp: 24.0,
            thermostat_half_band: 1.0,
            humidity: Band::new(70.0, 50.0),
            dust: Band::new(50.0, 20.0),
            door_probability: 0.005,
            motion_probability: 0.05,
            sensors: SensorRanges::default(),
        }
    }
}

impl EngineConfig {
    /// The thermostat band for a given target.
    #[must_use]
    pub fn thermostat_band(&self, target: f64) -> Band {
        Band::around(target, self.thermostat_half_band)
    }

    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_probability("door_probability", self.door_probability)?;
        check_probability("motion_probability", self.motion_probability)?;
        if !self.thermostat_half_band.is_finite() || self.thermostat_half_band < 0.0 {
            return Err(ValidationError::NegativeValue {
                name: "thermostat_half_band",
                value: self.thermostat_half_band,
            });
        }
        self.humidity.validate("humidity")?;
        self.dust.validate("dust")?;
        self.sensors.temperature.validate("temperature")?;
        self.sensors.humidity.validate("humidity")?;
        self.sensors.dust.validate("dust")?;
        validate_target(self.target_temp)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::ProbabilityOutOfRange { name, value })
    }
}
