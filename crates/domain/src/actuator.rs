//! Actuators: on/off devices with kind-specific state.
//!
//! Every actuator shares the same power behaviour (`turn_on`, `turn_off`,
//! `toggle`). What differs between a light, a thermostat or a camera lives in
//! the [`ActuatorKind`] payload and is reached through dedicated accessors
//! that fail with [`ValidationError::UnsupportedOperation`] on the wrong kind.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::notification::Notification;
use crate::status::Status;

/// Lowest accepted thermostat target, in °C.
pub const MIN_TARGET_TEMP: f64 = 5.0;
/// Highest accepted thermostat target, in °C.
pub const MAX_TARGET_TEMP: f64 = 35.0;
/// Upper brightness bound (percent).
pub const MAX_BRIGHTNESS: u8 = 100;

/// Kind-specific actuator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActuatorKind {
    /// Plain on/off appliance (dehumidifier, air purifier).
    Switch,
    Light {
        /// Percent, `0..=100`.
        brightness: u8,
    },
    Thermostat {
        /// Target temperature in °C.
        target_temp: f64,
    },
    CoffeeMaker,
    Siren,
    Camera { is_recording: bool },
}

impl ActuatorKind {
    fn label(&self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Light { .. } => "light",
            Self::Thermostat { .. } => "thermostat",
            Self::CoffeeMaker => "coffee maker",
            Self::Siren => "siren",
            Self::Camera { .. } => "camera",
        }
    }
}

/// A controllable device.
#[derive(Debug, Clone, PartialEq)]
pub struct Actuator {
    name: String,
    status: Status,
    kind: ActuatorKind,
}

impl Actuator {
    /// A plain on/off appliance.
    #[must_use]
    pub fn switch(name: impl Into<String>) -> Self {
        Self::with_kind(name, ActuatorKind::Switch)
    }

    #[must_use]
    pub fn light(location: &str) -> Self {
        Self::with_kind(
            format!("Light in the {location}"),
            ActuatorKind::Light { brightness: 0 },
        )
    }

    /// A thermostat; `target_temp` is checked the same way as
    /// [`set_temperature`](Self::set_temperature).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TemperatureOutOfRange`] for an unacceptable
    /// target.
    pub fn thermostat(location: &str, target_temp: f64) -> Result<Self, ValidationError> {
        validate_target(target_temp)?;
        Ok(Self::with_kind(
            format!("Thermostat in the {location}"),
            ActuatorKind::Thermostat { target_temp },
        ))
    }

    #[must_use]
    pub fn coffee_maker() -> Self {
        Self::with_kind("Coffee Maker", ActuatorKind::CoffeeMaker)
    }

    #[must_use]
    pub fn siren() -> Self {
        Self::with_kind("Alarm Siren", ActuatorKind::Siren)
    }

    #[must_use]
    pub fn camera(location: &str) -> Self {
        Self::with_kind(
            format!("Camera in the {location}"),
            ActuatorKind::Camera {
                is_recording: false,
            },
        )
    }

    fn with_kind(name: impl Into<String>, kind: ActuatorKind) -> Self {
        Self {
            name: name.into(),
            status: Status::Off,
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.status.is_on()
    }

    #[must_use]
    pub fn kind(&self) -> &ActuatorKind {
        &self.kind
    }

    pub fn turn_on(&mut self) {
        self.status = Status::On;
    }

    pub fn turn_off(&mut self) {
        self.status = Status::Off;
    }

    pub fn toggle(&mut self) {
        self.status = self.status.flipped();
    }

    /// Drive the actuator to `status`; returns `true` if it changed.
    pub fn set_status(&mut self, status: Status) -> bool {
        let changed = self.status != status;
        self.status = status;
        changed
    }

    #[must_use]
    pub fn brightness(&self) -> Option<u8> {
        match self.kind {
            ActuatorKind::Light { brightness } => Some(brightness),
            _ => None,
        }
    }

    #[must_use]
    pub fn target_temp(&self) -> Option<f64> {
        match self.kind {
            ActuatorKind::Thermostat { target_temp } => Some(target_temp),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> Option<bool> {
        match self.kind {
            ActuatorKind::Camera { is_recording } => Some(is_recording),
            _ => None,
        }
    }

    /// Set a light's brightness, clamped to `0..=100`. Power is unchanged.
    ///
    /// Returns the stored level.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] if this is not a light.
    pub fn set_brightness(&mut self, level: u8) -> Result<u8, ValidationError> {
        if let ActuatorKind::Light { brightness } = &mut self.kind {
            *brightness = level.min(MAX_BRIGHTNESS);
            return Ok(*brightness);
        }
        Err(self.unsupported("set_brightness"))
    }

    /// Set a thermostat's target. Power is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TemperatureOutOfRange`] for non-finite
    /// targets or targets outside [`MIN_TARGET_TEMP`]..=[`MAX_TARGET_TEMP`],
    /// and [`ValidationError::UnsupportedOperation`] if this is not a
    /// thermostat.
    pub fn set_temperature(&mut self, temp: f64) -> Result<(), ValidationError> {
        if !matches!(self.kind, ActuatorKind::Thermostat { .. }) {
            return Err(self.unsupported("set_temperature"));
        }
        validate_target(temp)?;
        if let ActuatorKind::Thermostat { target_temp } = &mut self.kind {
            *target_temp = temp;
        }
        Ok(())
    }

    /// Ask the coffee maker to brew. Brewing completes immediately; the
    /// returned notification tells the resident the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] if this is not a
    /// coffee maker.
    pub fn start_brew(&self) -> Result<Notification, ValidationError> {
        if !matches!(self.kind, ActuatorKind::CoffeeMaker) {
            return Err(self.unsupported("start_brew"));
        }
        let message = if self.is_on() {
            "Brewing delicious coffee... Your coffee is ready!"
        } else {
            "Please turn on the coffee maker first."
        };
        Ok(Notification::info("Coffee Status", message))
    }

    /// Sound the siren. Only a powered siren makes noise; the return value
    /// says whether it does.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] if this is not a siren.
    pub fn sound_alarm(&self) -> Result<bool, ValidationError> {
        match self.kind {
            ActuatorKind::Siren => Ok(self.is_on()),
            _ => Err(self.unsupported("sound_alarm")),
        }
    }

    /// Start camera recording. Does not power the camera on.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] if this is not a camera.
    pub fn start_recording(&mut self) -> Result<(), ValidationError> {
        self.set_recording(true, "start_recording")
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedOperation`] if this is not a camera.
    pub fn stop_recording(&mut self) -> Result<(), ValidationError> {
        self.set_recording(false, "stop_recording")
    }

    fn set_recording(&mut self, value: bool, operation: &'static str) -> Result<(), ValidationError> {
        if let ActuatorKind::Camera { is_recording } = &mut self.kind {
            *is_recording = value;
            return Ok(());
        }
        Err(self.unsupported(operation))
    }

    fn unsupported(&self, operation: &'static str) -> ValidationError {
        ValidationError::UnsupportedOperation {
            operation,
            device: format!("{} ({})", self.name, self.kind.label()),
        }
    }
}

/// Accept finite targets within [`MIN_TARGET_TEMP`]..=[`MAX_TARGET_TEMP`].
pub(crate) fn validate_target(temp: f64) -> Result<(), ValidationError> {
    if temp.is_finite() && (MIN_TARGET_TEMP..=MAX_TARGET_TEMP).contains(&temp) {
        Ok(())
    } else {
        Err(ValidationError::TemperatureOutOfRange {
            value: temp,
            min: MIN_TARGET_TEMP,
            max: MAX_TARGET_TEMP,
        })
    }
}
