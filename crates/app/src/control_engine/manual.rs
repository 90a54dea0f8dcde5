//! Manual controls: what a resident can do from the dashboard.

use rand::Rng;

use smartflat_domain::device::DeviceKey;
use smartflat_domain::error::SmartFlatError;
use smartflat_domain::notification::Notification;
use smartflat_domain::status::Status;

use super::ControlEngine;
use crate::ports::Notifier;

impl<N: Notifier, R: Rng> ControlEngine<N, R> {
    /// Flip a device's power; returns the new status.
    pub fn toggle(&mut self, key: DeviceKey) -> Status {
        let actuator = self.actuator_mut(key);
        actuator.toggle();
        let status = actuator.status();
        tracing::info!(device = %key, %status, "toggled");
        status
    }

    /// Set a light's brightness (clamped to `0..=100`); returns the stored level.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFlatError::Validation`] if `key` is not a light.
    pub fn set_brightness(&mut self, key: DeviceKey, level: u8) -> Result<u8, SmartFlatError> {
        let stored = self.actuator_mut(key).set_brightness(level)?;
        tracing::debug!(device = %key, brightness = stored, "brightness set");
        Ok(stored)
    }

    /// Change the living-room thermostat target.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFlatError::Validation`] for a non-finite or out-of-range
    /// target; the previous target is kept.
    pub fn set_target_temperature(&mut self, target: f64) -> Result<(), SmartFlatError> {
        self.thermostat.set_temperature(target)?;
        tracing::debug!(target, "thermostat target set");
        Ok(())
    }

    /// The coffee maker's single button: brew when on, otherwise power it on.
    ///
    /// # Errors
    ///
    /// Only fails if the coffee maker slot holds another kind of device.
    pub fn press_coffee_maker(&mut self) -> Result<(), SmartFlatError> {
        if self.coffee_maker.is_on() {
            return self.brew_coffee();
        }
        self.coffee_maker.turn_on();
        self.notify(Notification::info(
            "Coffee Status",
            "Coffee Maker turned ON, ready to brew.",
        ));
        Ok(())
    }

    pub(super) fn brew_coffee(&mut self) -> Result<(), SmartFlatError> {
        let notification = self.coffee_maker.start_brew()?;
        self.notify(notification);
        Ok(())
    }
}
