//! Routines: scripted sequences of device commands.
//!
//! Nothing here waits: each step runs immediately after the previous one.
//! Delayed follow-ups (such as resolving a panic after a few seconds) are
//! scheduled by the driver, which later calls
//! [`resolve_incident`](ControlEngine::resolve_incident).

use rand::Rng;

use smartflat_domain::error::SmartFlatError;
use smartflat_domain::notification::Notification;
use smartflat_domain::security::PANIC_REASON;

use super::ControlEngine;
use crate::ports::Notifier;

/// Bedroom light level set by the morning routine.
const MORNING_BRIGHTNESS: u8 = 40;
/// Thermostat target set by the morning routine, °C.
const MORNING_TARGET_TEMP: f64 = 23.0;

impl<N: Notifier, R: Rng> ControlEngine<N, R> {
    /// Light the bedroom, brew coffee and lower the thermostat target.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFlatError::Validation`] if a device rejects its setpoint.
    pub fn morning_routine(&mut self) -> Result<(), SmartFlatError> {
        self.notify(Notification::info(
            "Routine Status",
            "Initiating Morning Routine...",
        ));

        self.bedroom_light.turn_on();
        self.bedroom_light.set_brightness(MORNING_BRIGHTNESS)?;
        self.coffee_maker.turn_on();
        self.brew_coffee()?;
        self.thermostat.set_temperature(MORNING_TARGET_TEMP)?;

        tracing::info!("morning routine complete");
        self.notify(Notification::info(
            "Routine Status",
            "Morning routine complete.",
        ));
        Ok(())
    }

    /// The resident pressed the panic button.
    ///
    /// Raises a breach exactly like an automatic detection and confirms that
    /// help is on the way.
    pub fn panic_button(&mut self) {
        self.trigger_breach(PANIC_REASON);
        self.notify(Notification::info(
            "Alert Sent",
            "The authorities have been alerted. Please hang tight.",
        ));
    }

    /// Close an incident: disarm and reassure the resident.
    pub fn resolve_incident(&mut self) {
        self.disarm();
        self.notify(Notification::info(
            "Security Status Update",
            "Issue sorted out. Your apartment is SAFE.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, engine_with, quiet_config};
    use super::*;
    use smartflat_domain::device::DeviceKey;
    use smartflat_domain::mode::Mode;
    use smartflat_domain::security::breach_message;

    #[test]
    fn should_leave_expected_state_after_morning_routine() {
        let (mut engine, _) = engine();
        engine.morning_routine().unwrap();

        let bedroom = engine.actuator(DeviceKey::BedroomLight);
        assert!(bedroom.is_on());
        assert_eq!(bedroom.brightness(), Some(40));
        assert!(engine.actuator(DeviceKey::CoffeeMaker).is_on());
        assert_eq!(
            engine.actuator(DeviceKey::Thermostat).target_temp(),
            Some(23.0)
        );
    }

    #[test]
    fn should_announce_morning_routine_in_order() {
        let (mut engine, notifier) = engine();
        engine.morning_routine().unwrap();
        assert_eq!(
            notifier.messages(),
            vec![
                "Initiating Morning Routine...".to_string(),
                "Brewing delicious coffee... Your coffee is ready!".to_string(),
                "Morning routine complete.".to_string(),
            ]
        );
        assert_eq!(notifier.critical_count(), 0);
    }

    #[test]
    fn should_not_power_thermostat_during_morning_routine() {
        let (mut engine, _) = engine();
        engine.morning_routine().unwrap();
        assert!(!engine.actuator(DeviceKey::Thermostat).is_on());
        assert!(!engine.actuator(DeviceKey::LivingRoomLight).is_on());
    }

    #[test]
    fn should_raise_breach_and_confirm_on_panic() {
        let (mut engine, notifier) = engine_with(quiet_config());
        engine.panic_button();

        assert!(engine.breach_active());
        assert!(engine.actuator(DeviceKey::Siren).is_on());
        assert_eq!(
            notifier.titles(),
            vec!["SECURITY BREACH".to_string(), "Alert Sent".to_string()]
        );
        assert_eq!(notifier.messages()[0], breach_message(PANIC_REASON));
    }

    #[test]
    fn should_latch_panic_even_in_home_mode() {
        let (mut engine, _) = engine_with(quiet_config());
        engine.panic_button();
        assert_eq!(engine.mode(), Mode::Home);
        assert!(engine.poll_security());
    }

    #[test]
    fn should_disarm_and_reassure_when_resolving() {
        let (mut engine, notifier) = engine_with(quiet_config());
        engine.panic_button();
        notifier.clear();

        engine.resolve_incident();

        assert!(!engine.breach_active());
        assert_eq!(engine.mode(), Mode::Home);
        assert!(!engine.actuator(DeviceKey::Siren).is_on());
        assert_eq!(
            notifier.titles(),
            vec![
                "Security Alert".to_string(),
                "Security Status Update".to_string()
            ]
        );
    }
}
