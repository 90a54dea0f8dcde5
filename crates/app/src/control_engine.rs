//! Control engine: the hub that owns every device of the apartment.
//!
//! The engine is driven from outside: a driver calls
//! [`poll_environment`](ControlEngine::poll_environment) and
//! [`poll_security`](ControlEngine::poll_security) on a fixed cadence and
//! forwards discrete resident actions (arm, disarm, panic, toggles). Every
//! operation runs to completion synchronously; the engine has no timers.
//!
//! The behaviour is split across submodules, each adding an `impl` block:
//!
//! | Module | Concern |
//! |--------|---------|
//! | `environment` | thermostat, dehumidifier and air purifier hysteresis |
//! | `security` | arm/disarm state machine and breach latch |
//! | `routines` | morning routine, panic button, incident resolution |
//! | `manual` | per-device manual controls and setpoints |

mod environment;
mod manual;
mod routines;
mod security;

#[cfg(test)]
pub(crate) mod test_support;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use smartflat_domain::actuator::Actuator;
use smartflat_domain::device::DeviceKey;
use smartflat_domain::error::SmartFlatError;
use smartflat_domain::mode::{Mode, SecurityStatus};
use smartflat_domain::notification::Notification;
use smartflat_domain::sensor::{DoorSensor, Sensor};
use smartflat_domain::snapshot::{ActuatorView, HomeSnapshot, Readings};
use smartflat_domain::thresholds::EngineConfig;

use crate::ports::Notifier;

/// Owns all sensors and actuators, the arming mode and the breach latch.
pub struct ControlEngine<N, R = StdRng> {
    config: EngineConfig,
    notifier: N,
    rng: R,

    temperature: Sensor,
    humidity: Sensor,
    dust: Sensor,
    door: DoorSensor,

    thermostat: Actuator,
    dehumidifier: Actuator,
    air_purifier: Actuator,
    living_room_light: Actuator,
    bedroom_light: Actuator,
    coffee_maker: Actuator,
    siren: Actuator,
    camera: Actuator,

    mode: Mode,
    breach_active: bool,
    last_readings: Option<Readings>,
}

impl<N: Notifier> ControlEngine<N, StdRng> {
    /// Build an engine whose readings are reproducible for a given `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFlatError::Validation`] if `config` is invalid.
    pub fn with_seed(config: EngineConfig, notifier: N, seed: u64) -> Result<Self, SmartFlatError> {
        Self::new(config, notifier, StdRng::seed_from_u64(seed))
    }

    /// Build an engine seeded from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFlatError::Validation`] if `config` is invalid.
    pub fn from_entropy(config: EngineConfig, notifier: N) -> Result<Self, SmartFlatError> {
        Self::new(config, notifier, StdRng::from_entropy())
    }
}

impl<N: Notifier, R: Rng> ControlEngine<N, R> {
    /// Create the engine with its fixed device set.
    ///
    /// Starts in [`Mode::Home`] with every actuator off.
    ///
    /// # Errors
    ///
    /// Returns [`SmartFlatError::Validation`] if `config` is invalid.
    pub fn new(config: EngineConfig, notifier: N, rng: R) -> Result<Self, SmartFlatError> {
        config.validate()?;
        let ranges = config.sensors;

        Ok(Self {
            temperature: Sensor::new("Temperature Sensor", ranges.temperature, "\u{b0}C")?,
            humidity: Sensor::new("Humidity Sensor", ranges.humidity, "%")?,
            dust: Sensor::new("Dust Sensor", ranges.dust, "\u{b5}g/m\u{b3}")?,
            door: DoorSensor::new("Main Door", config.door_probability)?,

            thermostat: Actuator::thermostat("living room", config.target_temp)?,
            dehumidifier: Actuator::switch("Dehumidifier"),
            air_purifier: Actuator::switch("Air Purifier"),
            living_room_light: Actuator::light("living room"),
            bedroom_light: Actuator::light("bedroom"),
            coffee_maker: Actuator::coffee_maker(),
            siren: Actuator::siren(),
            camera: Actuator::camera("living room"),

            mode: Mode::Home,
            breach_active: false,
            last_readings: None,

            config,
            notifier,
            rng,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn breach_active(&self) -> bool {
        self.breach_active
    }

    #[must_use]
    pub fn security_status(&self) -> SecurityStatus {
        SecurityStatus::from_state(self.mode, self.breach_active)
    }

    /// Readings from the most recent environment pass.
    #[must_use]
    pub fn last_readings(&self) -> Option<Readings> {
        self.last_readings
    }

    #[must_use]
    pub fn temperature_sensor(&self) -> &Sensor {
        &self.temperature
    }

    #[must_use]
    pub fn humidity_sensor(&self) -> &Sensor {
        &self.humidity
    }

    #[must_use]
    pub fn dust_sensor(&self) -> &Sensor {
        &self.dust
    }

    #[must_use]
    pub fn door_sensor(&self) -> &DoorSensor {
        &self.door
    }

    /// Borrow one of the owned actuators.
    #[must_use]
    pub fn actuator(&self, key: DeviceKey) -> &Actuator {
        match key {
            DeviceKey::LivingRoomLight => &self.living_room_light,
            DeviceKey::BedroomLight => &self.bedroom_light,
            DeviceKey::Thermostat => &self.thermostat,
            DeviceKey::Dehumidifier => &self.dehumidifier,
            DeviceKey::AirPurifier => &self.air_purifier,
            DeviceKey::CoffeeMaker => &self.coffee_maker,
            DeviceKey::Siren => &self.siren,
            DeviceKey::Camera => &self.camera,
        }
    }

    fn actuator_mut(&mut self, key: DeviceKey) -> &mut Actuator {
        match key {
            DeviceKey::LivingRoomLight => &mut self.living_room_light,
            DeviceKey::BedroomLight => &mut self.bedroom_light,
            DeviceKey::Thermostat => &mut self.thermostat,
            DeviceKey::Dehumidifier => &mut self.dehumidifier,
            DeviceKey::AirPurifier => &mut self.air_purifier,
            DeviceKey::CoffeeMaker => &mut self.coffee_maker,
            DeviceKey::Siren => &mut self.siren,
            DeviceKey::Camera => &mut self.camera,
        }
    }

    /// Capture the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> HomeSnapshot {
        HomeSnapshot {
            mode: self.mode,
            breach_active: self.breach_active,
            status: self.security_status(),
            readings: self.last_readings,
            advice: self.last_readings.map(|r| r.clothing_advice()),
            actuators: DeviceKey::ALL
                .into_iter()
                .map(|key| ActuatorView::new(key, self.actuator(key)))
                .collect(),
        }
    }

    fn notify(&self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            critical = notification.is_critical(),
            "emitting notification"
        );
        self.notifier.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{RecordingNotifier, engine, engine_with};
    use super::*;
    use smartflat_domain::error::ValidationError;
    use smartflat_domain::sensor::SensorRange;
    use smartflat_domain::status::Status;

    #[test]
    fn should_start_home_and_clear() {
        let (engine, _) = engine();
        assert_eq!(engine.mode(), Mode::Home);
        assert!(!engine.breach_active());
        assert_eq!(engine.security_status(), SecurityStatus::Home);
    }

    #[test]
    fn should_start_with_every_actuator_off() {
        let (engine, _) = engine();
        for key in DeviceKey::ALL {
            assert_eq!(engine.actuator(key).status(), Status::Off, "{key}");
        }
    }

    #[test]
    fn should_use_configured_target_temperature() {
        let config = EngineConfig {
            target_temp: 21.0,
            ..EngineConfig::default()
        };
        let (engine, _) = engine_with(config);
        assert_eq!(
            engine.actuator(DeviceKey::Thermostat).target_temp(),
            Some(21.0)
        );
    }

    #[test]
    fn should_reject_invalid_config() {
        let config = EngineConfig {
            door_probability: 2.0,
            ..EngineConfig::default()
        };
        let result = ControlEngine::with_seed(config, RecordingNotifier::shared(), 1);
        assert!(matches!(
            result,
            Err(SmartFlatError::Validation(
                ValidationError::ProbabilityOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn should_name_devices_like_the_apartment() {
        let (engine, _) = engine();
        assert_eq!(
            engine.actuator(DeviceKey::LivingRoomLight).name(),
            "Light in the living room"
        );
        assert_eq!(engine.actuator(DeviceKey::Siren).name(), "Alarm Siren");
        assert_eq!(engine.door_sensor().name(), "Door Sensor (Main Door)");
        assert_eq!(engine.temperature_sensor().unit(), "\u{b0}C");
    }

    #[test]
    fn should_snapshot_all_devices() {
        let (engine, _) = engine();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.actuators.len(), DeviceKey::ALL.len());
        assert_eq!(snapshot.mode, Mode::Home);
        assert!(snapshot.readings.is_none());
        assert!(snapshot.advice.is_none());
    }

    #[test]
    fn should_include_readings_in_snapshot_after_poll() {
        let (mut engine, _) = engine();
        let readings = engine.poll_environment();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.readings, Some(readings));
        assert_eq!(snapshot.advice, Some(readings.clothing_advice()));
    }

    #[test]
    fn should_keep_readings_inside_sensor_ranges() {
        let (mut engine, _) = engine();
        for _ in 0..200 {
            let readings = engine.poll_environment();
            assert!(engine.temperature_sensor().range().contains(readings.temperature));
            assert!(engine.humidity_sensor().range().contains(readings.humidity));
            assert!(engine.dust_sensor().range().contains(readings.dust));
            assert_eq!(engine.humidity_sensor().last_value(), readings.humidity);
        }
    }

    #[test]
    fn should_refuse_sensor_range_too_wide_to_sample() {
        let mut config = EngineConfig::default();
        config.sensors.dust = SensorRange::new(-1e308, 1e308);
        let result = ControlEngine::with_seed(config, RecordingNotifier::shared(), 1);
        assert!(matches!(
            result,
            Err(SmartFlatError::Validation(ValidationError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn should_reproduce_readings_for_same_seed() {
        let notifier = RecordingNotifier::shared();
        let mut a = ControlEngine::with_seed(EngineConfig::default(), notifier.clone(), 99).unwrap();
        let mut b = ControlEngine::with_seed(EngineConfig::default(), notifier, 99).unwrap();
        for _ in 0..10 {
            assert_eq!(a.poll_environment(), b.poll_environment());
        }
    }
}
