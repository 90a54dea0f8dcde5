//! Environment pass: keeps climate actuators inside their hysteresis bands.

use rand::Rng;

use smartflat_domain::actuator::Actuator;
use smartflat_domain::snapshot::Readings;
use smartflat_domain::thresholds::Band;

use super::ControlEngine;
use crate::ports::Notifier;

impl<N: Notifier, R: Rng> ControlEngine<N, R> {
    /// Read temperature, humidity and dust, then drive the thermostat,
    /// dehumidifier and air purifier accordingly.
    ///
    /// Returns the raw readings; actuator states are queried separately.
    pub fn poll_environment(&mut self) -> Readings {
        let readings = Readings::new(
            self.temperature.read(&mut self.rng),
            self.humidity.read(&mut self.rng),
            self.dust.read(&mut self.rng),
        );
        tracing::debug!(
            temperature = readings.temperature,
            humidity = readings.humidity,
            dust = readings.dust,
            "environment sampled"
        );
        self.apply_environment(readings);
        readings
    }

    /// Apply the control rules to readings obtained elsewhere.
    pub fn apply_environment(&mut self, readings: Readings) {
        self.last_readings = Some(readings);

        let target = self
            .thermostat
            .target_temp()
            .unwrap_or(self.config.target_temp);
        let thermostat_band = self.config.thermostat_band(target);
        drive(&mut self.thermostat, thermostat_band, readings.temperature);
        drive(&mut self.dehumidifier, self.config.humidity, readings.humidity);
        drive(&mut self.air_purifier, self.config.dust, readings.dust);
    }
}

fn drive(actuator: &mut Actuator, band: Band, value: f64) {
    if let Some(next) = band.decide(value, actuator.status()) {
        actuator.set_status(next);
        tracing::debug!(device = actuator.name(), status = %next, value, "threshold crossed");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, engine_with};
    use smartflat_domain::device::DeviceKey;
    use smartflat_domain::sensor::SensorRange;
    use smartflat_domain::snapshot::Readings;
    use smartflat_domain::status::Status;
    use smartflat_domain::thresholds::EngineConfig;

    const MILD: Readings = Readings::new(24.0, 60.0, 30.0);

    fn with_temperature(temperature: f64) -> Readings {
        Readings { temperature, ..MILD }
    }

    fn with_humidity(humidity: f64) -> Readings {
        Readings { humidity, ..MILD }
    }

    fn with_dust(dust: f64) -> Readings {
        Readings { dust, ..MILD }
    }

    #[test]
    fn should_turn_thermostat_on_above_band() {
        let (mut engine, _) = engine();
        engine.apply_environment(with_temperature(25.5));
        assert_eq!(engine.actuator(DeviceKey::Thermostat).status(), Status::On);
    }

    #[test]
    fn should_turn_thermostat_off_below_band() {
        let (mut engine, _) = engine();
        engine.toggle(DeviceKey::Thermostat);
        engine.apply_environment(with_temperature(22.5));
        assert_eq!(engine.actuator(DeviceKey::Thermostat).status(), Status::Off);
    }

    #[test]
    fn should_hold_thermostat_inside_dead_band() {
        for initially_on in [false, true] {
            for temperature in [23.0, 23.5, 24.0, 24.5, 25.0] {
                let (mut engine, _) = engine();
                if initially_on {
                    engine.toggle(DeviceKey::Thermostat);
                }
                let before = engine.actuator(DeviceKey::Thermostat).status();
                engine.apply_environment(with_temperature(temperature));
                assert_eq!(
                    engine.actuator(DeviceKey::Thermostat).status(),
                    before,
                    "temperature {temperature}"
                );
            }
        }
    }

    #[test]
    fn should_follow_new_thermostat_target() {
        let (mut engine, _) = engine();
        engine.set_target_temperature(20.0).unwrap();
        engine.apply_environment(with_temperature(21.5));
        assert_eq!(engine.actuator(DeviceKey::Thermostat).status(), Status::On);
    }

    #[test]
    fn should_run_dehumidifier_between_seventy_and_fifty() {
        let (mut engine, _) = engine();
        engine.apply_environment(with_humidity(71.0));
        assert!(engine.actuator(DeviceKey::Dehumidifier).is_on());

        for humidity in [70.0, 60.0, 50.0] {
            engine.apply_environment(with_humidity(humidity));
            assert!(engine.actuator(DeviceKey::Dehumidifier).is_on(), "{humidity}");
        }

        engine.apply_environment(with_humidity(49.0));
        assert!(!engine.actuator(DeviceKey::Dehumidifier).is_on());

        for humidity in [50.0, 65.0, 70.0] {
            engine.apply_environment(with_humidity(humidity));
            assert!(!engine.actuator(DeviceKey::Dehumidifier).is_on(), "{humidity}");
        }
    }

    #[test]
    fn should_run_air_purifier_between_fifty_and_twenty() {
        let (mut engine, _) = engine();
        engine.apply_environment(with_dust(50.5));
        assert!(engine.actuator(DeviceKey::AirPurifier).is_on());

        for dust in [50.0, 35.0, 20.0] {
            engine.apply_environment(with_dust(dust));
            assert!(engine.actuator(DeviceKey::AirPurifier).is_on(), "{dust}");
        }

        engine.apply_environment(with_dust(19.99));
        assert!(!engine.actuator(DeviceKey::AirPurifier).is_on());

        for dust in [20.0, 45.0, 50.0] {
            engine.apply_environment(with_dust(dust));
            assert!(!engine.actuator(DeviceKey::AirPurifier).is_on(), "{dust}");
        }
    }

    #[test]
    fn should_not_touch_other_devices() {
        let (mut engine, notifier) = engine();
        engine.apply_environment(Readings::new(29.0, 79.0, 99.0));
        assert!(!engine.actuator(DeviceKey::Siren).is_on());
        assert!(!engine.actuator(DeviceKey::LivingRoomLight).is_on());
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn should_return_readings_within_sensor_ranges() {
        let (mut engine, _) = engine();
        for _ in 0..200 {
            let readings = engine.poll_environment();
            assert!((20.0..=30.0).contains(&readings.temperature));
            assert!((40.0..=80.0).contains(&readings.humidity));
            assert!((0.0..=100.0).contains(&readings.dust));
        }
    }

    #[test]
    fn should_drive_actuators_from_polled_readings() {
        let mut config = EngineConfig::default();
        config.sensors.temperature = SensorRange::new(25.5, 25.5);
        config.sensors.humidity = SensorRange::new(75.0, 75.0);
        config.sensors.dust = SensorRange::new(60.0, 60.0);
        let (mut engine, _) = engine_with(config);

        let readings = engine.poll_environment();

        assert_eq!(readings, Readings::new(25.5, 75.0, 60.0));
        assert!(engine.actuator(DeviceKey::Thermostat).is_on());
        assert!(engine.actuator(DeviceKey::Dehumidifier).is_on());
        assert!(engine.actuator(DeviceKey::AirPurifier).is_on());
        assert_eq!(engine.last_readings(), Some(readings));
    }
}
