//! Simulated sensors: bounded uniform readings from an injected random source.
//!
//! Sensors never own their randomness: every read takes a [`rand::Rng`] so the
//! caller decides whether readings are seeded (tests) or entropy-backed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive `[min, max]` range a sensor reports within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check that both bounds are finite and ordered, and that the width of
    /// the range is itself finite so it can be sampled.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRange`] otherwise.
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        if self.min <= self.max && (self.max - self.min).is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidRange {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            })
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A simulated environmental sensor.
#[derive(Debug, Clone)]
pub struct Sensor {
    name: String,
    range: SensorRange,
    unit: &'static str,
    last_value: f64,
}

impl Sensor {
    /// Build a sensor; `last_value` starts at `range.min`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRange`] if the range is inverted,
    /// not finite or too wide to sample.
    pub fn new(
        name: impl Into<String>,
        range: SensorRange,
        unit: &'static str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        range.validate(&name)?;
        Ok(Self {
            name,
            range,
            unit,
            last_value: range.min,
        })
    }

    /// Draw a new reading uniformly from the range, rounded to 2 decimals.
    pub fn read<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let raw = rng.gen_range(self.range.min..=self.range.max);
        self.last_value = round2(raw).clamp(self.range.min, self.range.max);
        self.last_value
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn range(&self) -> SensorRange {
        self.range
    }

    #[must_use]
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    #[must_use]
    pub fn last_value(&self) -> f64 {
        self.last_value
    }
}

/// Door contact sensor.
///
/// Opening is a rare independent event: each [`read_open`](Self::read_open)
/// reports open with `open_probability` and remembers the outcome so the
/// security pass can reason about the same observation.
#[derive(Debug, Clone)]
pub struct DoorSensor {
    name: String,
    open_probability: f64,
    is_open: bool,
}

impl DoorSensor {
    /// # Errors
    ///
    /// Returns [`ValidationError::ProbabilityOutOfRange`] when
    /// `open_probability` is outside `[0, 1]`.
    pub fn new(location: &str, open_probability: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&open_probability) {
            return Err(ValidationError::ProbabilityOutOfRange {
                name: "door_probability",
                value: open_probability,
            });
        }
        Ok(Self {
            name: format!("Door Sensor ({location})"),
            open_probability,
            is_open: false,
        })
    }

    /// Sample the contact and store the result.
    pub fn read_open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.is_open = rng.gen_bool(self.open_probability);
        self.is_open
    }

    /// Outcome of the most recent [`read_open`](Self::read_open).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
