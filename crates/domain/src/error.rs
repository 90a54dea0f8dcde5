//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SmartFlatError`] via `#[from]`.

/// Top-level error for the smartflat core.
#[derive(Debug, thiserror::Error)]
pub enum SmartFlatError {
    /// A setpoint or configuration value violated a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Invariant violations detected when building or mutating domain objects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A probability was outside `[0, 1]` (or not a number).
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A hysteresis band whose release threshold sits above its trigger.
    #[error("{name} band is inverted: off_below {off_below} > on_above {on_above}")]
    InvertedBand {
        /// Name of the offending band.
        name: &'static str,
        /// Trigger threshold.
        on_above: f64,
        /// Release threshold.
        off_below: f64,
    },

    /// A sensor range with `min > max` (or non-finite bounds).
    #[error("{name} range is invalid: [{min}, {max}]")]
    InvalidRange {
        /// Sensor name.
        name: String,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A value that must be finite and non-negative was not.
    #[error("{name} must be a finite, non-negative number, got {value}")]
    NegativeValue {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A thermostat target outside the accepted setpoint range.
    #[error("target temperature {value} is outside [{min}, {max}]")]
    TemperatureOutOfRange {
        /// The rejected value.
        value: f64,
        /// Lowest accepted target.
        min: f64,
        /// Highest accepted target.
        max: f64,
    },

    /// The operation is not supported by this kind of actuator.
    #[error("{operation} is not supported by {device}")]
    UnsupportedOperation {
        /// Operation name, e.g. `"set_brightness"`.
        operation: &'static str,
        /// Device name.
        device: String,
    },
}
