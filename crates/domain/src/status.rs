//! Actuator power status.

use serde::{Deserialize, Serialize};

/// Whether an actuator is powered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    On,
    #[default]
    Off,
}

impl Status {
    /// The opposite status.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(Status::default(), Status::Off);
    }

    #[test]
    fn should_flip_between_on_and_off() {
        assert_eq!(Status::On.flipped(), Status::Off);
        assert_eq!(Status::Off.flipped(), Status::On);
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(Status::On.to_string(), "on");
        assert_eq!(Status::Off.to_string(), "off");
    }

    #[test]
    fn should_serialize_lowercase() {
        let json = serde_json::to_string(&Status::On).unwrap();
        assert_eq!(json, "\"on\"");
    }
}
