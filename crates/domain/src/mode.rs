//! Arming mode and the derived security status shown to residents.

use serde::{Deserialize, Serialize};

/// Arming state of the apartment.
///
/// `Home` means disarmed: the security pass never evaluates sensors.
/// `Away` means armed: the next security pass may latch a breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Home,
    Away,
}

impl Mode {
    #[must_use]
    pub fn is_armed(self) -> bool {
        matches!(self, Self::Away)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Away => f.write_str("away"),
        }
    }
}

/// Status label combining [`Mode`] and the breach latch.
///
/// An active breach always wins over the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityStatus {
    Breach,
    Home,
    Away,
}

impl SecurityStatus {
    /// Derive the status from the current mode and latch.
    #[must_use]
    pub fn from_state(mode: Mode, breach_active: bool) -> Self {
        if breach_active {
            return Self::Breach;
        }
        match mode {
            Mode::Home => Self::Home,
            Mode::Away => Self::Away,
        }
    }
}

impl std::fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breach => f.write_str("SECURITY BREACH!"),
            Self::Home => f.write_str("Home Mode"),
            Self::Away => f.write_str("Away Mode"),
        }
    }
}
