//! # smartflat-domain
//!
//! Pure domain model for the smartflat apartment controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, power [`status`], arming [`mode`]
//! - Define **Sensors** (bounded simulated readings, door contact)
//! - Define **Actuators** (on/off devices with kind-specific payloads)
//! - Define **Thresholds** (hysteresis bands, engine tuning)
//! - Define **Notifications** (messages addressed to the resident)
//! - Define the **Snapshot** read-model drivers render from
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Randomness is always supplied by the caller.

pub mod error;
pub mod mode;
pub mod status;

pub mod actuator;
pub mod advisory;
pub mod device;
pub mod notification;
pub mod security;
pub mod sensor;
pub mod snapshot;
pub mod thresholds;
