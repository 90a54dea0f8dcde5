//! # smartflat-app
//!
//! Application layer: the control engine and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the `Notifier` port that drivers implement or reuse
//! - Own every sensor and actuator through a single `ControlEngine`
//! - Run the environment pass (hysteresis rules) and the security pass
//!   (arm/disarm state machine with a latched breach)
//! - Execute routines and the panic flow
//! - Provide in-process infrastructure that doesn't need IO (notification
//!   bus, mutex-serialized engine handle)
//!
//! ## Dependency rule
//! Depends on `smartflat-domain` only (plus `tokio::sync` for channels).
//! Timers and scheduling belong to the driver, never to this crate.

pub mod control_engine;
pub mod notification_bus;
pub mod ports;
pub mod shared;
