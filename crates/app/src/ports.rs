//! Port definitions: traits that drivers and adapters implement.
//!
//! Ports are the boundaries between the control engine and the outside
//! world. They live here so both the engine and the driver can depend on
//! them without creating circular dependencies.

pub mod notifier;

pub use notifier::Notifier;
