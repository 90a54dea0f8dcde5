//! # smartflatd: smartflat daemon
//!
//! Composition root that wires the control engine to a notifier and drives
//! it.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the notification bus and the control engine
//! - Poll the engine on a fixed cadence
//! - Read resident commands from stdin and forward them
//! - Schedule the delayed resolution that follows a panic
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no control logic belongs here.

pub mod command;
pub mod config;
pub mod driver;
