//! Security pass: arm/disarm state machine with a latched breach.
//!
//! ```text
//!   Home/Clear --arm--> Away/Clear --poll (door|motion)--> Away/Breached
//!        ^                                                      |
//!        +------------------------ disarm ----------------------+
//! ```
//!
//! Once latched, a breach survives every poll until [`disarm`] clears it.
//!
//! [`disarm`]: ControlEngine::disarm

use rand::Rng;
use rand::seq::SliceRandom;

use smartflat_domain::mode::Mode;
use smartflat_domain::notification::Notification;
use smartflat_domain::security::{
    BREACH_TITLE, DOOR_BREACH_REASONS, MOTION_BREACH_REASON, breach_message,
};

use super::ControlEngine;
use crate::ports::Notifier;

impl<N: Notifier, R: Rng> ControlEngine<N, R> {
    /// Evaluate the security sensors; returns whether a breach is active.
    ///
    /// - latched: returns `true` without touching any device
    /// - [`Mode::Home`]: returns `false` without sampling anything
    /// - [`Mode::Away`]: samples the door, then (if shut) ambient motion
    pub fn poll_security(&mut self) -> bool {
        if self.breach_active {
            return true;
        }
        if !self.mode.is_armed() {
            return false;
        }

        let door_open = self.door.read_open(&mut self.rng);
        let motion = !door_open && self.rng.gen_bool(self.config.motion_probability);
        if !door_open && !motion {
            return false;
        }

        let reason = if self.door.is_open() {
            DOOR_BREACH_REASONS
                .as_slice()
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(MOTION_BREACH_REASON)
        } else {
            MOTION_BREACH_REASON
        };
        self.trigger_breach(reason);
        true
    }

    /// Latch a breach and actuate every security device.
    ///
    /// Also the entry point for an externally raised panic: the side effects
    /// are the same whatever the reason.
    pub fn trigger_breach(&mut self, reason: &str) {
        self.breach_active = true;
        tracing::warn!(%reason, "security breach");
        self.notify(Notification::critical(BREACH_TITLE, breach_message(reason)));

        self.siren.turn_on();
        if self.siren.sound_alarm() == Ok(true) {
            tracing::info!("siren sounding");
        }
        self.living_room_light.turn_on();
        self.bedroom_light.turn_on();
        self.camera.turn_on();
        if let Err(err) = self.camera.start_recording() {
            tracing::warn!(error = %err, "camera did not start recording");
        }
    }

    /// Switch to [`Mode::Away`]. Evaluation waits for the next poll.
    pub fn arm(&mut self) {
        self.mode = Mode::Away;
        tracing::info!(mode = %self.mode, "security armed");
        self.notify(Notification::info("Security Alert", "Security System Armed."));
    }

    /// Return to [`Mode::Home`], clear the latch, silence the siren and
    /// switch both lights off. Camera and climate devices keep running.
    pub fn disarm(&mut self) {
        self.mode = Mode::Home;
        self.breach_active = false;
        self.siren.turn_off();
        self.living_room_light.turn_off();
        self.bedroom_light.turn_off();
        tracing::info!(mode = %self.mode, "security disarmed");
        self.notify(Notification::info("Security Alert", "Security System Disarmed."));
    }
}
