//! Breach reasons reported by the security pass.

/// Reasons picked at random when the door sensor trips while armed.
pub const DOOR_BREACH_REASONS: [&str; 4] = [
    "Unauthorized entry through a compromised lock.",
    "Motion detected in the main living area while apartment is empty.",
    "Main door sensor triggered while security is armed.",
    "Forced entry detected at a window on the ground floor.",
];

/// Reason used when only ambient motion fired.
pub const MOTION_BREACH_REASON: &str =
    "Motion detected in the main living area while apartment is empty.";

/// Reason used by the resident's panic button.
pub const PANIC_REASON: &str = "Panic button activated by resident.";

/// Title of the critical breach notification.
pub const BREACH_TITLE: &str = "SECURITY BREACH";

/// Message body of the critical breach notification.
#[must_use]
pub fn breach_message(reason: &str) -> String {
    format!("INTRUDER ALERT! Reason: {reason}")
}
