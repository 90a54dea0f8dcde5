//! The external driver: the only place where time passes.
//!
//! It polls the engine on a fixed cadence, forwards resident commands and
//! schedules the delayed resolution that follows a panic.

use std::time::Duration;

use smartflat_app::control_engine::ControlEngine;
use smartflat_app::ports::Notifier;
use smartflat_app::shared::SharedControlEngine;
use smartflat_domain::error::SmartFlatError;
use smartflat_domain::mode::SecurityStatus;
use smartflat_domain::notification::Notification;
use smartflat_domain::snapshot::Readings;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::command::{Command, HELP};
use crate::config::PollConfig;

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// A panic was raised; resolve it after the configured delay.
    ScheduleResolution,
    Quit,
}

/// Result of one poll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub readings: Readings,
    pub breach: bool,
    pub status: SecurityStatus,
}

/// Run one environment pass followed by one security pass, atomically.
pub fn tick<N: Notifier>(engine: &SharedControlEngine<N>) -> Tick {
    engine.with(|engine| {
        let readings = engine.poll_environment();
        let breach = engine.poll_security();
        Tick {
            readings,
            breach,
            status: engine.security_status(),
        }
    })
}

/// Apply a resident command.
///
/// # Errors
///
/// Returns [`SmartFlatError::Validation`] when a setpoint is rejected.
pub fn execute<N: Notifier>(
    engine: &SharedControlEngine<N>,
    command: Command,
) -> Result<Outcome, SmartFlatError> {
    match command {
        Command::Arm => engine.with(ControlEngine::arm),
        Command::Disarm => engine.with(ControlEngine::disarm),
        Command::Panic => {
            engine.with(ControlEngine::panic_button);
            return Ok(Outcome::ScheduleResolution);
        }
        Command::Morning => engine.with(ControlEngine::morning_routine)?,
        Command::Coffee => engine.with(ControlEngine::press_coffee_maker)?,
        Command::Toggle(key) => {
            engine.with(|engine| engine.toggle(key));
        }
        Command::Brightness(key, level) => {
            engine.with(|engine| engine.set_brightness(key, level))?;
        }
        Command::Temperature(target) => {
            engine.with(|engine| engine.set_target_temperature(target))?;
        }
        Command::Poll => log_tick(&tick(engine)),
        Command::Status => {
            let snapshot = engine.with(|engine| engine.snapshot());
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::warn!(error = %err, "failed to render snapshot"),
            }
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}

/// The single incident resolution waiting to fire, if any.
///
/// A resolution belongs to the panic that scheduled it. Arming, disarming or
/// raising a new panic cancels it so a stale timer never disarms a system the
/// resident has since re-armed.
#[derive(Debug, Default)]
pub struct PendingResolution(Option<JoinHandle<()>>);

impl PendingResolution {
    /// Track `handle`, aborting whatever was scheduled before.
    pub fn replace(&mut self, handle: JoinHandle<()>) {
        self.cancel();
        self.0 = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
            tracing::debug!("pending incident resolution cancelled");
        }
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.0.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

/// Apply a command and keep the pending resolution consistent with it.
///
/// Must be called from within a tokio runtime, since a panic spawns the
/// resolution task.
///
/// # Errors
///
/// Returns [`SmartFlatError::Validation`] when a setpoint is rejected.
pub fn dispatch<N>(
    engine: &SharedControlEngine<N>,
    command: Command,
    pending: &mut PendingResolution,
    resolve_after: Duration,
) -> Result<Outcome, SmartFlatError>
where
    N: Notifier + Send + 'static,
{
    if matches!(command, Command::Arm | Command::Disarm | Command::Panic) {
        pending.cancel();
    }
    let outcome = execute(engine, command)?;
    if outcome == Outcome::ScheduleResolution {
        pending.replace(schedule_resolution(engine.clone(), resolve_after));
    }
    Ok(outcome)
}

/// Resolve the current incident once `delay` has elapsed.
pub fn schedule_resolution<N>(engine: SharedControlEngine<N>, delay: Duration) -> JoinHandle<()>
where
    N: Notifier + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        engine.with(ControlEngine::resolve_incident);
        tracing::info!("incident resolved");
    })
}

/// Log every notification published on the bus until it closes.
pub async fn log_notifications(mut receiver: broadcast::Receiver<Notification>) {
    loop {
        match receiver.recv().await {
            Ok(notification) if notification.is_critical() => {
                tracing::error!(title = %notification.title, "{}", notification.message);
            }
            Ok(notification) => {
                tracing::info!(title = %notification.title, "{}", notification.message);
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "notification log lagging");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Drive the engine until `quit` or Ctrl-C. Polling continues after stdin closes.
///
/// # Errors
///
/// Returns an error if the startup routine fails or stdin cannot be read.
pub async fn run<N>(poll: &PollConfig, engine: SharedControlEngine<N>) -> Result<(), DriverError>
where
    N: Notifier + Send + 'static,
{
    engine.with(ControlEngine::morning_routine)?;

    let mut interval = tokio::time::interval(poll.interval());
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut pending = PendingResolution::default();

    loop {
        tokio::select! {
            _ = interval.tick() => log_tick(&tick(&engine)),
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed, polling only");
                    stdin_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        match dispatch(&engine, command, &mut pending, poll.panic_resolve_delay()) {
                            Ok(Outcome::Quit) => break,
                            Ok(Outcome::Continue | Outcome::ScheduleResolution) => {}
                            Err(err) => tracing::warn!(error = ?err, "command rejected"),
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "could not parse command"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }
    pending.cancel();
    Ok(())
}

fn log_tick(tick: &Tick) {
    let Readings {
        temperature,
        humidity,
        dust,
    } = tick.readings;
    tracing::info!(
        temperature,
        humidity,
        dust,
        status = %tick.status,
        advice = %tick.readings.clothing_advice(),
        "poll"
    );
}

/// Errors that stop the driver loop.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("engine error")]
    Engine(#[from] SmartFlatError),
    #[error("failed to read commands")]
    Io(#[from] std::io::Error),
}
