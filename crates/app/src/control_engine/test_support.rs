//! Shared fixtures for the control engine tests.

use std::sync::{Arc, Mutex};

use smartflat_domain::notification::Notification;
use smartflat_domain::thresholds::EngineConfig;

use super::ControlEngine;
use crate::ports::Notifier;

/// In-memory notifier that remembers everything it was given.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }

    pub(crate) fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    pub(crate) fn critical_count(&self) -> usize {
        self.notifications().iter().filter(|n| n.is_critical()).count()
    }

    pub(crate) fn clear(&self) {
        self.received.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

pub(crate) type TestEngine = ControlEngine<Arc<RecordingNotifier>>;

pub(crate) fn engine() -> (TestEngine, Arc<RecordingNotifier>) {
    engine_with(EngineConfig::default())
}

pub(crate) fn engine_with(config: EngineConfig) -> (TestEngine, Arc<RecordingNotifier>) {
    let notifier = RecordingNotifier::shared();
    let engine = ControlEngine::with_seed(config, notifier.clone(), 7).unwrap();
    (engine, notifier)
}

/// Neither the door nor motion can ever fire.
pub(crate) fn quiet_config() -> EngineConfig {
    EngineConfig {
        door_probability: 0.0,
        motion_probability: 0.0,
        ..EngineConfig::default()
    }
}

/// The door reports open on every sample; motion never fires.
pub(crate) fn door_open_config() -> EngineConfig {
    EngineConfig {
        door_probability: 1.0,
        motion_probability: 0.0,
        ..EngineConfig::default()
    }
}

/// The door stays shut; motion fires on every armed pass.
pub(crate) fn motion_config() -> EngineConfig {
    EngineConfig {
        door_probability: 0.0,
        motion_probability: 1.0,
        ..EngineConfig::default()
    }
}
