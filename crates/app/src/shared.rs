//! Mutex-serialized handle so several tasks can drive one engine.
//!
//! A driver typically has a poll timer, a command reader and delayed panic
//! resolutions all touching the same devices. Each of them goes through
//! [`SharedControlEngine::with`], which holds the lock for the whole
//! operation so passes never interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;

use crate::control_engine::ControlEngine;

/// Cloneable, thread-safe handle to a [`ControlEngine`].
pub struct SharedControlEngine<N, R = StdRng> {
    inner: Arc<Mutex<ControlEngine<N, R>>>,
}

impl<N, R> Clone for SharedControlEngine<N, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N, R> SharedControlEngine<N, R> {
    #[must_use]
    pub fn new(engine: ControlEngine<N, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut ControlEngine<N, R>) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Lock the engine, recovering from a poisoned mutex.
    ///
    /// Engine operations leave devices in a valid state at every step, so a
    /// panic in another holder does not invalidate what it left behind.
    fn lock(&self) -> MutexGuard<'_, ControlEngine<N, R>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("control engine lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}
