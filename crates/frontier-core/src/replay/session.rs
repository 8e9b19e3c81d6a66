//! Single-active-run guard around a replay driver

use super::driver::{StepReplayDriver, StepSource};
use super::step::Step;
use crate::error::{FrontierError, Result};
use serde::Serialize;

/// Lifecycle of a replay session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No run has been started, or the last one was cancelled
    Idle,
    /// A run is in progress; new starts are rejected
    Running,
    /// The last run produced its terminal step
    Completed,
}

/// Owns at most one active replay.
///
/// `start` while a run is in flight is rejected with
/// [`FrontierError::RunInProgress`] and leaves the running replay untouched.
/// `cancel` resets to the initial state by dropping the driver and its engine.
#[derive(Debug)]
pub struct ReplaySession<S> {
    driver: Option<StepReplayDriver<S>>,
    state: SessionState,
}

impl<S: StepSource> Default for ReplaySession<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StepSource> ReplaySession<S> {
    pub fn new() -> Self {
        ReplaySession {
            driver: None,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Begin replaying a fresh engine
    pub fn start(&mut self, source: S) -> Result<()> {
        if self.is_running() {
            tracing::warn!(
                engine = source.engine_name(),
                "start rejected: a replay is already running"
            );
            return Err(FrontierError::RunInProgress);
        }
        tracing::debug!(engine = source.engine_name(), "replay started");
        self.driver = Some(StepReplayDriver::new(source));
        self.state = SessionState::Running;
        Ok(())
    }

    /// Pull the next step of the active run.
    ///
    /// Returns `None` when idle, or when the run just ended (the session then
    /// moves to `Completed`).
    pub fn pull(&mut self) -> Option<Step> {
        if !self.is_running() {
            return None;
        }
        let driver = self.driver.as_mut()?;
        match driver.next() {
            Some(step) => Some(step),
            None => {
                self.state = SessionState::Completed;
                tracing::debug!(steps = driver.produced(), "replay completed");
                None
            }
        }
    }

    /// True when the active run has nothing left to pull
    pub fn is_drained(&self) -> bool {
        self.driver.as_ref().is_none_or(|d| d.is_finished())
    }

    /// Drop the active run and return to `Idle`
    pub fn cancel(&mut self) {
        if let Some(driver) = self.driver.take() {
            tracing::debug!(steps = driver.produced(), "replay cancelled");
        }
        self.state = SessionState::Idle;
    }

    /// Engine of the current or last completed run
    pub fn source(&self) -> Option<&S> {
        self.driver.as_ref().map(|d| d.source())
    }

    /// Take the engine out of a completed run
    pub fn into_source(self) -> Option<S> {
        self.driver.map(|d| d.into_source())
    }
}
