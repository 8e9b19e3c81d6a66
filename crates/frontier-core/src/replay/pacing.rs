//! Cooperative pacing of a replay by an external scheduler

use super::driver::StepSource;
use super::session::ReplaySession;
use super::step::Step;
use crate::error::Result;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Decides how the gap between two pulled steps is spent
pub trait Scheduler {
    fn wait(&mut self, interval: Duration);
}

/// Blocks the current thread for the interval
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepScheduler;

impl Scheduler for SleepScheduler {
    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Never waits; counts the waits it was asked for.
///
/// Pulling faster than real time must give the same result as a paced run,
/// which makes this the scheduler of choice for tests.
#[derive(Debug, Default, Clone)]
pub struct ImmediateScheduler {
    pub waits: Vec<Duration>,
}

impl Scheduler for ImmediateScheduler {
    fn wait(&mut self, interval: Duration) {
        self.waits.push(interval);
    }
}

/// How a paced replay ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PaceOutcome {
    Completed { steps: usize },
    Cancelled { steps: usize },
}

/// Pull steps from the session one at a time, waiting `interval` between
/// them.
///
/// Suspension only happens at step boundaries. `cancel` is checked before
/// every pull; when set, the session is reset and the run is abandoned.
/// A failing `on_step` resets the session the same way before its error
/// is returned.
pub fn run_paced<S, F>(
    session: &mut ReplaySession<S>,
    scheduler: &mut dyn Scheduler,
    interval: Duration,
    cancel: &AtomicBool,
    mut on_step: F,
) -> Result<PaceOutcome>
where
    S: StepSource,
    F: FnMut(&Step) -> Result<()>,
{
    let mut steps = 0;
    loop {
        if cancel.load(Ordering::SeqCst) {
            session.cancel();
            return Ok(PaceOutcome::Cancelled { steps });
        }

        let Some(step) = session.pull() else {
            return Ok(PaceOutcome::Completed { steps });
        };
        if let Err(e) = on_step(&step) {
            session.cancel();
            return Err(e);
        }
        steps += 1;

        if !session.is_drained() {
            scheduler.wait(interval);
        }
    }
}
