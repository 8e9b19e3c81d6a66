//! Step-by-step replay of engine traces
//!
//! - `step`: immutable step snapshots
//! - `driver`: the `StepSource` trait and the lazy `StepReplayDriver`
//! - `session`: single-active-run guard with reset-to-initial cancellation
//! - `pacing`: scheduler trait and the paced pull loop

pub mod driver;
pub mod pacing;
pub mod session;
pub mod step;

pub use driver::{run_to_end, StepReplayDriver, StepSource};
pub use pacing::{run_paced, ImmediateScheduler, PaceOutcome, Scheduler, SleepScheduler};
pub use session::{ReplaySession, SessionState};
pub use step::{Step, StepKind, StepPayload};
