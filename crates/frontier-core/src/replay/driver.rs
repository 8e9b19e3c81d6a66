//! Pull-based step sequence over any engine

use super::step::Step;

/// An engine that computes its result one step at a time.
///
/// `next_step` must return `None` forever once the engine has emitted its
/// terminal step.
pub trait StepSource {
    /// Advance the computation by one step
    fn next_step(&mut self) -> Option<Step>;

    /// True once the terminal step has been produced
    fn is_finished(&self) -> bool;

    /// Short engine name used in logs and output headers
    fn engine_name(&self) -> &'static str;
}

/// Run an engine synchronously and collect its whole trace
pub fn run_to_end<S: StepSource + ?Sized>(source: &mut S) -> Vec<Step> {
    std::iter::from_fn(|| source.next_step()).collect()
}

/// Finite, lazily-produced sequence of steps.
///
/// The driver never restarts in place: replaying again means building a fresh
/// engine and a fresh driver. It performs no timing of its own; an external
/// scheduler decides when to pull.
#[derive(Debug)]
pub struct StepReplayDriver<S> {
    source: S,
    produced: usize,
    exhausted: bool,
}

impl<S: StepSource> StepReplayDriver<S> {
    pub fn new(source: S) -> Self {
        StepReplayDriver {
            source,
            produced: 0,
            exhausted: false,
        }
    }

    /// True once the wrapped engine has nothing more to produce
    pub fn is_finished(&self) -> bool {
        self.exhausted || self.source.is_finished()
    }

    /// Number of steps handed out so far
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// Read access to the engine, e.g. for its result after the last step
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: StepSource> Iterator for StepReplayDriver<S> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.exhausted {
            return None;
        }
        match self.source.next_step() {
            Some(step) => {
                self.produced += 1;
                tracing::trace!(
                    engine = self.source.engine_name(),
                    index = step.index,
                    kind = %step.kind,
                    "step"
                );
                Some(step)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl<S: StepSource> std::iter::FusedIterator for StepReplayDriver<S> {}
