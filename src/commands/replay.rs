//! Running an engine synchronously or as a paced, interruptible replay

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;
use frontier_core::error::{FrontierError, Result};
use frontier_core::records::format_step_line;
use frontier_core::replay::{
    run_paced, run_to_end, PaceOutcome, ReplaySession, SleepScheduler, Step, StepSource,
};

/// How a command should run its engine
#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub animate: bool,
    pub interval: Duration,
    pub show_steps: bool,
}

impl ReplayOptions {
    pub fn from_context(ctx: &CommandContext) -> Self {
        let interval = ctx
            .cli
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| ctx.config.interval());
        ReplayOptions {
            animate: ctx.cli.animate,
            interval,
            show_steps: ctx.cli.steps || ctx.cli.animate,
        }
    }

    /// Steps were already printed while the replay ran
    pub fn printed_live(&self) -> bool {
        self.animate
    }
}

/// Human rendering of one step
pub fn human_step_line(step: &Step) -> String {
    format!("{:>3}. {}", step.index + 1, step.message)
}

/// Print one step in the line-oriented formats; JSON collects steps instead
pub fn print_step(cli: &Cli, step: &Step) {
    match cli.format {
        OutputFormat::Human => println!("{}", human_step_line(step)),
        OutputFormat::Records => println!("{}", format_step_line(step)),
        OutputFormat::Json => {}
    }
}

/// Print collected steps unless they already went out live
pub fn print_steps(cli: &Cli, options: &ReplayOptions, steps: &[Step]) {
    if !options.show_steps || options.printed_live() {
        return;
    }
    for step in steps {
        print_step(cli, step);
    }
}

/// Run `engine` to its terminal step and hand it back with its trace.
///
/// With `--animate` the engine is driven through a [`ReplaySession`], one
/// step per interval, printing each step as it arrives. Ctrl-C abandons the
/// run at the next step boundary.
pub fn drive<S: StepSource>(
    ctx: &CommandContext,
    options: &ReplayOptions,
    mut engine: S,
) -> Result<(S, Vec<Step>)> {
    let name = engine.engine_name();
    if !options.animate {
        let steps = run_to_end(&mut engine);
        tracing::debug!(engine = name, steps = steps.len(), elapsed = ?ctx.start.elapsed(), "run_to_end");
        return Ok((engine, steps));
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %e, "failed to install interrupt handler");
    }

    let mut session = ReplaySession::new();
    session.start(engine)?;

    let mut steps = Vec::new();
    let outcome = run_paced(
        &mut session,
        &mut SleepScheduler,
        options.interval,
        &cancel,
        |step| {
            print_step(ctx.cli, step);
            steps.push(step.clone());
            Ok(())
        },
    )?;

    match outcome {
        PaceOutcome::Completed { steps: count } => {
            tracing::debug!(engine = name, steps = count, "animated replay complete");
            let engine = session.into_source().ok_or_else(|| {
                FrontierError::Other("replay finished without an engine".to_string())
            })?;
            Ok((engine, steps))
        }
        PaceOutcome::Cancelled { steps: count } => {
            tracing::info!(engine = name, steps = count, "animated replay cancelled");
            Err(FrontierError::Interrupted)
        }
    }
}
