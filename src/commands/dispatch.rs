//! Command dispatch logic for frontier

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{dijkstra, huffman, prim, samples, traverse};
use frontier_core::config::FrontierConfig;
use frontier_core::error::Result;
use frontier_core::trace_time;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: FrontierConfig,
    pub start: Instant,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        println!("frontier {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step Dijkstra, Prim and Huffman constructions.");
        println!();
        println!("Run `frontier --help` for usage information.");
        return Ok(());
    };

    let config = FrontierConfig::resolve(cli.config.as_deref())?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext { cli, config, start };

    let result = match command {
        Commands::Dijkstra {
            input,
            source,
            target,
        } => dijkstra::execute(&ctx, input, source.as_deref(), target.as_deref()),
        Commands::Prim { input, start } => prim::execute(&ctx, input, start.as_deref()),
        Commands::Huffman {
            frequencies,
            text,
            encode,
            layout,
        } => huffman::execute(
            &ctx,
            huffman::HuffmanOptions {
                frequencies: frequencies.as_deref(),
                text: text.as_deref(),
                encode: encode.as_deref(),
                layout: *layout,
            },
        ),
        Commands::Traverse {
            values,
            order,
            layout,
        } => traverse::execute(&ctx, values.as_deref(), order.orders(), *layout),
        Commands::Samples => samples::execute(&ctx),
    };

    trace_time!(start, "command");
    result
}
