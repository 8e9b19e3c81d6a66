//! `frontier dijkstra` - single-source shortest paths

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::graph_input::{load_graph, LoadedGraph};
use crate::commands::replay::{drive, print_steps, ReplayOptions};
use crate::output_by_format_result;
use frontier_core::error::{FrontierError, Result};
use frontier_core::graph::algos::ShortestPathOutcome;
use frontier_core::graph::{SampleGraph, ShortestPathEngine};
use frontier_core::records::{format_distance_line, format_header, format_totals_line};
use frontier_core::replay::Step;

/// Execute the dijkstra command
pub fn execute(
    ctx: &CommandContext,
    input: &GraphArgs,
    source: Option<&str>,
    target: Option<&str>,
) -> Result<()> {
    let cli = ctx.cli;
    let LoadedGraph { name, graph } = load_graph(input, SampleGraph::ShortestPath)?;
    let source = source.unwrap_or(ctx.config.graph.default_source.as_str());
    let options = ReplayOptions::from_context(ctx);

    let engine = ShortestPathEngine::new(&graph, source, target)?;

    match cli.format {
        OutputFormat::Human if !cli.quiet => {
            let target_note = target.map(|t| format!(" to {}", t)).unwrap_or_default();
            println!(
                "Dijkstra from {}{} on {} ({} nodes, {} edges)",
                source,
                target_note,
                name,
                graph.node_count(),
                graph.edge_count()
            );
            println!();
        }
        OutputFormat::Records => {
            let mut fields = vec![("graph", name.clone()), ("source", source.to_string())];
            if let Some(target) = target {
                fields.push(("target", target.to_string()));
            }
            println!("{}", format_header("dijkstra", &fields));
        }
        _ => {}
    }

    let (engine, steps) = drive(ctx, &options, engine)?;
    let outcome = engine.outcome();
    let last = steps
        .last()
        .ok_or_else(|| FrontierError::Other("dijkstra produced no steps".to_string()))?;

    print_steps(cli, &options, &steps);

    output_by_format_result!(cli.format,
        json => {
            let mut doc = serde_json::json!({
                "mode": "dijkstra",
                "graph": name,
                "outcome": outcome,
                "tree_edges": outcome.distances.tree_edges(),
                "message": last.message,
            });
            if options.show_steps {
                doc["steps"] = serde_json::to_value(&steps)?;
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok::<(), FrontierError>(())
        },
        human => {
            print_human(ctx, &options, &outcome, last);
        },
        records => {
            print_records(&outcome, &steps);
        }
    )
}

fn print_human(
    ctx: &CommandContext,
    options: &ReplayOptions,
    outcome: &ShortestPathOutcome,
    last: &Step,
) {
    if options.show_steps {
        println!();
    }
    let width = outcome
        .distances
        .iter()
        .map(|e| e.node.len())
        .max()
        .unwrap_or(0)
        .max("Node".len());

    println!("{:<width$}  {:>8}  Via", "Node", "Distance", width = width);
    for entry in outcome.distances.iter() {
        println!(
            "{:<width$}  {:>8}  {}",
            entry.node,
            entry.distance.to_string(),
            entry.predecessor.as_deref().unwrap_or("-"),
            width = width
        );
    }
    println!();
    println!("{}", last.message);

    if ctx.cli.verbose {
        let stats = outcome.frontier;
        println!(
            "Frontier: {} inserted, {} popped, {} stale discarded",
            stats.inserted, stats.popped, stats.stale_discarded
        );
    }
}

fn print_records(outcome: &ShortestPathOutcome, steps: &[Step]) {
    for entry in outcome.distances.iter() {
        println!("{}", format_distance_line(entry));
    }

    let mut totals = vec![
        ("steps", steps.len().to_string()),
        ("unreached", outcome.unreached.len().to_string()),
    ];
    if let Some(path) = &outcome.path {
        totals.push(("path", path.nodes.join(",")));
        totals.push(("cost", path.cost.to_string()));
    }
    totals.push(("inserted", outcome.frontier.inserted.to_string()));
    totals.push(("popped", outcome.frontier.popped.to_string()));
    totals.push(("stale", outcome.frontier.stale_discarded.to_string()));
    println!("{}", format_totals_line(&totals));
}
